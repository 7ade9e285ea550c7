//! Actor Model: Message-passing concurrency for the animation.
//!
//! This module implements the actors on plain threads and crossbeam
//! channels:
//! - **Mover Actors**: One per rectangle, own its motion state
//! - **Render Actor**: The only thread that draws, serializes all fills
//! - **Dispatcher**: Spawns the actors, polls surface events, shuts down
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  DrawRequest   ┌─────────────────┐  fill_rect  ┌────────┐
//! │ Mover 0..N   │ ─────────────▶ │  bounded queue  │ ──────────▶ │ Canvas │
//! └──────────────┘    (FIFO)      │  Render Thread  │             └────────┘
//!        ▲                        └─────────────────┘
//!        │            Ack (one per request)   │
//!        └────────────────────────────────────┘
//!
//! ┌──────────────┐  poll_event   ┌─────────────┐
//! │  Dispatcher  │ ◀──────────── │ EventSource │
//! └──────────────┘               └─────────────┘
//! ```

mod dispatcher;
mod messages;
mod mover;
mod renderer;
pub mod shutdown;

pub use dispatcher::{initial_states, Dispatcher, Exit};
pub use messages::{Ack, DrawRequest, Snapshot};
pub use mover::MoverActor;
pub use renderer::{RenderStats, Renderer, RendererActor};
pub use shutdown::{Shutdown, ShutdownTrigger};
