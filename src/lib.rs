//! # Bouncebox
//!
//! Many independently moving rectangles, one serialized renderer.
//!
//! Each rectangle is driven by its own mover thread. Movers never draw:
//! they hand a snapshot to a single renderer thread through a bounded
//! queue and wait for that request's acknowledgment before moving on.
//!
//! ## Core Concepts
//!
//! - **Actor model**: One thread per mover, one render thread, one dispatcher
//! - **Backpressure**: The request queue holds one slot per rectangle
//! - **Handshake**: A one-shot ack per request, so a mover never races ahead
//! - **Cooperative shutdown**: Every blocking point also watches a shutdown signal
//!
//! ## Example
//!
//! ```rust,no_run
//! use bouncebox::{Config, Dispatcher, TerminalSurface};
//!
//! let config = Config::default();
//! let surface = TerminalSurface::connect()?;
//! let canvas = surface.canvas(config.surface(), config.palette);
//! let mut dispatcher = Dispatcher::start(config, canvas, surface.events())?;
//! dispatcher.run()?;
//! dispatcher.shutdown()?;
//! # Ok::<(), bouncebox::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod config;
pub mod error;
pub mod geometry;
pub mod sim;
pub mod surface;

// Re-exports for convenience
pub use actor::{Dispatcher, Exit, RenderStats};
pub use config::Config;
pub use error::{ConfigError, ConnectionError, DrawError, Error, EventPollError, Result};
pub use geometry::{BounceRule, Rect, RectangleState, Size};
pub use sim::Simulation;
pub use surface::{Canvas, EventSource, Palette, Rgb, Style, SurfaceEvent, TerminalSurface};
