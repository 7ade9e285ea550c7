//! Surface module: The display collaborator behind the renderer.
//!
//! A display is split in two halves so that drawing and event polling can
//! live on different threads:
//! - [`Canvas`]: the draw side, owned by the renderer actor
//! - [`EventSource`]: the poll side, owned by the dispatcher
//!
//! Backends shipped with the crate:
//! - [`TerminalSurface`]: crossterm raw mode and alternate screen
//! - [`RecordingCanvas`] / [`ScriptedEvents`]: in-memory, for tests
//! - [`TranscriptCanvas`]: one text line per fill, for headless runs

mod output;
mod recording;
mod style;
mod terminal;

pub use output::OutputBuffer;
pub use recording::{DrawCall, DrawLog, RecordingCanvas, Scripted, ScriptedEvents, TranscriptCanvas};
pub use style::{Palette, Rgb, Style};
pub use terminal::{TerminalCanvas, TerminalEvents, TerminalSurface, Viewport};

use crate::error::{DrawError, EventPollError};
use crate::geometry::Rect;
use std::time::Duration;

/// Events reported by a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// Any key was pressed.
    KeyPress,
    /// Anything else (resize, focus, mouse, key release).
    Other,
}

/// Draw side of a display.
///
/// Only the renderer actor holds a canvas, so implementations need no
/// internal locking.
pub trait Canvas: Send + 'static {
    /// Fill `rect` (surface coordinates) with the colour of `style`.
    fn fill_rect(&mut self, rect: Rect, style: Style) -> Result<(), DrawError>;

    /// Push any buffered draw calls to the display.
    fn present(&mut self) -> Result<(), DrawError>;
}

/// Poll side of a display.
pub trait EventSource {
    /// Wait up to `timeout` for the next event.
    ///
    /// Returns `Ok(None)` if nothing arrived in time.
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<SurfaceEvent>, EventPollError>;
}
