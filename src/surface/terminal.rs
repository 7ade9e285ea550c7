//! Terminal surface: crossterm raw mode, alternate screen and ANSI fills.
//!
//! The logical surface (e.g. 2048x1400) is projected onto the terminal's
//! cell grid by [`Viewport`]. A rectangle covers every cell it touches, so
//! small rectangles never vanish.

use super::output::OutputBuffer;
use super::{Canvas, EventSource, Palette, Style, SurfaceEvent};
use crate::error::{ConnectionError, DrawError, EventPollError};
use crate::geometry::{Rect, Size};
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// Buffered output is written out once it grows past this many bytes,
/// even if the renderer has not asked to present yet.
const FLUSH_THRESHOLD: usize = 48 * 1024;

/// Maps surface coordinates onto a grid of terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    surface: Size,
    cells: Size,
}

impl Viewport {
    /// Create a viewport showing `surface` on a grid of `cells`.
    pub const fn new(surface: Size, cells: Size) -> Self {
        Self { surface, cells }
    }

    /// Project a surface rectangle to the cells it touches.
    ///
    /// Returns `None` when the projection covers no cells.
    pub fn project(&self, rect: Rect) -> Option<Rect> {
        let (x0, x1) = Self::span(u32::from(rect.x), rect.right(), self.surface.width, self.cells.width);
        let (y0, y1) = Self::span(u32::from(rect.y), rect.bottom(), self.surface.height, self.cells.height);
        let cells = Rect::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0));
        (!cells.is_empty()).then_some(cells)
    }

    /// Map `[start, end)` on an axis of `surface` units onto `cells` cells.
    fn span(start: u32, end: u32, surface: u16, cells: u16) -> (u16, u16) {
        let surface = u32::from(surface).max(1);
        let cells_u32 = u32::from(cells);
        let first = (start * cells_u32 / surface).min(cells_u32);
        let last = (end * cells_u32).div_ceil(surface).min(cells_u32);
        // Both are bounded by `cells`, so they fit.
        (
            u16::try_from(first).unwrap_or(cells),
            u16::try_from(last).unwrap_or(cells),
        )
    }
}

/// A [`Canvas`] that paints filled rectangles as coloured blank cells.
pub struct TerminalCanvas<W: Write + Send + 'static> {
    out: W,
    buf: OutputBuffer,
    viewport: Viewport,
    palette: Palette,
}

impl<W: Write + Send + 'static> TerminalCanvas<W> {
    /// Create a canvas writing to `out`.
    ///
    /// The first [`present`](Canvas::present) clears the whole grid to the
    /// background colour.
    pub fn new(out: W, viewport: Viewport, palette: Palette) -> Self {
        let mut buf = OutputBuffer::new();
        buf.set_bg(palette.background);
        buf.clear_screen();
        Self {
            out,
            buf,
            viewport,
            palette,
        }
    }

    /// The underlying writer.
    pub const fn writer(&self) -> &W {
        &self.out
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        self.buf.flush_to(&mut self.out)?;
        self.buf.clear();
        Ok(())
    }
}

impl<W: Write + Send + 'static> Canvas for TerminalCanvas<W> {
    fn fill_rect(&mut self, rect: Rect, style: Style) -> Result<(), DrawError> {
        let Some(cells) = self.viewport.project(rect) else {
            return Ok(());
        };

        self.buf.set_bg(self.palette.color(style));
        for row in cells.y..cells.y + cells.height {
            self.buf.cursor_move(cells.x, row);
            self.buf.blanks(cells.width);
        }

        if self.buf.len() >= FLUSH_THRESHOLD {
            self.flush().map_err(DrawError)?;
        }
        Ok(())
    }

    fn present(&mut self) -> Result<(), DrawError> {
        self.flush().map_err(DrawError)
    }
}

/// Terminal session guard.
///
/// While alive, the terminal is in raw mode on the alternate screen with a
/// hidden cursor. Dropping it restores the terminal.
pub struct TerminalSurface {
    cells: Size,
}

impl TerminalSurface {
    /// Take over the controlling terminal.
    pub fn connect() -> Result<Self, ConnectionError> {
        let (cols, rows) = terminal::size().map_err(ConnectionError)?;
        terminal::enable_raw_mode().map_err(ConnectionError)?;

        // From here on, dropping `surface` undoes whatever succeeded.
        let surface = Self {
            cells: Size::new(cols, rows),
        };
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide).map_err(ConnectionError)?;
        Ok(surface)
    }

    /// Terminal size in cells at connect time.
    pub const fn cells(&self) -> Size {
        self.cells
    }

    /// Create the draw side, showing a logical surface of size `surface`.
    pub fn canvas(&self, surface: Size, palette: Palette) -> TerminalCanvas<Stdout> {
        TerminalCanvas::new(io::stdout(), Viewport::new(surface, self.cells), palette)
    }

    /// Create the poll side.
    pub const fn events(&self) -> TerminalEvents {
        TerminalEvents { _private: () }
    }

    /// Restore the terminal. Equivalent to dropping the guard.
    pub fn close(self) {}
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, crossterm::style::ResetColor, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// [`EventSource`] over crossterm's global event queue.
pub struct TerminalEvents {
    _private: (),
}

impl TerminalEvents {
    /// Reduce a crossterm event to what the dispatcher cares about.
    fn convert_event(event: &Event) -> SurfaceEvent {
        match event {
            // Only presses count, not releases or repeats.
            Event::Key(key) if key.kind == KeyEventKind::Press => SurfaceEvent::KeyPress,
            _ => SurfaceEvent::Other,
        }
    }
}

impl EventSource for TerminalEvents {
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<SurfaceEvent>, EventPollError> {
        if !event::poll(timeout).map_err(EventPollError)? {
            return Ok(None);
        }
        let event = event::read().map_err(EventPollError)?;
        Ok(Some(Self::convert_event(&event)))
    }
}
