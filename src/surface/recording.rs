//! In-memory surface: records draw calls and replays scripted events.

use super::{Canvas, EventSource, Style, SurfaceEvent};
use crate::error::{DrawError, EventPollError};
use crate::geometry::Rect;
use std::collections::VecDeque;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

/// One recorded fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawCall {
    /// Style used for the fill.
    pub style: Style,
    /// Filled area in surface coordinates.
    pub rect: Rect,
}

impl fmt::Display for DrawCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.style.tag(),
            self.rect.x,
            self.rect.y,
            self.rect.width,
            self.rect.height
        )
    }
}

/// Shared, readable view of everything a [`RecordingCanvas`] has drawn.
#[derive(Debug, Clone, Default)]
pub struct DrawLog {
    calls: Arc<Mutex<Vec<DrawCall>>>,
    presents: Arc<Mutex<u64>>,
}

impl DrawLog {
    /// Number of fills recorded so far.
    pub fn len(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Check if nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        lock(&self.calls).is_empty()
    }

    /// Copy of all fills in the order they were issued.
    pub fn calls(&self) -> Vec<DrawCall> {
        lock(&self.calls).clone()
    }

    /// Number of times the canvas was presented.
    pub fn presents(&self) -> u64 {
        *lock(&self.presents)
    }
}

/// A canvas that keeps every fill in a [`DrawLog`].
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    log: DrawLog,
    fail_after: Option<usize>,
}

impl RecordingCanvas {
    /// Create an empty recording canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every fill after the first `calls` fail with a broken pipe.
    #[must_use]
    pub fn failing_after(mut self, calls: usize) -> Self {
        self.fail_after = Some(calls);
        self
    }

    /// Handle for reading the recorded calls from another thread.
    pub fn log(&self) -> DrawLog {
        self.log.clone()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, style: Style) -> Result<(), DrawError> {
        let mut calls = lock(&self.log.calls);
        if self.fail_after.is_some_and(|limit| calls.len() >= limit) {
            return Err(DrawError(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "recording canvas closed",
            )));
        }
        calls.push(DrawCall { style, rect });
        Ok(())
    }

    fn present(&mut self) -> Result<(), DrawError> {
        *lock(&self.log.presents) += 1;
        Ok(())
    }
}

/// A canvas that writes one line per fill, e.g. `fg 10 20 30 30`.
pub struct TranscriptCanvas<W: Write + Send + 'static> {
    out: W,
}

impl<W: Write + Send + 'static> TranscriptCanvas<W> {
    /// Create a transcript writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send + 'static> Canvas for TranscriptCanvas<W> {
    fn fill_rect(&mut self, rect: Rect, style: Style) -> Result<(), DrawError> {
        writeln!(self.out, "{}", DrawCall { style, rect }).map_err(DrawError)
    }

    fn present(&mut self) -> Result<(), DrawError> {
        self.out.flush().map_err(DrawError)
    }
}

/// One step of a [`ScriptedEvents`] script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scripted {
    /// Report this event immediately.
    Event(SurfaceEvent),
    /// Wait out the poll timeout and report nothing.
    Idle,
    /// Fail the poll with this error kind.
    Fail(io::ErrorKind),
}

/// An event source that replays a fixed script, then idles forever.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    script: VecDeque<Scripted>,
}

impl ScriptedEvents {
    /// Create a source from a script.
    pub fn new(script: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<SurfaceEvent>, EventPollError> {
        match self.script.pop_front() {
            Some(Scripted::Event(event)) => Ok(Some(event)),
            Some(Scripted::Fail(kind)) => {
                Err(EventPollError(io::Error::new(kind, "scripted poll failure")))
            }
            Some(Scripted::Idle) | None => {
                thread::sleep(timeout);
                Ok(None)
            }
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
