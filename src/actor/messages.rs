//! Message types for actor communication.
//!
//! These types define the protocol between movers, the renderer and the
//! dispatcher.

use crate::geometry::{Rect, RectangleState};
use crossbeam_channel::{bounded, Receiver, Sender};

/// Read-only copy of one rectangle's state for a single draw cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Index of the submitting mover.
    pub mover: usize,
    /// Frame number for this mover, starting at 0.
    pub frame: u64,
    /// Footprint to draw.
    pub current: Rect,
    /// Footprint to erase first, `None` on the first frame.
    pub previous: Option<Rect>,
}

impl Snapshot {
    /// Capture `state` as frame `frame` of mover `mover`.
    pub fn of(mover: usize, frame: u64, state: &RectangleState) -> Self {
        Self {
            mover,
            frame,
            current: state.rect(),
            previous: state.previous_rect(),
        }
    }
}

/// One-shot completion signal for a single [`DrawRequest`].
///
/// Completing consumes the ack, so a request can be acknowledged at most
/// once.
#[derive(Debug)]
pub struct Ack {
    tx: Sender<()>,
}

impl Ack {
    /// Create an ack and the receiver its submitter waits on.
    pub fn pair() -> (Self, Receiver<()>) {
        let (tx, rx) = bounded(1);
        (Self { tx }, rx)
    }

    /// Signal completion to the submitter.
    ///
    /// Returns `false` if the submitter stopped waiting.
    pub fn complete(self) -> bool {
        self.tx.send(()).is_ok()
    }
}

/// A mover's request to have its rectangle drawn.
#[derive(Debug)]
pub struct DrawRequest {
    /// What to draw.
    pub snapshot: Snapshot,
    /// Signalled once the draw calls have been issued.
    pub ack: Ack,
}

impl DrawRequest {
    /// Create a request and the receiver that observes its completion.
    pub fn new(snapshot: Snapshot) -> (Self, Receiver<()>) {
        let (ack, done) = Ack::pair();
        (Self { snapshot, ack }, done)
    }
}
