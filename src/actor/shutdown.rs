//! Cooperative shutdown signal.
//!
//! The trigger holds the only sender of a channel that never carries a
//! message. Firing drops that sender, which disconnects every
//! [`Shutdown`] receiver at once and wakes any `select!` waiting on it.

use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};

/// Fires the shutdown signal. Dropping it fires too.
#[derive(Debug)]
pub struct ShutdownTrigger {
    tx: Option<Sender<()>>,
}

/// Observes the shutdown signal. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Shutdown {
    rx: Receiver<()>,
}

/// Create a connected trigger and signal.
pub fn channel() -> (ShutdownTrigger, Shutdown) {
    let (tx, rx) = bounded(0);
    (ShutdownTrigger { tx: Some(tx) }, Shutdown { rx })
}

impl ShutdownTrigger {
    /// Fire the signal. Idempotent.
    pub fn fire(&mut self) {
        self.tx.take();
    }

    /// Check if the signal has been fired.
    pub const fn is_fired(&self) -> bool {
        self.tx.is_none()
    }
}

impl Shutdown {
    /// Receiver that becomes ready (disconnected) once the signal fires.
    ///
    /// Use it as a `recv` arm in `crossbeam_channel::select!`.
    pub const fn receiver(&self) -> &Receiver<()> {
        &self.rx
    }

    /// Check if the signal has fired.
    pub fn is_fired(&self) -> bool {
        matches!(self.rx.try_recv(), Err(TryRecvError::Disconnected))
    }
}
