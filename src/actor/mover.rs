//! Mover Actor: One thread per rectangle.
//!
//! A mover owns its [`RectangleState`] outright. Each frame it submits a
//! snapshot to the renderer queue, waits for that request's ack, sleeps
//! its pacing interval and steps the physics. It never has more than one
//! request in flight.

use super::messages::{DrawRequest, Snapshot};
use super::shutdown::Shutdown;
use crate::geometry::{RectangleState, Size};
use crossbeam_channel::{select, Sender};
use log::{debug, warn};
use std::io;
use std::thread::{self, JoinHandle};

/// Stack size for mover threads. The loop keeps almost nothing on the stack.
const MOVER_STACK_SIZE: usize = 64 * 1024;

/// Handle to a running mover thread.
pub struct MoverActor {
    id: usize,
    handle: Option<JoinHandle<u64>>,
}

impl MoverActor {
    /// Spawn a mover thread.
    ///
    /// # Arguments
    ///
    /// * `id` - Index of this mover, carried in every snapshot.
    /// * `state` - Initial rectangle state, moved into the thread.
    /// * `surface` - Bounds the rectangle bounces within.
    /// * `queue` - Shared renderer queue.
    /// * `shutdown` - Signal checked at every blocking point.
    /// * `max_frames` - Stop after this many acknowledged frames.
    pub fn spawn(
        id: usize,
        state: RectangleState,
        surface: Size,
        queue: Sender<DrawRequest>,
        shutdown: Shutdown,
        max_frames: Option<u64>,
    ) -> io::Result<Self> {
        let handle = thread::Builder::new()
            .name(format!("bouncebox-mover-{id}"))
            .stack_size(MOVER_STACK_SIZE)
            .spawn(move || Self::run_loop(id, state, surface, &queue, &shutdown, max_frames))?;

        Ok(Self {
            id,
            handle: Some(handle),
        })
    }

    /// Index of this mover.
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Check if the mover thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Wait for the mover thread to finish.
    ///
    /// Returns the number of acknowledged frames.
    pub fn join(mut self) -> u64 {
        self.handle
            .take()
            .and_then(|handle| handle.join().ok())
            .unwrap_or(0)
    }

    /// Main mover loop.
    fn run_loop(
        id: usize,
        mut state: RectangleState,
        surface: Size,
        queue: &Sender<DrawRequest>,
        shutdown: &Shutdown,
        max_frames: Option<u64>,
    ) -> u64 {
        let stop = shutdown.receiver();
        let mut frame = 0u64;
        debug!("mover {id} started at {:?}", state.position);

        loop {
            if max_frames.is_some_and(|max| frame >= max) {
                break;
            }

            let (request, done) = DrawRequest::new(Snapshot::of(id, frame, &state));

            // Blocks while the queue is full.
            select! {
                send(queue, request) -> sent => {
                    if sent.is_err() {
                        break;
                    }
                }
                recv(stop) -> _ => break,
            }

            select! {
                recv(done) -> acked => {
                    if acked.is_err() {
                        if !shutdown.is_fired() {
                            warn!("mover {id}: request {frame} dropped without ack");
                        }
                        break;
                    }
                }
                recv(stop) -> _ => break,
            }
            frame += 1;

            select! {
                recv(stop) -> _ => break,
                default(state.interval) => {}
            }

            state.step(surface);
        }

        debug!("mover {id} stopped after {frame} frames");
        frame
    }
}

impl Drop for MoverActor {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::shutdown;
    use crate::geometry::{BounceRule, Point};
    use crossbeam_channel::{bounded, RecvTimeoutError};
    use std::time::Duration;

    fn state() -> RectangleState {
        RectangleState {
            position: Point::new(0, 0),
            previous: None,
            width: 20,
            height: 20,
            velocity_x: 2,
            velocity_y: 3,
            interval: Duration::from_millis(1),
            bounce: BounceRule::Symmetric,
        }
    }

    #[test]
    fn test_one_request_in_flight() {
        let (queue_tx, queue_rx) = bounded(4);
        let (_trigger, signal) = shutdown::channel();
        let mover = MoverActor::spawn(0, state(), Size::new(100, 100), queue_tx, signal, Some(5)).unwrap();

        for frame in 0..5 {
            let request: DrawRequest = queue_rx.recv_timeout(Duration::from_secs(5)).unwrap();
            assert_eq!(request.snapshot.frame, frame);
            assert_eq!(request.snapshot.previous.is_none(), frame == 0);

            // Nothing else arrives until this one is acknowledged.
            assert!(matches!(
                queue_rx.recv_timeout(Duration::from_millis(30)),
                Err(RecvTimeoutError::Timeout)
            ));
            assert!(request.ack.complete());
        }

        assert_eq!(mover.join(), 5);
        assert!(queue_rx.try_recv().is_err());
    }

    #[test]
    fn test_snapshots_follow_physics() {
        let (queue_tx, queue_rx) = bounded(1);
        let (_trigger, signal) = shutdown::channel();
        let mover = MoverActor::spawn(7, state(), Size::new(100, 100), queue_tx, signal, Some(3)).unwrap();

        let mut expected = state();
        for frame in 0..3 {
            let request: DrawRequest = queue_rx.recv_timeout(Duration::from_secs(5)).unwrap();
            assert_eq!(request.snapshot, Snapshot::of(7, frame, &expected));
            request.ack.complete();
            expected.step(Size::new(100, 100));
        }
        assert_eq!(mover.join(), 3);
    }

    #[test]
    fn test_shutdown_while_waiting_for_ack() {
        let (queue_tx, queue_rx) = bounded(1);
        let (mut trigger, signal) = shutdown::channel();
        let mover = MoverActor::spawn(0, state(), Size::new(100, 100), queue_tx, signal, None).unwrap();

        let _request: DrawRequest = queue_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        trigger.fire();
        assert_eq!(mover.join(), 0);
    }

    #[test]
    fn test_shutdown_while_queue_full() {
        let (queue_tx, queue_rx) = bounded::<DrawRequest>(1);
        let (filler, _done) = DrawRequest::new(Snapshot::of(9, 0, &state()));
        queue_tx.send(filler).unwrap();

        let (mut trigger, signal) = shutdown::channel();
        let mover = MoverActor::spawn(0, state(), Size::new(100, 100), queue_tx, signal, None).unwrap();
        thread::sleep(Duration::from_millis(20));
        assert!(!mover.is_finished());

        trigger.fire();
        assert_eq!(mover.join(), 0);
        assert_eq!(queue_rx.len(), 1);
    }
}
