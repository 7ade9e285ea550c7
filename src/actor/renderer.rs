//! Renderer Actor: Dedicated thread for all draw calls.
//!
//! This actor owns the canvas. It drains the shared request queue in FIFO
//! order, erases each rectangle's previous footprint, draws the new one and
//! acknowledges the originating mover. Since it is the only thread that
//! touches the canvas, two rectangles' erase+draw sequences never
//! interleave.

use super::messages::{DrawRequest, Snapshot};
use super::shutdown::Shutdown;
use crate::error::DrawError;
use crate::surface::{Canvas, Style};
use crossbeam_channel::{select, Receiver, Sender};
use log::{error, info};
use std::io;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

/// Render statistics for debugging/profiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Requests fully drawn and acknowledged.
    pub requests: u64,
    /// Fill calls issued to the canvas.
    pub draw_calls: u64,
    /// Requests drawn without an erase (first frames).
    pub erases_skipped: u64,
    /// Times the canvas was presented.
    pub presents: u64,
    /// Acks whose mover had already stopped waiting.
    pub orphaned_acks: u64,
}

/// Draws single requests onto a canvas.
///
/// Shared by the threaded renderer and the lockstep simulation so both
/// issue exactly the same draw calls.
pub struct Renderer<C: Canvas> {
    canvas: C,
    stats: RenderStats,
}

impl<C: Canvas> Renderer<C> {
    /// Create a renderer over `canvas`.
    pub fn new(canvas: C) -> Self {
        Self {
            canvas,
            stats: RenderStats::default(),
        }
    }

    /// Statistics so far.
    pub const fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Give back the canvas.
    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Erase the previous footprint (if any) and draw the current one.
    pub fn draw(&mut self, snapshot: &Snapshot) -> Result<(), DrawError> {
        if let Some(previous) = snapshot.previous {
            self.canvas.fill_rect(previous, Style::Background)?;
            self.stats.draw_calls += 1;
        } else {
            self.stats.erases_skipped += 1;
        }
        self.canvas.fill_rect(snapshot.current, Style::Foreground)?;
        self.stats.draw_calls += 1;
        self.stats.requests += 1;
        Ok(())
    }

    /// Draw a request and acknowledge its mover.
    ///
    /// On failure the ack is dropped unsignalled; the mover sees a closed
    /// channel and stops.
    pub fn handle(&mut self, request: DrawRequest) -> Result<(), DrawError> {
        self.draw(&request.snapshot)?;
        if !request.ack.complete() {
            self.stats.orphaned_acks += 1;
        }
        Ok(())
    }

    /// Flush buffered draw calls.
    pub fn present(&mut self) -> Result<(), DrawError> {
        self.canvas.present()?;
        self.stats.presents += 1;
        Ok(())
    }
}

/// Renderer actor that owns the canvas on its own thread.
pub struct RendererActor {
    /// Handle to the render thread.
    handle: Option<JoinHandle<()>>,
    /// Latest statistics, published after every present.
    stats: Arc<Mutex<RenderStats>>,
}

impl RendererActor {
    /// Spawn the renderer actor thread.
    ///
    /// # Arguments
    ///
    /// * `canvas` - Canvas to draw on, moved into the thread.
    /// * `queue` - Shared request queue fed by movers.
    /// * `shutdown` - Signal that stops the loop.
    /// * `faults` - Where a fatal draw error is reported.
    pub fn spawn<C: Canvas>(
        canvas: C,
        queue: Receiver<DrawRequest>,
        shutdown: Shutdown,
        faults: Sender<DrawError>,
    ) -> io::Result<Self> {
        let stats = Arc::new(Mutex::new(RenderStats::default()));
        let published = Arc::clone(&stats);

        let handle = thread::Builder::new()
            .name("bouncebox-render".to_string())
            .spawn(move || {
                let mut renderer = Renderer::new(canvas);
                let result = Self::run_loop(&mut renderer, &queue, &shutdown, &published);
                Self::publish(&published, renderer.stats());
                if let Err(e) = result {
                    error!("render thread stopped: {e}");
                    let _ = faults.send(e);
                }
            })?;

        Ok(Self {
            handle: Some(handle),
            stats,
        })
    }

    /// Statistics as of the last present.
    pub fn stats(&self) -> RenderStats {
        *self.stats.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Wait for the render thread to finish and return final statistics.
    pub fn join(mut self) -> RenderStats {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        self.stats()
    }

    fn publish(slot: &Mutex<RenderStats>, stats: RenderStats) {
        *slot.lock().unwrap_or_else(PoisonError::into_inner) = stats;
    }

    /// Main render loop.
    fn run_loop<C: Canvas>(
        renderer: &mut Renderer<C>,
        queue: &Receiver<DrawRequest>,
        shutdown: &Shutdown,
        published: &Mutex<RenderStats>,
    ) -> Result<(), DrawError> {
        let stop = shutdown.receiver();

        loop {
            select! {
                recv(queue) -> request => match request {
                    Ok(request) => renderer.handle(request)?,
                    // Every mover is gone.
                    Err(_) => break,
                },
                recv(stop) -> _ => break,
            }

            if queue.is_empty() {
                renderer.present()?;
                Self::publish(published, renderer.stats());
            }
        }

        renderer.present()?;
        info!("renderer stopped after {} requests", renderer.stats().requests);
        Ok(())
    }
}

impl Drop for RendererActor {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
