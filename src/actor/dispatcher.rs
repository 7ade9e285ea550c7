//! Dispatcher: Main coordinator that ties actors together.
//!
//! The dispatcher generates every rectangle up front, spawns the renderer
//! and one mover per rectangle, then sits in the surface event loop until
//! a key press, a fault, or every mover running out of frames.

use super::messages::DrawRequest;
use super::mover::MoverActor;
use super::renderer::{RenderStats, RendererActor};
use super::shutdown::{self, ShutdownTrigger};
use crate::config::Config;
use crate::error::{ConfigError, DrawError, Error, Result};
use crate::geometry::RectangleState;
use crate::surface::{Canvas, EventSource, SurfaceEvent};
use crossbeam_channel::{bounded, Receiver, TryRecvError};
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Why [`Dispatcher::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// A key was pressed.
    KeyPress,
    /// Every mover reached its frame limit.
    Finished,
}

/// Generate the initial state of every rectangle.
///
/// All rectangles come from one RNG seeded by [`Config::seed`], so a fixed
/// seed fixes every trajectory. The configuration is validated first.
pub fn initial_states(config: &Config) -> std::result::Result<Vec<RectangleState>, ConfigError> {
    config.validate()?;
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let surface = config.surface();
    Ok((0..config.rectangle_count)
        .map(|_| RectangleState::random(&mut rng, surface, config.bounce))
        .collect())
}

/// Owns the renderer and mover threads for one run.
pub struct Dispatcher<E: EventSource> {
    /// Configuration.
    config: Config,
    /// Surface events.
    events: E,
    /// Stops every actor when fired.
    trigger: ShutdownTrigger,
    /// Fatal errors from the render thread.
    faults: Receiver<DrawError>,
    /// Renderer actor handle.
    renderer: Option<RendererActor>,
    /// Mover actor handles.
    movers: Vec<MoverActor>,
}

impl<E: EventSource> Dispatcher<E> {
    /// Validate `config` and start all actors.
    ///
    /// `canvas` moves to the render thread. `events` stays with the
    /// dispatcher.
    pub fn start<C: Canvas>(config: Config, canvas: C, events: E) -> Result<Self> {
        let states = initial_states(&config)?;

        let (queue_tx, queue_rx) = bounded::<DrawRequest>(config.rectangle_count);
        let (fault_tx, faults) = bounded(1);
        let (trigger, signal) = shutdown::channel();

        let renderer = RendererActor::spawn(canvas, queue_rx, signal.clone(), fault_tx)
            .map_err(|source| Error::Spawn {
                role: "renderer",
                source,
            })?;

        let mut dispatcher = Self {
            movers: Vec::with_capacity(states.len()),
            config,
            events,
            trigger,
            faults,
            renderer: Some(renderer),
        };

        let surface = dispatcher.config.surface();
        for (id, state) in states.into_iter().enumerate() {
            // On failure, dropping `dispatcher` stops whatever already started.
            let mover = MoverActor::spawn(
                id,
                state,
                surface,
                queue_tx.clone(),
                signal.clone(),
                dispatcher.config.max_frames,
            )
            .map_err(|source| Error::Spawn {
                role: "mover",
                source,
            })?;
            dispatcher.movers.push(mover);
        }

        info!(
            "started {} movers on a {}x{} surface",
            dispatcher.movers.len(),
            surface.width,
            surface.height
        );
        Ok(dispatcher)
    }

    /// Number of mover threads.
    pub fn mover_count(&self) -> usize {
        self.movers.len()
    }

    /// Renderer statistics as of its last present.
    pub fn stats(&self) -> RenderStats {
        self.renderer
            .as_ref()
            .map(RendererActor::stats)
            .unwrap_or_default()
    }

    /// Check whether every mover has exited.
    pub fn movers_finished(&self) -> bool {
        self.movers.iter().all(MoverActor::is_finished)
    }

    /// Run the event loop.
    ///
    /// Returns on a key press or once every mover is done. Renderer faults
    /// and poll failures are returned as errors.
    pub fn run(&mut self) -> Result<Exit> {
        loop {
            self.check_faults()?;

            match self.events.poll_event(self.config.poll_timeout)? {
                Some(SurfaceEvent::KeyPress) => {
                    info!("key press, shutting down");
                    return Ok(Exit::KeyPress);
                }
                Some(SurfaceEvent::Other) | None => {}
            }

            if self.movers_finished() {
                self.check_faults()?;
                info!("all movers finished");
                return Ok(Exit::Finished);
            }
        }
    }

    /// Stop every actor, wait for them, and return final statistics.
    ///
    /// A draw fault raised while stopping is returned as an error.
    pub fn shutdown(mut self) -> Result<RenderStats> {
        let stats = self.stop();
        self.check_faults()?;
        Ok(stats)
    }

    fn check_faults(&self) -> Result<()> {
        match self.faults.try_recv() {
            Ok(fault) => Err(fault.into()),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => Ok(()),
        }
    }

    fn stop(&mut self) -> RenderStats {
        if self.trigger.is_fired() && self.renderer.is_none() {
            return RenderStats::default();
        }
        self.trigger.fire();

        let mut frames = 0u64;
        for mover in self.movers.drain(..) {
            let id = mover.id();
            let drawn = mover.join();
            trace!("mover {id} joined after {drawn} frames");
            frames += drawn;
        }
        debug!("movers joined after {frames} frames in total");

        let stats = self
            .renderer
            .take()
            .map(RendererActor::join)
            .unwrap_or_default();
        info!(
            "shutdown complete: {} requests, {} draw calls",
            stats.requests, stats.draw_calls
        );
        stats
    }
}

impl<E: EventSource> Drop for Dispatcher<E> {
    fn drop(&mut self) {
        self.stop();
    }
}
