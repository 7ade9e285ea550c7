//! Lockstep simulation: the whole swarm on one thread.
//!
//! Every round, each rectangle in index order is drawn through the same
//! [`Renderer`] the render thread uses, then stepped. That is the order a
//! real run produces when all movers share one pacing interval, so per-
//! rectangle draw sequences match a threaded run exactly, and the global
//! sequence depends only on the seed.

use crate::actor::{initial_states, RenderStats, Renderer, Snapshot};
use crate::config::Config;
use crate::error::{ConfigError, DrawError};
use crate::geometry::{RectangleState, Size};
use crate::surface::Canvas;

/// Single-threaded driver over mover physics and renderer draw calls.
pub struct Simulation<C: Canvas> {
    surface: Size,
    states: Vec<RectangleState>,
    renderer: Renderer<C>,
    frame: u64,
}

impl<C: Canvas> Simulation<C> {
    /// Generate rectangles from `config` and prepare to draw on `canvas`.
    pub fn new(config: &Config, canvas: C) -> Result<Self, ConfigError> {
        Ok(Self {
            surface: config.surface(),
            states: initial_states(config)?,
            renderer: Renderer::new(canvas),
            frame: 0,
        })
    }

    /// Current rectangle states, indexed by mover id.
    pub fn states(&self) -> &[RectangleState] {
        &self.states
    }

    /// Rounds completed so far.
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// Draw every rectangle once, present, then step every rectangle.
    pub fn step(&mut self) -> Result<(), DrawError> {
        for (id, state) in self.states.iter().enumerate() {
            self.renderer.draw(&Snapshot::of(id, self.frame, state))?;
        }
        self.renderer.present()?;

        for state in &mut self.states {
            state.step(self.surface);
        }
        self.frame += 1;
        Ok(())
    }

    /// Run `rounds` rounds and return the renderer statistics.
    pub fn run(&mut self, rounds: u64) -> Result<RenderStats, DrawError> {
        for _ in 0..rounds {
            self.step()?;
        }
        Ok(self.renderer.stats())
    }

    /// Finish and give back the canvas.
    pub fn into_canvas(self) -> C {
        self.renderer.into_canvas()
    }
}
