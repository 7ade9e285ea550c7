//! Startup configuration.

use crate::error::ConfigError;
use crate::geometry::{BounceRule, Size, MAX_SPEED, SIDE_RANGE};
use crate::surface::Palette;
use std::time::Duration;

/// Configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of concurrently moving rectangles. Also the queue capacity.
    ///
    /// Each rectangle gets its own OS thread with a 64 KiB stack, so the
    /// practical ceiling is the process thread limit (`ulimit -u`,
    /// `/proc/sys/kernel/threads-max`). Past it,
    /// [`Dispatcher::start`](crate::Dispatcher::start) fails with
    /// [`Error::Spawn`](crate::Error::Spawn).
    pub rectangle_count: usize,
    /// Drawable width in surface units.
    pub surface_width: u16,
    /// Drawable height in surface units.
    pub surface_height: u16,
    /// Seed for rectangle generation. `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Edge reflection rule.
    pub bounce: BounceRule,
    /// Stop each mover after this many acknowledged frames.
    pub max_frames: Option<u64>,
    /// How long one event poll may block before the dispatcher checks
    /// for renderer faults.
    pub poll_timeout: Duration,
    /// Colours used for drawing and erasing.
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rectangle_count: 1000,
            surface_width: 2048,
            surface_height: 1400,
            seed: None,
            bounce: BounceRule::default(),
            max_frames: None,
            poll_timeout: Duration::from_millis(50),
            palette: Palette::default(),
        }
    }
}

impl Config {
    /// Smallest accepted surface side: the largest rectangle plus one full
    /// step of clearance on each side.
    pub const MIN_SURFACE_SIDE: u16 = SIDE_RANGE.end + 2 * MAX_SPEED;

    /// Surface dimensions.
    pub const fn surface(&self) -> Size {
        Size::new(self.surface_width, self.surface_height)
    }

    /// Check that the configuration can be run.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.rectangle_count == 0 {
            return Err(ConfigError::NoRectangles);
        }
        if self.surface_width < Self::MIN_SURFACE_SIDE || self.surface_height < Self::MIN_SURFACE_SIDE {
            return Err(ConfigError::SurfaceTooSmall {
                width: self.surface_width,
                height: self.surface_height,
                min: Self::MIN_SURFACE_SIDE,
            });
        }
        Ok(())
    }
}
