//! Motion state for a single rectangle.
//!
//! A [`RectangleState`] is owned by exactly one mover. It only changes in
//! [`RectangleState::step`], which applies an elastic bounce against the
//! surface edges and then moves the rectangle by its velocity.

use super::rect::{Point, Rect, Size};
use rand::Rng;
use std::ops::Range;
use std::time::Duration;

/// Side length range for generated rectangles (half-open).
pub const SIDE_RANGE: Range<u16> = 20..50;

/// Velocity range for generated rectangles, per axis (half-open).
pub const VELOCITY_RANGE: Range<i32> = -5..5;

/// Pacing interval range in milliseconds (half-open).
pub const INTERVAL_MS_RANGE: Range<u64> = 10..50;

/// Largest distance a rectangle can travel along one axis in one step.
pub const MAX_SPEED: u16 = 5;

/// Horizontal velocity used in place of a zero roll, under either rule.
const ZERO_X_VELOCITY: i32 = 1;

/// How a rectangle reflects off the surface edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BounceRule {
    /// Flip when the next step would cross either edge. A zero velocity
    /// roll becomes `+1` on both axes.
    #[default]
    Symmetric,
    /// Flip when the next step would reach the near edge (`<= 0`) or cross
    /// the far edge. A zero roll becomes `+1` horizontally and `-1`
    /// vertically. This reproduces the classic demo frame for frame.
    Classic,
}

impl BounceRule {
    /// Check whether moving by `velocity` from `pos` leaves the valid range
    /// for an object of length `extent` on an axis of length `limit`.
    #[inline]
    const fn must_reflect(self, pos: i32, velocity: i32, extent: u16, limit: u16) -> bool {
        let next = pos + velocity;
        let past_far = next + extent as i32 > limit as i32;
        let past_near = match self {
            Self::Symmetric => next < 0,
            Self::Classic => next <= 0,
        };
        past_far || past_near
    }

    /// Replacement for a zero vertical velocity roll.
    const fn zero_y(self) -> i32 {
        match self {
            Self::Symmetric => 1,
            Self::Classic => -1,
        }
    }
}

/// Position, size, velocity and pacing of one rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RectangleState {
    /// Current top-left corner.
    pub position: Point,
    /// Top-left corner at the last drawn frame, `None` before the first move.
    pub previous: Option<Point>,
    /// Width, fixed for the rectangle's lifetime.
    pub width: u16,
    /// Height, fixed for the rectangle's lifetime.
    pub height: u16,
    /// Horizontal velocity per step. Never zero.
    pub velocity_x: i32,
    /// Vertical velocity per step. Never zero.
    pub velocity_y: i32,
    /// Pause between acknowledged frames.
    pub interval: Duration,
    /// Edge reflection rule.
    pub bounce: BounceRule,
}

impl RectangleState {
    /// Generate a square rectangle placed somewhere fully on `surface`.
    ///
    /// A surface narrower than the rolled side pins that axis to 0, so the
    /// rectangle overhangs it. [`Config::validate`](crate::Config::validate)
    /// rejects such surfaces before a run starts.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, surface: Size, bounce: BounceRule) -> Self {
        let side = rng.random_range(SIDE_RANGE);
        let span_x = surface.width.saturating_sub(side).max(1);
        let span_y = surface.height.saturating_sub(side).max(1);
        let x = rng.random_range(0..i32::from(span_x));
        let y = rng.random_range(0..i32::from(span_y));
        let interval = Duration::from_millis(rng.random_range(INTERVAL_MS_RANGE));

        let mut velocity_x = rng.random_range(VELOCITY_RANGE);
        if velocity_x == 0 {
            velocity_x = ZERO_X_VELOCITY;
        }
        let mut velocity_y = rng.random_range(VELOCITY_RANGE);
        if velocity_y == 0 {
            velocity_y = bounce.zero_y();
        }

        Self {
            position: Point::new(x, y),
            previous: None,
            width: side,
            height: side,
            velocity_x,
            velocity_y,
            interval,
            bounce,
        }
    }

    /// Current footprint.
    pub fn rect(&self) -> Rect {
        Rect::at(self.position, self.width, self.height)
    }

    /// Footprint at the previously drawn position, if any.
    pub fn previous_rect(&self) -> Option<Rect> {
        self.previous
            .map(|origin| Rect::at(origin, self.width, self.height))
    }

    /// Advance one step on a surface of the given size.
    ///
    /// Velocity is reflected against the pre-move position on each axis
    /// independently, then applied.
    pub fn step(&mut self, surface: Size) {
        self.previous = Some(self.position);

        let Point { x, y } = self.position;
        if self
            .bounce
            .must_reflect(x, self.velocity_x, self.width, surface.width)
        {
            self.velocity_x = -self.velocity_x;
        }
        if self
            .bounce
            .must_reflect(y, self.velocity_y, self.height, surface.height)
        {
            self.velocity_y = -self.velocity_y;
        }

        self.position.x += self.velocity_x;
        self.position.y += self.velocity_y;
    }

    /// Check that the rectangle lies fully on `surface`.
    pub fn is_within(&self, surface: Size) -> bool {
        self.position.x >= 0
            && self.position.y >= 0
            && self.position.x + i32::from(self.width) <= i32::from(surface.width)
            && self.position.y + i32::from(self.height) <= i32::from(surface.height)
    }
}
