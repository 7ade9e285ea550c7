//! Geometry module: Surface coordinates and per-rectangle motion.
//!
//! This module contains:
//! - [`Rect`], [`Point`], [`Size`]: plain geometry on the drawing surface
//! - [`RectangleState`]: the motion state a mover owns
//! - [`BounceRule`]: how rectangles reflect off the surface edges

mod rect;
mod state;

pub use rect::{Point, Rect, Size};
pub use state::{BounceRule, RectangleState, INTERVAL_MS_RANGE, MAX_SPEED, SIDE_RANGE, VELOCITY_RANGE};
