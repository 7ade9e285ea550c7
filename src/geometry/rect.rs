//! Rect: Axis-aligned rectangles and points on the drawing surface.

/// A point on the surface, in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Horizontal offset from the left edge.
    pub x: i32,
    /// Vertical offset from the top edge.
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Dimensions of the drawable area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in surface units.
    pub width: u16,
    /// Height in surface units.
    pub height: u16,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Check whether `rect` lies fully inside an area of this size.
    #[inline]
    pub const fn contains(&self, rect: &Rect) -> bool {
        rect.right() <= self.width as u32 && rect.bottom() <= self.height as u32
    }
}

/// A rectangle defined by position and size.
///
/// Rectangles handed to a canvas always lie on the surface, so the
/// coordinates are unsigned.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: u16,
    /// Y coordinate of the top-left corner.
    pub y: u16,
    /// Width in surface units.
    pub width: u16,
    /// Height in surface units.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Build a rectangle from a signed top-left corner.
    ///
    /// Negative coordinates saturate at zero.
    pub fn at(origin: Point, width: u16, height: u16) -> Self {
        Self::new(saturate(origin.x), saturate(origin.y), width, height)
    }

    /// Check if the rectangle is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u32 {
        self.x as u32 + self.width as u32
    }

    /// Get the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.y as u32 + self.height as u32
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}

fn saturate(v: i32) -> u16 {
    u16::try_from(v.max(0)).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10, 20, 30, 40);
        assert_eq!(rect.right(), 40);
        assert_eq!(rect.bottom(), 60);
        assert!(!rect.is_empty());
        assert!(Rect::new(5, 5, 0, 3).is_empty());
    }

    #[test]
    fn test_rect_at_saturates() {
        let rect = Rect::at(Point::new(-4, 7), 20, 20);
        assert_eq!(rect, Rect::new(0, 7, 20, 20));
    }

    #[test]
    fn test_size_contains() {
        let size = Size::new(100, 100);
        assert!(size.contains(&Rect::new(60, 60, 40, 40)));
        assert!(!size.contains(&Rect::new(61, 60, 40, 40)));
        assert!(!size.contains(&Rect::new(60, 61, 40, 40)));
    }

    #[test]
    fn test_rect_debug() {
        assert_eq!(format!("{:?}", Rect::new(1, 2, 3, 4)), "Rect(1, 2 3x4)");
    }
}
