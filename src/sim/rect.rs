//! Axis-aligned rectangle geometry for bricks and the paddle
//!
//! Screen coordinates: origin at the top-left, y grows downward.

use glam::Vec2;

/// A rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if a point lies strictly inside the rectangle. Points exactly on
    /// an edge do not count as contained.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x > self.left()
            && point.x < self.right()
            && point.y > self.top()
            && point.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(10.0, 20.0, 75.0, 30.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 85.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 50.0);
    }

    #[test]
    fn test_contains_interior_point() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(rect.contains_point(Vec2::new(50.0, 25.0)));
        assert!(rect.contains_point(Vec2::new(0.1, 0.1)));
        assert!(rect.contains_point(Vec2::new(99.9, 49.9)));
    }

    #[test]
    fn test_boundary_points_excluded() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(!rect.contains_point(Vec2::new(0.0, 25.0)));
        assert!(!rect.contains_point(Vec2::new(100.0, 25.0)));
        assert!(!rect.contains_point(Vec2::new(50.0, 0.0)));
        assert!(!rect.contains_point(Vec2::new(50.0, 50.0)));
        assert!(!rect.contains_point(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_outside_points() {
        let rect = Rect::new(25.0, 50.0, 75.0, 30.0);
        assert!(!rect.contains_point(Vec2::new(0.0, 0.0)));
        assert!(!rect.contains_point(Vec2::new(24.9, 65.0)));
        assert!(!rect.contains_point(Vec2::new(62.0, 81.0)));
    }
}
