//! Region of interest: an axis-aligned rectangle plus a rotation
//!
//! `Roi` values are immutable; every gesture step builds a new one from the
//! previous value and a delta (`with_rect` / `with_rotation`). The rotation
//! accumulates without bound across a drag and is never wrapped to ±360 -
//! anything that wants a normalized angle does that at the render boundary.

use crate::geometry::Point;

/// An axis-aligned rectangle in surface coordinates.
///
/// `left <= right` and `top <= bottom` are expected but not enforced;
/// zero or negative extent is degenerate yet legal (no minimum-size policy
/// lives at this layer).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Build a rect of the given size centered on a point
    pub fn from_center_size(center: Point, width: f32, height: f32) -> Self {
        Self::new(
            center.x - width * 0.5,
            center.y - height * 0.5,
            center.x + width * 0.5,
            center.y + height * 0.5,
        )
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }

    /// A copy translated by (dx, dy)
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }

    /// Check if a point is inside
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }
}

/// The four corners of a (possibly rotated) rectangle, in fixed order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// A rectangle plus an accumulated rotation about its center, in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Roi {
    pub rect: Rect,
    pub rotation_degrees: f32,
}

impl Roi {
    pub const fn new(rect: Rect, rotation_degrees: f32) -> Self {
        Self { rect, rotation_degrees }
    }

    pub fn with_rect(&self, rect: Rect) -> Self {
        Self::new(rect, self.rotation_degrees)
    }

    pub fn with_rotation(&self, rotation_degrees: f32) -> Self {
        Self::new(self.rect, rotation_degrees)
    }

    pub fn with_rect_and_rotation(&self, rect: Rect, rotation_degrees: f32) -> Self {
        Self::new(rect, rotation_degrees)
    }

    /// The four corner points after rotating the axis-aligned rect about its
    /// center, always in TopLeft, TopRight, BottomRight, BottomLeft order.
    pub fn corners(&self) -> [Point; 4] {
        let c = self.rect.center();
        let rad = self.rotation_degrees.to_radians();
        let (sin, cos) = rad.sin_cos();
        let rotate = |p: Point| {
            let dx = p.x - c.x;
            let dy = p.y - c.y;
            Point::new(c.x + dx * cos - dy * sin, c.y + dx * sin + dy * cos)
        };
        [
            rotate(Point::new(self.rect.left, self.rect.top)),
            rotate(Point::new(self.rect.right, self.rect.top)),
            rotate(Point::new(self.rect.right, self.rect.bottom)),
            rotate(Point::new(self.rect.left, self.rect.bottom)),
        ]
    }

    /// Indexed lookup into `corners()`
    pub fn corner_at(&self, corner: Corner) -> Point {
        let corners = self.corners();
        match corner {
            Corner::TopLeft => corners[0],
            Corner::TopRight => corners[1],
            Corner::BottomRight => corners[2],
            Corner::BottomLeft => corners[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point(p: Point, x: f32, y: f32) {
        assert!((p.x - x).abs() < 0.001, "x: {} vs {}", p.x, x);
        assert!((p.y - y).abs() < 0.001, "y: {} vs {}", p.y, y);
    }

    #[test]
    fn test_rect_center_and_size() {
        let r = Rect::new(0.0, 0.0, 200.0, 100.0);
        assert!((r.width() - 200.0).abs() < 0.001);
        assert!((r.height() - 100.0).abs() < 0.001);
        assert_point(r.center(), 100.0, 50.0);
    }

    #[test]
    fn test_from_center_size_round_trips() {
        let r = Rect::from_center_size(Point::new(100.0, 50.0), 200.0, 100.0);
        assert!((r.left - 0.0).abs() < 0.001);
        assert!((r.bottom - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_corners_unrotated_order() {
        let roi = Roi::new(Rect::new(0.0, 0.0, 200.0, 200.0), 0.0);
        let c = roi.corners();
        assert_point(c[0], 0.0, 0.0);
        assert_point(c[1], 200.0, 0.0);
        assert_point(c[2], 200.0, 200.0);
        assert_point(c[3], 0.0, 200.0);
    }

    #[test]
    fn test_corners_quarter_turn() {
        // +90 degrees in a y-down space maps top-left onto the top-right slot
        let roi = Roi::new(Rect::new(0.0, 0.0, 200.0, 200.0), 90.0);
        let c = roi.corners();
        assert_point(c[0], 200.0, 0.0);
        assert_point(c[1], 200.0, 200.0);
        assert_point(c[2], 0.0, 200.0);
        assert_point(c[3], 0.0, 0.0);
    }

    #[test]
    fn test_corners_full_turn_identity() {
        let roi = Roi::new(Rect::new(10.0, 20.0, 110.0, 80.0), 360.0);
        let base = roi.with_rotation(0.0);
        for (a, b) in roi.corners().iter().zip(base.corners().iter()) {
            assert!((a.x - b.x).abs() < 0.001);
            assert!((a.y - b.y).abs() < 0.001);
        }
    }

    #[test]
    fn test_corners_negative_rotation() {
        let roi = Roi::new(Rect::new(0.0, 0.0, 200.0, 200.0), -90.0);
        let c = roi.corners();
        assert_point(c[0], 0.0, 200.0);
        assert_point(c[1], 0.0, 0.0);
    }

    #[test]
    fn test_corner_at_matches_corners() {
        let roi = Roi::new(Rect::new(0.0, 0.0, 200.0, 100.0), 30.0);
        let c = roi.corners();
        let br = roi.corner_at(Corner::BottomRight);
        assert!((br.x - c[2].x).abs() < 0.001);
        assert!((br.y - c[2].y).abs() < 0.001);
    }

    #[test]
    fn test_degenerate_rect_accepted() {
        // Zero extent is degenerate but never rejected
        let roi = Roi::new(Rect::new(50.0, 50.0, 50.0, 50.0), 45.0);
        for p in roi.corners() {
            assert_point(p, 50.0, 50.0);
        }
    }

    #[test]
    fn test_copy_constructors_leave_original() {
        let a = Roi::new(Rect::new(0.0, 0.0, 10.0, 10.0), 0.0);
        let b = a.with_rotation(45.0);
        assert!((a.rotation_degrees - 0.0).abs() < 0.001);
        assert!((b.rotation_degrees - 45.0).abs() < 0.001);
        assert_eq!(a.rect, b.rect);
    }
}
