//! Positions of the pointers currently driving a gesture

use crate::geometry::Point;

/// Up to two tracked pointer positions.
///
/// `extra: None` signals single-pointer mode - an explicit absence rather
/// than a sentinel coordinate, so it can never leak into arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerTrack {
    pub active: Point,
    pub extra: Option<Point>,
}

impl PointerTrack {
    /// A single-pointer track
    pub fn single(active: Point) -> Self {
        Self { active, extra: None }
    }

    /// A two-pointer track
    pub fn pair(active: Point, extra: Point) -> Self {
        Self { active, extra: Some(extra) }
    }

    /// Copy with a new active position, keeping the current extra
    pub fn with_active(&self, p: Point) -> Self {
        Self { active: p, extra: self.extra }
    }

    /// Copy with a new extra position
    pub fn with_extra(&self, p: Point) -> Self {
        Self { active: self.active, extra: Some(p) }
    }

    /// Midpoint of the two pointers, or the active position alone
    pub fn centroid(&self) -> Point {
        match self.extra {
            Some(extra) => self.active.midpoint(extra),
            None => self.active,
        }
    }

    /// The vector from active to extra, if both pointers are present
    pub fn baseline(&self) -> Option<Point> {
        self.extra.map(|extra| extra.vector_from(self.active))
    }

    /// Distance between the two pointers, or 0 with a single pointer
    pub fn span(&self) -> f32 {
        match self.extra {
            Some(extra) => self.active.distance_to(extra),
            None => 0.0,
        }
    }

    /// Angle of the active->extra vector in degrees.
    ///
    /// 0 by convention when there is no extra pointer; that value carries no
    /// rotational meaning and must never feed a rotation delta.
    pub fn subtended_angle_degrees(&self) -> f32 {
        match self.baseline() {
            Some(v) => v.angle_degrees(),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centroid_single() {
        let t = PointerTrack::single(Point::new(50.0, 60.0));
        assert!((t.centroid().x - 50.0).abs() < 0.001);
        assert!((t.centroid().y - 60.0).abs() < 0.001);
    }

    #[test]
    fn test_centroid_pair() {
        let t = PointerTrack::pair(Point::new(90.0, 100.0), Point::new(110.0, 100.0));
        assert!((t.centroid().x - 100.0).abs() < 0.001);
        assert!((t.centroid().y - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_subtended_angle_absent_extra_is_zero() {
        let t = PointerTrack::single(Point::new(5.0, 5.0));
        assert!(t.subtended_angle_degrees().abs() < 0.001);
        assert!(t.baseline().is_none());
    }

    #[test]
    fn test_subtended_angle_pair() {
        let t = PointerTrack::pair(Point::new(0.0, 0.0), Point::new(0.0, 10.0));
        assert!((t.subtended_angle_degrees() - 90.0).abs() < 0.001);
    }

    #[test]
    fn test_span() {
        let t = PointerTrack::pair(Point::new(90.0, 100.0), Point::new(110.0, 100.0));
        assert!((t.span() - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_with_active_keeps_extra() {
        let t = PointerTrack::pair(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let t2 = t.with_active(Point::new(5.0, 5.0));
        assert_eq!(t2.extra, Some(Point::new(10.0, 0.0)));
        assert_eq!(t2.active, Point::new(5.0, 5.0));
    }
}
