//! 2D point and vector primitives
//!
//! Everything gesture-related works in one coordinate space: the surface's
//! top-level coordinates, +x right, +y down. Angles are in degrees and are
//! never normalized to a fixed range - callers accumulate deltas onto a
//! running rotation.

/// A point (or vector) in surface coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The vector from `origin` to this point
    pub fn vector_from(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint between this point and another
    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Whether this is the zero vector (as a vector, a degenerate baseline)
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Absolute angle of this vector in degrees, via `atan2`
    pub fn angle_degrees(&self) -> f32 {
        self.y.atan2(self.x).to_degrees()
    }
}

/// Signed angle in degrees that rotates `v1` onto `v2`, in (-180, 180].
///
/// Computed as the difference of the two vectors' `atan2` angles, which is
/// total: it stays defined for vertical vectors and for perpendicular pairs
/// where a slope-based formula would divide by zero. The raw difference is
/// wrapped back into one turn so a step across the atan2 branch cut does
/// not read as a near-full rotation.
pub fn angle_between_degrees(v1: Point, v2: Point) -> f32 {
    wrap_degrees(v2.angle_degrees() - v1.angle_degrees())
}

/// Wrap an angle delta in degrees into (-180, 180]
pub fn wrap_degrees(mut delta: f32) -> f32 {
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta <= -180.0 {
        delta += 360.0;
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_from() {
        let v = Point::new(3.0, 4.0).vector_from(Point::new(1.0, 1.0));
        assert!((v.x - 2.0).abs() < 0.001);
        assert!((v.y - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_distance() {
        let d = Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_midpoint() {
        let m = Point::new(90.0, 100.0).midpoint(Point::new(110.0, 100.0));
        assert!((m.x - 100.0).abs() < 0.001);
        assert!((m.y - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_angle_between_quarter_turn() {
        let a = angle_between_degrees(Point::new(1.0, 0.0), Point::new(0.0, 1.0));
        assert!((a - 90.0).abs() < 0.001);
    }

    #[test]
    fn test_angle_between_signed() {
        let a = angle_between_degrees(Point::new(0.0, 1.0), Point::new(1.0, 0.0));
        assert!((a - -90.0).abs() < 0.001);
    }

    #[test]
    fn test_angle_between_vertical_vectors() {
        // Slope-based formulas blow up here; atan2 difference must not
        let a = angle_between_degrees(Point::new(0.0, 2.0), Point::new(0.0, 5.0));
        assert!(a.abs() < 0.001);
    }

    #[test]
    fn test_angle_between_perpendicular() {
        // 1 + m1*m2 == 0 case: (1,1) vs (-1,1)
        let a = angle_between_degrees(Point::new(1.0, 1.0), Point::new(-1.0, 1.0));
        assert!((a - 90.0).abs() < 0.001);
    }

    #[test]
    fn test_angle_between_wraps_branch_cut() {
        // From just above the negative x axis to just below it: a small
        // rotation, not a near-full turn
        let a = angle_between_degrees(Point::new(-1.0, 0.1), Point::new(-1.0, -0.1));
        assert!((a - 11.421).abs() < 0.01);
    }

    #[test]
    fn test_collinear_vectors_zero_delta() {
        let a = angle_between_degrees(Point::new(-5.0, 0.0), Point::new(-7.5, 0.0));
        assert!(a.abs() < 0.001);
    }
}
