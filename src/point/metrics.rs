use super::Point;

impl Point {
    /// Euclidean distance from the origin.
    #[inline]
    pub fn mag(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Exact component equality, identical to `==`.
    #[inline]
    pub fn equals(self, other: Point) -> bool {
        self.x == other.x && self.y == other.y
    }

    #[inline]
    pub fn dist(self, p: Point) -> f64 {
        self.dist_sqr(p).sqrt()
    }

    /// Squared distance to `p`. Skips the square root, so prefer it when
    /// only comparing relative distances.
    #[inline]
    pub fn dist_sqr(self, p: Point) -> f64 {
        let dx = p.x - self.x;
        let dy = p.y - self.y;
        dx * dx + dy * dy
    }

    /// Angle from the origin to this point, in radians within `(-π, π]`.
    #[inline]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Angle of the vector `self - b`, in radians.
    #[inline]
    pub fn angle_to(self, b: Point) -> f64 {
        (self.y - b.y).atan2(self.x - b.x)
    }

    /// Signed angle from this vector to `b`, in radians.
    #[inline]
    pub fn angle_with(self, b: Point) -> f64 {
        self.angle_with_sep(b.x, b.y)
    }

    /// Signed angle from this vector to the vector `(x, y)`.
    ///
    /// Uses `atan2(cross, dot)` rather than the difference of two `atan2`
    /// calls, so there is no discontinuity at the negative x axis.
    #[inline]
    pub fn angle_with_sep(self, x: f64, y: f64) -> f64 {
        (self.x * y - self.y * x).atan2(self.x * x + self.y * y)
    }
}

#[cfg(test)]
mod tests {
    use super::Point;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn dist_sqr_is_symmetric() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(a.dist_sqr(b), 25.0);
        assert_eq!(b.dist_sqr(a), 25.0);
        assert_eq!(a.dist(b), 5.0);
    }

    #[test]
    fn angle_with_is_signed() {
        let x_axis = Point::new(1.0, 0.0);
        let y_axis = Point::new(0.0, 1.0);
        assert_eq!(x_axis.angle_with(y_axis), FRAC_PI_2);
        assert_eq!(y_axis.angle_with(x_axis), -FRAC_PI_2);
    }

    #[test]
    fn angle_with_across_negative_x_axis() {
        // Both vectors sit just either side of the branch cut of atan2.
        let a = Point::new(-1.0, 1.0e-9);
        let b = Point::new(-1.0, -1.0e-9);
        let angle = a.angle_with(b);
        assert!(angle.abs() < 1.0e-8, "got {angle}");
        assert!((a.angle() - b.angle()).abs() > PI);
    }

    #[test]
    fn angle_to_origin_matches_angle() {
        let p = Point::new(-3.0, 4.0);
        assert_eq!(p.angle_to(Point::ZERO), p.angle());
    }

    #[test]
    fn equals_ignores_sign_of_zero() {
        assert!(Point::new(-0.0, 0.0).equals(Point::ZERO));
        assert!(!Point::new(f64::NAN, 0.0).equals(Point::new(f64::NAN, 0.0)));
    }
}
