use super::{Mat2, Point};

impl Point {
    /// Rotates counter-clockwise around the origin by `angle` radians.
    #[inline]
    pub fn rotate(mut self, angle: f64) -> Point {
        self.rotate_in_place(angle);
        self
    }

    /// Rotates counter-clockwise around `p` by `angle` radians.
    ///
    /// Equivalent to `self.sub(p).rotate(angle).add(p)`, but evaluated in a
    /// single step so the result does not depend on the intermediate
    /// rounding of the translated point.
    #[inline]
    pub fn rotate_around(mut self, angle: f64, p: Point) -> Point {
        self.rotate_around_in_place(angle, p);
        self
    }

    /// Multiplies by the 2x2 matrix `m = [a, b, c, d]`:
    /// `x' = a*x + b*y`, `y' = c*x + d*y`.
    #[inline]
    pub fn mat_mult(mut self, m: Mat2) -> Point {
        self.mat_mult_in_place(m);
        self
    }

    /// Scales to length one, keeping the direction.
    ///
    /// The zero vector has no direction and comes back as `(NaN, NaN)`.
    #[inline]
    pub fn unit(mut self) -> Point {
        self.unit_in_place();
        self
    }

    /// Returns `(-y, x)`, the vector turned a quarter counter-clockwise.
    ///
    /// Exact: no trigonometry is involved.
    #[inline]
    pub fn perp(mut self) -> Point {
        self.perp_in_place();
        self
    }

    /// Rounds both coordinates to the nearest integer, halfway cases away
    /// from zero. The sign of zero survives: `-1e-16` rounds to `-0.0`.
    ///
    /// This is not round-half-up: negative ties move away from zero, so
    /// `(-2.5, -0.5)` becomes `(-3.0, -1.0)`, not `(-2.0, -0.0)`. Values
    /// snapshotted under a round-half-up rule differ on exactly those inputs.
    #[inline]
    pub fn round(mut self) -> Point {
        self.round_in_place();
        self
    }

    pub fn rotate_in_place(&mut self, angle: f64) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let x = cos * self.x - sin * self.y;
        let y = sin * self.x + cos * self.y;
        self.x = x;
        self.y = y;
        self
    }

    pub fn rotate_around_in_place(&mut self, angle: f64, p: Point) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let dx = self.x - p.x;
        let dy = self.y - p.y;
        let x = p.x + cos * dx - sin * dy;
        let y = p.y + sin * dx + cos * dy;
        self.x = x;
        self.y = y;
        self
    }

    pub fn mat_mult_in_place(&mut self, m: Mat2) -> &mut Self {
        let x = m[0] * self.x + m[1] * self.y;
        let y = m[2] * self.x + m[3] * self.y;
        self.x = x;
        self.y = y;
        self
    }

    pub fn unit_in_place(&mut self) -> &mut Self {
        let mag = self.mag();
        self.div_in_place(mag)
    }

    pub fn perp_in_place(&mut self) -> &mut Self {
        let y = self.y;
        self.y = self.x;
        self.x = -y;
        self
    }

    pub fn round_in_place(&mut self) -> &mut Self {
        // f64::round keeps the sign of zero; do not normalise -0.0 here.
        self.x = self.x.round();
        self.y = self.y.round();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Point;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn rotate_zero_is_identity() {
        let p = Point::new(3.5, -7.25);
        assert_eq!(p.rotate(0.0), p);
    }

    #[test]
    fn half_turn_keeps_negative_zero() {
        let r = Point::new(0.0, 1.0).rotate(PI).round();
        assert_eq!(r.x.to_bits(), (-0.0_f64).to_bits());
        assert_eq!(r.y, -1.0);
    }

    #[test]
    fn quarter_turn_rounds_to_positive_zero() {
        let r = Point::new(0.0, 1.0).rotate(FRAC_PI_2).round();
        assert_eq!(r.x, -1.0);
        assert_eq!(r.y.to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn perp_of_zero_vector() {
        let p = Point::ZERO.perp();
        assert_eq!(p.x.to_bits(), (-0.0_f64).to_bits());
        assert_eq!(p.y.to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn unit_of_zero_is_nan() {
        let u = Point::ZERO.unit();
        assert!(u.x.is_nan() && u.y.is_nan());
    }

    #[test]
    fn mat_mult_rotation_matrix_matches_perp() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(p.mat_mult([0.0, -1.0, 1.0, 0.0]), p.perp());
    }

    #[test]
    fn round_halfway_cases() {
        assert_eq!(Point::new(0.5, -0.5).round(), Point::new(1.0, -1.0));
        assert_eq!(Point::new(2.5, -2.4).round(), Point::new(3.0, -2.0));
    }
}
