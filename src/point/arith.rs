use super::Point;

impl Point {
    /// Adds `p` component-wise, yielding a new point.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn add(mut self, p: Point) -> Point {
        self.add_in_place(p);
        self
    }

    /// Subtracts `p` component-wise, yielding a new point.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn sub(mut self, p: Point) -> Point {
        self.sub_in_place(p);
        self
    }

    /// Multiplies component-wise by `p`, yielding a new point.
    #[inline]
    pub fn mult_by_point(mut self, p: Point) -> Point {
        self.mult_by_point_in_place(p);
        self
    }

    /// Divides component-wise by `p`, yielding a new point.
    ///
    /// A zero component in `p` produces an infinity or NaN, never a panic.
    #[inline]
    pub fn div_by_point(mut self, p: Point) -> Point {
        self.div_by_point_in_place(p);
        self
    }

    /// Scales both coordinates by `k`, yielding a new point.
    #[inline]
    pub fn mult(mut self, k: f64) -> Point {
        self.mult_in_place(k);
        self
    }

    /// Divides both coordinates by `k`, yielding a new point.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn div(mut self, k: f64) -> Point {
        self.div_in_place(k);
        self
    }

    #[inline]
    pub fn add_in_place(&mut self, p: Point) -> &mut Self {
        self.x += p.x;
        self.y += p.y;
        self
    }

    #[inline]
    pub fn sub_in_place(&mut self, p: Point) -> &mut Self {
        self.x -= p.x;
        self.y -= p.y;
        self
    }

    #[inline]
    pub fn mult_by_point_in_place(&mut self, p: Point) -> &mut Self {
        self.x *= p.x;
        self.y *= p.y;
        self
    }

    #[inline]
    pub fn div_by_point_in_place(&mut self, p: Point) -> &mut Self {
        self.x /= p.x;
        self.y /= p.y;
        self
    }

    #[inline]
    pub fn mult_in_place(&mut self, k: f64) -> &mut Self {
        self.x *= k;
        self.y *= k;
        self
    }

    #[inline]
    pub fn div_in_place(&mut self, k: f64) -> &mut Self {
        self.x /= k;
        self.y /= k;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn in_place_returns_receiver() {
        let mut p = Point::new(1.0, 1.0);
        let addr = &p as *const Point;
        let returned = p.add_in_place(Point::new(1.0, 2.0)) as *const Point;
        assert_eq!(addr, returned);
        assert_eq!(p, Point::new(2.0, 3.0));
    }

    #[test]
    fn chained_in_place_ops() {
        let mut p = Point::new(2.0, 4.0);
        p.sub_in_place(Point::new(1.0, 1.0))
            .mult_in_place(4.0)
            .div_by_point_in_place(Point::new(2.0, 3.0))
            .mult_by_point_in_place(Point::new(-1.0, 0.5))
            .div_in_place(2.0);
        assert_eq!(p, Point::new(-1.0, 1.0));
    }

    #[test]
    fn div_by_zero_follows_ieee() {
        let p = Point::new(1.0, -1.0).div(0.0);
        assert_eq!(p, Point::new(f64::INFINITY, f64::NEG_INFINITY));

        let q = Point::new(0.0, 3.0).div_by_point(Point::new(0.0, 0.0));
        assert!(q.x.is_nan());
        assert_eq!(q.y, f64::INFINITY);
    }
}
