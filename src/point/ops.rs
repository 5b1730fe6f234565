use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::Point;

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::add(self, rhs)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.add_in_place(rhs);
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::sub(self, rhs)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.sub_in_place(rhs);
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, k: f64) -> Point {
        self.mult(k)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, p: Point) -> Point {
        p.mult(self)
    }
}

impl MulAssign<f64> for Point {
    fn mul_assign(&mut self, k: f64) {
        self.mult_in_place(k);
    }
}

/// Element-wise product.
impl Mul for Point {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        self.mult_by_point(rhs)
    }
}

impl MulAssign for Point {
    fn mul_assign(&mut self, rhs: Point) {
        self.mult_by_point_in_place(rhs);
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, k: f64) -> Point {
        Point::div(self, k)
    }
}

impl DivAssign<f64> for Point {
    fn div_assign(&mut self, k: f64) {
        self.div_in_place(k);
    }
}

/// Element-wise quotient.
impl Div for Point {
    type Output = Point;

    fn div(self, rhs: Point) -> Point {
        self.div_by_point(rhs)
    }
}

impl DivAssign for Point {
    fn div_assign(&mut self, rhs: Point) {
        self.div_by_point_in_place(rhs);
    }
}
