mod arith;
mod metrics;
mod ops;
mod transform;

/// A 2x2 matrix given as four scalars in row order, consumed by
/// [`Point::mat_mult`].
pub type Mat2 = [f64; 4];

/// 2D point or free vector with `f64` components.
///
/// The coordinates could be longitude/latitude, screen pixels, or any other
/// unit. Equality is exact IEEE equality on both components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Point { x: 0.0, y: 0.0 };

    /// Stores both coordinates verbatim. NaN and infinities are accepted.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from(value: (f64, f64)) -> Self {
        Point::new(value.0, value.1)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}
