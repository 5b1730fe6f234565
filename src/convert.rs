//! Conversions from point-like values.
//!
//! [`PointLike`] covers the shapes every point-accepting API recognises.
//! [`convert_or_passthrough`] is the permissive boundary for call sites that
//! take arbitrary values and must hand unrecognised ones back untouched.

use std::any::Any;

use crate::{Point, PointError};

/// A value that can stand in for a [`Point`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointLike {
    Point(Point),
    Pair(f64, f64),
}

impl From<Point> for PointLike {
    fn from(p: Point) -> Self {
        PointLike::Point(p)
    }
}

impl From<(f64, f64)> for PointLike {
    fn from((x, y): (f64, f64)) -> Self {
        PointLike::Pair(x, y)
    }
}

impl From<[f64; 2]> for PointLike {
    fn from([x, y]: [f64; 2]) -> Self {
        PointLike::Pair(x, y)
    }
}

impl From<PointLike> for Point {
    fn from(value: PointLike) -> Self {
        match value {
            PointLike::Point(p) => p,
            PointLike::Pair(x, y) => Point::new(x, y),
        }
    }
}

impl Point {
    /// Builds a point from a point-like value.
    ///
    /// A `Point` comes back unchanged; a pair `[x, y]` or `(x, y)` becomes
    /// `Point::new(x, y)`.
    ///
    /// ```rust
    /// use point_geometry::Point;
    ///
    /// assert_eq!(Point::convert([0.0, 1.0]), Point::new(0.0, 1.0));
    /// assert_eq!(Point::convert(Point::new(2.0, 3.0)), Point::new(2.0, 3.0));
    /// ```
    pub fn convert(input: impl Into<PointLike>) -> Point {
        Point::from(input.into())
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = PointError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match values {
            &[x, y] => Ok(Point::new(x, y)),
            _ => {
                #[cfg(feature = "log")]
                log::debug!("rejecting {}-element sequence as a point", values.len());
                Err(PointError::Length { len: values.len() })
            }
        }
    }
}

impl TryFrom<Vec<f64>> for Point {
    type Error = PointError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Point::try_from(values.as_slice())
    }
}

/// Result of [`convert_or_passthrough`].
#[derive(Clone, Debug, PartialEq)]
pub enum Converted<T> {
    /// The input was point-like.
    Point(Point),
    /// The input was not recognised and is returned unchanged.
    Other(T),
}

impl<T> Converted<T> {
    /// Whether the input was recognised as point-like.
    pub fn is_point(&self) -> bool {
        matches!(self, Converted::Point(_))
    }

    /// The converted point, discarding an unrecognised input.
    pub fn point(self) -> Option<Point> {
        match self {
            Converted::Point(p) => Some(p),
            Converted::Other(_) => None,
        }
    }

    /// The untouched input, if it was not point-like.
    pub fn other(self) -> Option<T> {
        match self {
            Converted::Point(_) => None,
            Converted::Other(value) => Some(value),
        }
    }

    /// `Ok` with the point, or `Err` carrying the untouched input.
    pub fn into_result(self) -> Result<Point, T> {
        match self {
            Converted::Point(p) => Ok(p),
            Converted::Other(value) => Err(value),
        }
    }
}

/// Converts `value` to a [`Point`] if it is point-like, otherwise hands it
/// back unchanged.
///
/// Recognised inputs are `Point`, [`PointLike`], `[f64; 2]`, `(f64, f64)`
/// and a `Vec<f64>` of exactly two elements. This never fails: anything else,
/// including a `Vec<f64>` of another length, is returned as
/// [`Converted::Other`].
pub fn convert_or_passthrough<T: Any>(value: T) -> Converted<T> {
    let any: &dyn Any = &value;
    let point = if let Some(p) = any.downcast_ref::<Point>() {
        Some(*p)
    } else if let Some(p) = any.downcast_ref::<PointLike>() {
        Some(Point::from(*p))
    } else if let Some(&pair) = any.downcast_ref::<[f64; 2]>() {
        Some(Point::from(pair))
    } else if let Some(&pair) = any.downcast_ref::<(f64, f64)>() {
        Some(Point::from(pair))
    } else if let Some(values) = any.downcast_ref::<Vec<f64>>() {
        Point::try_from(values.as_slice()).ok()
    } else {
        None
    };

    match point {
        Some(p) => Converted::Point(p),
        None => {
            #[cfg(feature = "log")]
            log::trace!(
                "passing through non-point value of type {}",
                std::any::type_name::<T>()
            );
            Converted::Other(value)
        }
    }
}
