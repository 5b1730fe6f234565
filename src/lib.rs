//! A 2D point and vector value type over `f64`.
//!
//! [`Point`] is the geometric primitive shared by rendering, mapping and
//! geometry code. The same type carries screen pixels, longitude/latitude
//! pairs and free direction vectors; no unit is enforced.
//!
//! # Quick Start
//!
//! ```rust
//! use point_geometry::Point;
//!
//! let p = Point::new(2.0, 3.0);
//! let q = p.add(Point::new(1.0, 1.0)).mult(2.0);
//! assert_eq!(q, Point::new(6.0, 8.0));
//!
//! // Rotating (0, 1) by a half turn keeps the sign of the zero component.
//! let r = Point::new(0.0, 1.0).rotate(std::f64::consts::PI).round();
//! assert!(r.x == 0.0 && r.x.is_sign_negative());
//! assert_eq!(r.y, -1.0);
//! ```
//!
//! # Pure and in-place operations
//!
//! Every transforming operation comes in two forms. The pure form takes
//! `self` by value and returns a new point. The `*_in_place` form writes
//! through `&mut self` and returns the same receiver so calls can be chained
//! without building intermediate values:
//!
//! ```rust
//! use point_geometry::Point;
//!
//! let mut p = Point::new(1.0, 0.0);
//! p.mult_in_place(10.0).perp_in_place().add_in_place(Point::new(1.0, 1.0));
//! assert_eq!(p, Point::new(1.0, 11.0));
//! ```
//!
//! # Numeric semantics
//!
//! Nothing here validates its input or reports errors. Division by zero,
//! zero-length vectors and non-finite coordinates resolve through ordinary
//! IEEE-754 arithmetic to infinities or NaN. Equality is exact.
//!
//! # Converting point-like values
//!
//! [`Point::convert`] accepts anything that is a [`PointLike`]: a point or a
//! pair of coordinates. Call sites that must accept arbitrary values and pass
//! unrecognised ones through unchanged use [`convert_or_passthrough`]:
//!
//! ```rust
//! use point_geometry::{Converted, Point, convert_or_passthrough};
//!
//! assert_eq!(Point::convert([20.0, 30.0]), Point::new(20.0, 30.0));
//! assert_eq!(
//!     convert_or_passthrough("somestring"),
//!     Converted::Other("somestring")
//! );
//! ```

mod convert;
mod error;
mod point;

pub use convert::{Converted, PointLike, convert_or_passthrough};
pub use error::PointError;
pub use point::{Mat2, Point};
