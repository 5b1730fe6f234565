use thiserror::Error;

/// Failure to build a [`Point`](crate::Point) from a runtime-sized sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointError {
    #[error("expected exactly 2 coordinates, got {len}")]
    Length { len: usize },
}
