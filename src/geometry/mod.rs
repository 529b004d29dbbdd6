mod circle;
mod point;
mod rectangle;

pub use circle::Circle;
pub use point::Point;
pub use rectangle::Rectangle;

use crate::error::{GeometryError, Result};
use crate::math::is_finite;

/// Common measurements of a closed planar shape.
pub trait Shape {
    /// Returns the enclosed area.
    fn area(&self) -> f64;

    /// Returns the length of the boundary.
    fn perimeter(&self) -> f64;
}

/// Checks that `value` is finite, naming `parameter` in the error.
pub(crate) fn ensure_finite(parameter: &'static str, value: f64) -> Result<f64> {
    if !is_finite(value) {
        tracing::debug!(parameter, value, "rejected non-finite value");
        return Err(GeometryError::NonFinite { parameter, value }.into());
    }
    Ok(value)
}

/// Checks that `value` is a finite, non-negative length.
pub(crate) fn ensure_length(parameter: &'static str, value: f64) -> Result<f64> {
    if value < 0.0 {
        tracing::debug!(parameter, value, "rejected negative length");
        return Err(GeometryError::Negative { parameter, value }.into());
    }
    ensure_finite(parameter, value)
}
