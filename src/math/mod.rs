use nalgebra::{ComplexField, RealField};

/// 2D vector type used for displacements.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Multiplier for circle area and circumference.
pub const PI: f64 = std::f64::consts::PI;

/// Largest number of points accepted by a path perimeter query by default.
pub const MAX_POINTS: usize = 10_000;

/// Slack used for equality and containment tests.
pub const EPSILON: f64 = 1e-9;

/// Returns `true` if `a` and `b` differ by strictly less than [`EPSILON`].
///
/// Works for any real scalar (`f32`, `f64`). NaN never compares equal.
#[must_use]
pub fn is_equal<T: RealField>(a: T, b: T) -> bool {
    ComplexField::abs(a - b) < nalgebra::convert::<f64, T>(EPSILON)
}

/// Returns `true` if `value` is neither NaN nor infinite.
#[must_use]
pub fn is_finite(value: f64) -> bool {
    value.is_finite()
}
