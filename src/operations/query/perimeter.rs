use crate::error::{OperationError, Result};
use crate::geometry::Point;
use crate::math::MAX_POINTS;

/// Parameters controlling a [`PathPerimeter`] query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerimeterParams {
    /// Largest number of points accepted.
    pub max_points: usize,
}

impl Default for PerimeterParams {
    fn default() -> Self {
        Self {
            max_points: MAX_POINTS,
        }
    }
}

/// Computes the length of an open path through a sequence of points.
///
/// Consecutive points are joined in order; the last point is not joined back
/// to the first.
pub struct PathPerimeter<'a> {
    points: &'a [Point],
    params: PerimeterParams,
}

impl<'a> PathPerimeter<'a> {
    /// Creates a new `PathPerimeter` query with default parameters.
    #[must_use]
    pub fn new(points: &'a [Point]) -> Self {
        Self {
            points,
            params: PerimeterParams::default(),
        }
    }

    /// Sets custom parameters, e.g. a different point capacity.
    #[must_use]
    pub fn with_params(mut self, params: PerimeterParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query, returning the summed segment lengths.
    ///
    /// Fewer than two points yield `0.0`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::CapacityExceeded` if the path holds more than
    /// `max_points` points. The path is never truncated.
    pub fn execute(&self) -> Result<f64> {
        let count = self.points.len();
        if count > self.params.max_points {
            tracing::warn!(
                count,
                max = self.params.max_points,
                "path exceeds point capacity"
            );
            return Err(OperationError::CapacityExceeded {
                count,
                max: self.params.max_points,
            }
            .into());
        }

        Ok(self
            .points
            .iter()
            .zip(self.points.iter().skip(1))
            .map(|(a, b)| a.distance(b))
            .sum())
    }
}

/// Length of the open path through `points` using the default capacity of
/// [`MAX_POINTS`].
///
/// # Errors
///
/// Returns an error if `points` holds more than [`MAX_POINTS`] points.
pub fn calculate_perimeter(points: &[Point]) -> Result<f64> {
    PathPerimeter::new(points).execute()
}
