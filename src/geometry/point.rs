use std::fmt;
use std::ops::Add;

use crate::error::{GeoprimError, Result};
use crate::math::{is_equal, Vector2};

use super::ensure_finite;

/// A point in the plane with finite coordinates.
///
/// Both coordinates are checked on construction and on every mutation, so a
/// `Point` never holds NaN or an infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    coords: nalgebra::Point2<f64>,
}

impl Point {
    /// Creates a new point.
    ///
    /// # Errors
    ///
    /// Returns an error if either coordinate is NaN or infinite.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        let x = ensure_finite("x", x)?;
        let y = ensure_finite("y", y)?;
        Ok(Self {
            coords: nalgebra::Point2::new(x, y),
        })
    }

    /// Returns the point `(0, 0)`.
    #[must_use]
    pub fn origin() -> Self {
        Self {
            coords: nalgebra::Point2::origin(),
        }
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.coords.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.coords.y
    }

    /// Replaces the x coordinate.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is NaN or infinite; the point is left unchanged.
    pub fn set_x(&mut self, x: f64) -> Result<()> {
        self.coords.x = ensure_finite("x", x)?;
        Ok(())
    }

    /// Replaces the y coordinate.
    ///
    /// # Errors
    ///
    /// Returns an error if `y` is NaN or infinite; the point is left unchanged.
    pub fn set_y(&mut self, y: f64) -> Result<()> {
        self.coords.y = ensure_finite("y", y)?;
        Ok(())
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Point) -> f64 {
        nalgebra::distance(&self.coords, &other.coords)
    }

    /// Returns this point moved by `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if the result overflows to infinity.
    pub fn translated(&self, offset: Vector2) -> Result<Self> {
        let moved = self.coords + offset;
        Self::new(moved.x, moved.y)
    }

    /// Coordinate-wise comparison within [`EPSILON`](crate::math::EPSILON).
    #[must_use]
    pub fn approx_eq(&self, other: &Point) -> bool {
        is_equal(self.x(), other.x()) && is_equal(self.y(), other.y())
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

/// Component-wise sum. Fails if a component overflows to infinity.
impl Add for Point {
    type Output = Result<Point>;

    fn add(self, rhs: Point) -> Result<Point> {
        self.translated(rhs.coords.coords)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

impl From<Point> for nalgebra::Point2<f64> {
    fn from(point: Point) -> Self {
        point.coords
    }
}

impl TryFrom<nalgebra::Point2<f64>> for Point {
    type Error = GeoprimError;

    fn try_from(p: nalgebra::Point2<f64>) -> Result<Self> {
        Self::new(p.x, p.y)
    }
}

impl TryFrom<(f64, f64)> for Point {
    type Error = GeoprimError;

    fn try_from((x, y): (f64, f64)) -> Result<Self> {
        Self::new(x, y)
    }
}
