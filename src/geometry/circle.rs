use crate::error::Result;
use crate::math::{EPSILON, PI};

use super::{ensure_length, Point, Shape};

/// A circle in the plane.
///
/// Owns a copy of its center; later changes to the caller's point do not
/// move the circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the circle
    /// * `radius` - Radius (zero is allowed)
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative or not finite.
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        let radius = ensure_length("radius", radius)?;
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// `PI * r^2`.
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// `2 * PI * r`.
    #[must_use]
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Returns `true` if `point` lies inside the circle or on its boundary,
    /// with [`EPSILON`] slack on the boundary.
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        self.center.distance(point) <= self.radius + EPSILON
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        Circle::area(self)
    }

    fn perimeter(&self) -> f64 {
        self.circumference()
    }
}
