use crate::error::Result;
use crate::geometry::{Circle, Point};

/// Creates a heap-allocated circle owned solely by the caller.
pub struct MakeCircle {
    center: Point,
    radius: f64,
}

impl MakeCircle {
    /// Creates a new `MakeCircle` operation.
    #[must_use]
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Executes the operation, returning the boxed circle.
    ///
    /// # Errors
    ///
    /// Returns the same error as [`Circle::new`] for a negative or non-finite
    /// radius.
    pub fn execute(&self) -> Result<Box<Circle>> {
        Circle::new(self.center, self.radius).map(Box::new)
    }
}

/// Shorthand for `MakeCircle::new(*center, radius).execute()`.
///
/// # Errors
///
/// Returns an error if the radius is negative or not finite.
pub fn create_circle(center: &Point, radius: f64) -> Result<Box<Circle>> {
    MakeCircle::new(*center, radius).execute()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn matches_direct_construction() {
        let center = Point::new(1.0, 2.0).unwrap();
        let made = create_circle(&center, 2.5).unwrap();
        let direct = Circle::new(center, 2.5).unwrap();
        assert_relative_eq!(made.area(), direct.area());
        assert_relative_eq!(made.circumference(), direct.circumference());
        assert_eq!(*made, direct);
    }

    #[test]
    fn negative_radius_fails_like_constructor() {
        let center = Point::origin();
        let made = MakeCircle::new(center, -3.0).execute().unwrap_err();
        let direct = Circle::new(center, -3.0).unwrap_err();
        assert_eq!(made.to_string(), direct.to_string());
    }
}
