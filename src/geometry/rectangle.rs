use crate::error::Result;

use super::{ensure_length, Point, Shape};

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    top_left: Point,
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Creates a new rectangle.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` or `height` is negative or not finite.
    pub fn new(top_left: Point, width: f64, height: f64) -> Result<Self> {
        let width = ensure_length("width", width)?;
        let height = ensure_length("height", height)?;
        Ok(Self {
            top_left,
            width,
            height,
        })
    }

    #[must_use]
    pub fn top_left(&self) -> &Point {
        &self.top_left
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// `width * height`.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// `2 * (width + height)`.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        Rectangle::area(self)
    }

    fn perimeter(&self) -> f64 {
        Rectangle::perimeter(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn area_and_perimeter() {
        let r = Rectangle::new(Point::new(-1.0, 5.0).unwrap(), 3.0, 4.5).unwrap();
        assert_relative_eq!(r.area(), 13.5);
        assert_relative_eq!(r.perimeter(), 15.0);
    }

    #[test]
    fn degenerate_rectangle() {
        let r = Rectangle::new(Point::origin(), 0.0, 2.0).unwrap();
        assert_eq!(r.area(), 0.0);
        assert_relative_eq!(r.perimeter(), 4.0);
    }

    #[test]
    fn negative_dimensions() {
        assert!(Rectangle::new(Point::origin(), -1.0, 2.0).is_err());
        assert!(Rectangle::new(Point::origin(), 1.0, -2.0).is_err());
    }

    #[test]
    fn through_shape_trait() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Rectangle::new(Point::origin(), 2.0, 3.0).unwrap()),
            Box::new(Rectangle::new(Point::origin(), 1.0, 1.0).unwrap()),
        ];
        let total: f64 = shapes.iter().map(|s| s.area()).sum();
        assert_relative_eq!(total, 7.0);
    }
}
