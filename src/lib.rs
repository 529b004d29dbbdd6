pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{GeoprimError, Result};
pub use geometry::{Circle, Point, Rectangle, Shape};
pub use operations::creation::create_circle;
pub use operations::query::calculate_perimeter;
