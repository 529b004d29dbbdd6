mod perimeter;

pub use perimeter::{calculate_perimeter, PathPerimeter, PerimeterParams};
