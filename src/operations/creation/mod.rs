mod make_circle;

pub use make_circle::{create_circle, MakeCircle};
