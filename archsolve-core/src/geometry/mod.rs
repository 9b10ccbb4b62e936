//! 2D geometry primitives for corridor centerlines and side offsets.

mod line;
mod point;

pub use line::{End, Line};
pub use point::Point;
