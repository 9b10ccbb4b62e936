//! Point - 2D coordinate value type.

use serde::{Deserialize, Serialize};

use crate::config::float_cmp::round1;

/// A 2D point. Serialized as an `[x, y]` pair.
///
/// Equality compares coordinates rounded to one decimal place, so points
/// produced by different arithmetic paths still match at shared corners.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// This point with both coordinates rounded to one decimal place.
    pub fn rounded(&self) -> Point {
        Point::new(round1(self.x), round1(self.y))
    }

    /// Translate by a delta.
    pub fn offset_by(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        round1(self.x) == round1(other.x) && round1(self.y) == round1(other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-9);
        assert!((b.distance(&a) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_equality_rounds_to_one_decimal() {
        assert_eq!(Point::new(1.01, 2.04), Point::new(0.99, 1.96));
        assert_ne!(Point::new(1.0, 2.0), Point::new(1.2, 2.0));
    }

    #[test]
    fn test_serde_as_pair() {
        let p: Point = serde_json::from_str("[1.5, -2.0]").unwrap();
        assert_eq!(p.x, 1.5);
        assert_eq!(p.y, -2.0);
        assert_eq!(serde_json::to_string(&p).unwrap(), "[1.5,-2.0]");
    }
}
