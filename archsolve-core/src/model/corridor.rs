//! Corridor - a circulation centerline segment.

use serde::Serialize;

use super::{Facing, Side, Tilt};
use crate::config::PULL_DISTANCE;
use crate::geometry::{End, Line, Point};

/// A corridor centerline. `floor` is `None` for a template that has not
/// been replicated per floor yet.
#[derive(Debug, Clone, Serialize)]
pub struct Corridor {
    pub floor: Option<usize>,
    pub line: Line,
    pub tilt: Tilt,
}

impl Corridor {
    /// Create a corridor, deriving its tilt from the line's angle.
    pub fn new(floor: Option<usize>, line: Line) -> Self {
        let tilt = Tilt::from_cosine(line.cosine());
        Self { floor, line, tilt }
    }

    /// Template corridor not bound to any floor.
    pub fn template(line: Line) -> Self {
        Self::new(None, line)
    }

    pub fn length(&self) -> f64 {
        self.line.length()
    }

    /// The side derived from one end of this corridor.
    pub fn side(&self, end: End, name: impl Into<std::sync::Arc<str>>) -> Side {
        Side::new(
            self.floor.unwrap_or(0),
            end,
            Facing::from_end_and_tilt(end, self.tilt),
            name,
            self.line.clone(),
        )
    }

    /// Split at `point` into the A-half and the B-half.
    ///
    /// A fragment shorter than [`PULL_DISTANCE`] is dropped.
    pub fn explode_at(&self, point: Point) -> (Option<Corridor>, Option<Corridor>) {
        let keep = |line: Line| {
            (line.length() >= PULL_DISTANCE).then(|| Corridor::new(self.floor, line))
        };

        (
            keep(Line::new(self.line.a(), point)),
            keep(Line::new(point, self.line.b())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor(x1: f64, y1: f64, x2: f64, y2: f64) -> Corridor {
        Corridor::template(Line::new(Point::new(x1, y1), Point::new(x2, y2)))
    }

    #[test]
    fn test_tilt_from_line() {
        assert_eq!(corridor(0.0, 0.0, 20.0, 0.0).tilt, Tilt::OtherFlat);
        assert_eq!(corridor(20.0, 0.0, 0.0, 0.0).tilt, Tilt::Flat);
        assert_eq!(corridor(0.0, 0.0, 0.0, 20.0).tilt, Tilt::Perpendicular);
        assert_eq!(corridor(0.0, 0.0, 10.0, 10.0).tilt, Tilt::Right);
        assert_eq!(corridor(0.0, 0.0, -10.0, 10.0).tilt, Tilt::Left);
    }

    #[test]
    fn test_sides_face_opposite_ways() {
        let c = corridor(0.0, 0.0, 20.0, 0.0);
        let a = c.side(End::A, "1a");
        let b = c.side(End::B, "1b");
        assert_eq!(a.facing, Facing::K);
        assert_eq!(b.facing, Facing::G);
        assert_eq!(a.length(), 20.0);
        assert_eq!(b.remaining(), 20.0);
    }

    #[test]
    fn test_explode_lengths_sum() {
        let c = corridor(0.0, 0.0, 20.0, 0.0);
        let (x, y) = c.explode_at(Point::new(7.0, 0.0));
        let (x, y) = (x.unwrap(), y.unwrap());
        assert!((x.length() + y.length() - c.length()).abs() < 1e-9);
        assert_eq!(x.line.b(), Point::new(7.0, 0.0));
        assert_eq!(y.line.a(), Point::new(7.0, 0.0));
    }

    #[test]
    fn test_explode_drops_short_fragment() {
        let c = corridor(0.0, 0.0, 20.0, 0.0);
        let (x, y) = c.explode_at(Point::new(1.0, 0.0));
        assert!(x.is_none());
        assert!((y.unwrap().length() - 19.0).abs() < 1e-9);
    }
}
