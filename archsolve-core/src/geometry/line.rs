//! Line segment with cached length, slope and offset.

use serde::{Deserialize, Serialize};

use super::Point;
use crate::config::float_cmp::{approx_eq, round1};
use crate::config::{COINCIDENT_DISTANCE, EPS};

/// Selects one endpoint of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum End {
    A,
    B,
}

impl End {
    /// The opposite endpoint.
    pub fn other(self) -> End {
        match self {
            End::A => End::B,
            End::B => End::A,
        }
    }

    /// Lowercase marker used in side names.
    pub fn marker(self) -> char {
        match self {
            End::A => 'a',
            End::B => 'b',
        }
    }
}

/// A line segment between two points.
///
/// Length, slope and offset (`y = slope * x + offset`) are derived from the
/// endpoints and recomputed whenever an endpoint moves. Slope and offset are
/// `None` for vertical segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "(Point, Point)", into = "(Point, Point)")]
pub struct Line {
    a: Point,
    b: Point,
    length: f64,
    slope: Option<f64>,
    offset: Option<f64>,
}

impl Line {
    /// Create a new segment from `a` to `b`.
    pub fn new(a: Point, b: Point) -> Self {
        let mut line = Self {
            a,
            b,
            length: 0.0,
            slope: None,
            offset: None,
        };
        line.refresh();
        line
    }

    fn refresh(&mut self) {
        self.length = self.a.distance(&self.b);
        if approx_eq(self.a.x, self.b.x) {
            self.slope = None;
            self.offset = None;
        } else {
            let slope = (self.b.y - self.a.y) / (self.b.x - self.a.x);
            self.slope = Some(slope);
            self.offset = Some(self.a.y - slope * self.a.x);
        }
    }

    pub fn a(&self) -> Point {
        self.a
    }

    pub fn b(&self) -> Point {
        self.b
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn slope(&self) -> Option<f64> {
        self.slope
    }

    pub fn offset(&self) -> Option<f64> {
        self.offset
    }

    /// Get one endpoint.
    pub fn endpoint(&self, end: End) -> Point {
        match end {
            End::A => self.a,
            End::B => self.b,
        }
    }

    /// Endpoint with the smaller Y (B on ties).
    pub fn lower_point(&self) -> Point {
        if self.a.y < self.b.y {
            self.a
        } else {
            self.b
        }
    }

    /// Signed cosine of the segment direction, measured from its lower end.
    ///
    /// Horizontal segments measure from A towards B with the sign flipped,
    /// so a left-to-right horizontal segment yields -1.
    pub fn cosine(&self) -> f64 {
        if self.length < EPS {
            return 1.0;
        }

        let (adjacent, opposite) = if self.a.y < self.b.y {
            (self.b.x - self.a.x, self.b.y - self.a.y)
        } else {
            (self.a.x - self.b.x, self.a.y - self.b.y)
        };

        let sign = if opposite < 0.0 { -1.0 } else { 1.0 };
        (adjacent / self.length * sign).clamp(-1.0, 1.0)
    }

    /// Orientation angle in radians, in `[0, PI]`.
    pub fn angle(&self) -> f64 {
        self.cosine().acos()
    }

    /// Intersection point of the two infinite lines.
    ///
    /// Returns `None` for parallel lines: both vertical, or slopes equal
    /// after rounding to one decimal.
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        match (self.slope, other.slope) {
            (None, None) => None,
            (None, Some(slope)) => {
                let x = self.a.x;
                Some(Point::new(x, slope * x + other.offset?))
            }
            (Some(slope), None) => {
                let x = other.a.x;
                Some(Point::new(x, slope * x + self.offset?))
            }
            (Some(s1), Some(s2)) => {
                if round1(s1) == round1(s2) {
                    return None;
                }
                let (o1, o2) = (self.offset?, other.offset?);
                let x = (o2 - o1) / (s1 - s2);
                Some(Point::new(x, s1 * x + o1))
            }
        }
    }

    /// Check whether `point` lies within the segment's bounding box.
    ///
    /// Points within [`COINCIDENT_DISTANCE`] of an endpoint are rejected as
    /// coincident. Coordinates are compared after rounding to one decimal;
    /// `inclusive` decides whether the endpoint coordinates themselves count.
    /// On an axis where both endpoints share a coordinate the point must
    /// share it as well.
    pub fn contains(&self, point: &Point, inclusive: bool) -> bool {
        if self.a.distance(point) < COINCIDENT_DISTANCE
            || self.b.distance(point) < COINCIDENT_DISTANCE
        {
            return false;
        }

        let a = self.a.rounded();
        let b = self.b.rounded();
        let p = point.rounded();

        axis_within(a.x, b.x, p.x, inclusive) && axis_within(a.y, b.y, p.y, inclusive)
    }

    /// Check whether the two segments cross inside both of their bounds.
    pub fn intersects_within_bounds(&self, other: &Line) -> bool {
        match self.intersection(other) {
            Some(p) => self.contains(&p, true) && other.contains(&p, true),
            None => false,
        }
    }

    /// Check whether the two segments share any endpoint.
    pub fn is_head_on(&self, other: &Line) -> bool {
        self.a == other.a || self.a == other.b || self.b == other.a || self.b == other.b
    }

    /// Check whether both segments join the same two points, in either order.
    pub fn same_segment(&self, other: &Line) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }

    /// Check whether the segments meet anywhere (shared endpoint, T or cross).
    pub fn touches(&self, other: &Line) -> bool {
        if self.is_head_on(other) {
            return true;
        }

        match self.intersection(other) {
            Some(p) => {
                self.distance_to(&p) <= COINCIDENT_DISTANCE
                    && other.distance_to(&p) <= COINCIDENT_DISTANCE
            }
            None => false,
        }
    }

    /// Shortest distance from `point` to the segment.
    pub fn distance_to(&self, point: &Point) -> f64 {
        if self.length < EPS {
            return self.a.distance(point);
        }

        let dx = self.b.x - self.a.x;
        let dy = self.b.y - self.a.y;
        let t = (((point.x - self.a.x) * dx + (point.y - self.a.y) * dy)
            / (self.length * self.length))
            .clamp(0.0, 1.0);

        point.distance(&Point::new(self.a.x + t * dx, self.a.y + t * dy))
    }

    /// Move one endpoint towards the other by `delta` along the segment.
    pub fn move_endpoint(&mut self, end: End, delta: f64) {
        if self.length < EPS {
            return;
        }

        let (from, to) = match end {
            End::A => (self.a, self.b),
            End::B => (self.b, self.a),
        };
        let dx = (to.x - from.x) / self.length * delta;
        let dy = (to.y - from.y) / self.length * delta;

        match end {
            End::A => self.a = from.offset_by(dx, dy),
            End::B => self.b = from.offset_by(dx, dy),
        }
        self.refresh();
    }

    /// Copy of this segment translated by a delta.
    pub fn translated(&self, dx: f64, dy: f64) -> Line {
        Line::new(self.a.offset_by(dx, dy), self.b.offset_by(dx, dy))
    }

    /// The two parallel copies at `distance` on either side.
    ///
    /// The first copy lies towards +X, or towards -Y when the segment is
    /// horizontal.
    pub fn offset_pair(&self, distance: f64) -> (Line, Line) {
        if self.length < EPS {
            return (self.clone(), self.clone());
        }

        let mut nx = -(self.b.y - self.a.y) / self.length;
        let mut ny = (self.b.x - self.a.x) / self.length;
        if nx < -EPS || (nx.abs() <= EPS && ny > 0.0) {
            nx = -nx;
            ny = -ny;
        }

        (
            self.translated(nx * distance, ny * distance),
            self.translated(-nx * distance, -ny * distance),
        )
    }

    /// Reflect a point across the infinite line through this segment.
    pub fn reflect(&self, point: Point) -> Point {
        if self.length < EPS {
            return point;
        }

        let ux = (self.b.x - self.a.x) / self.length;
        let uy = (self.b.y - self.a.y) / self.length;
        let t = (point.x - self.a.x) * ux + (point.y - self.a.y) * uy;
        let px = self.a.x + t * ux;
        let py = self.a.y + t * uy;

        Point::new(2.0 * px - point.x, 2.0 * py - point.y)
    }
}

fn axis_within(a: f64, b: f64, p: f64, inclusive: bool) -> bool {
    if a == b {
        return p == a;
    }

    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    if inclusive {
        lo <= p && p <= hi
    } else {
        lo < p && p < hi
    }
}

impl From<(Point, Point)> for Line {
    fn from((a, b): (Point, Point)) -> Self {
        Line::new(a, b)
    }
}

impl From<Line> for (Point, Point) {
    fn from(line: Line) -> Self {
        (line.a, line.b)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} > {} ({:.2})", self.a, self.b, self.length)
    }
}
