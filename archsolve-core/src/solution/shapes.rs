//! Drawable shapes for rooms and corridors.

use serde::Serialize;

use super::Solution;
use crate::geometry::{End, Point};
use crate::model::RoomType;
use crate::scoring::{facing_score, room_color};

/// A drawable polygon (rooms) or polyline (corridors) on one floor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    /// Floor the shape is drawn on.
    pub layer: usize,
    /// Outline points.
    pub points: Vec<Point>,
    /// Fill or stroke color.
    pub color: &'static str,
    /// Facing score of the room (0 for corridors).
    pub score: u8,
}

impl Shape {
    /// Check if this shape is a corridor polyline.
    pub fn is_corridor(&self) -> bool {
        self.points.len() == 2
    }
}

impl Solution {
    /// Lay out every placed room as a rectangle, then add the corridors.
    ///
    /// Rooms on a side start at its lower endpoint and follow each other
    /// along the side; the room's length runs along the side and its width
    /// away from it. Rooms on A sides are mirrored to the opposite face.
    /// Rooms come first, then corridors, each group ordered by floor.
    pub fn shapes(&self) -> Vec<Shape> {
        let mut rooms = Vec::new();

        for side in &self.sides {
            let origin = side.lower_point();
            let angle = side.angle();
            let (ux, uy) = (angle.cos(), angle.sin());
            let (nx, ny) = (uy, -ux);

            let mut offset = 0.0;
            for room in side.rooms() {
                let start = origin.offset_by(offset * ux, offset * uy);
                let across = start.offset_by(room.width * nx, room.width * ny);
                let mut points = vec![
                    start,
                    across,
                    across.offset_by(room.length * ux, room.length * uy),
                    start.offset_by(room.length * ux, room.length * uy),
                ];

                if side.end == End::A {
                    for point in &mut points {
                        *point = side.line().reflect(*point);
                    }
                }

                rooms.push(Shape {
                    layer: side.floor,
                    points,
                    color: room_color(room.category),
                    score: facing_score(self.climate, room.category, side.facing),
                });

                offset += room.length;
            }
        }

        let floors = self.floor_count();
        let mut corridors: Vec<Shape> = self
            .corridors
            .iter()
            .flat_map(|line| {
                (0..floors).map(move |floor| Shape {
                    layer: floor,
                    points: vec![line.a(), line.b()],
                    color: room_color(RoomType::Circulation),
                    score: 0,
                })
            })
            .collect();

        rooms.sort_by_key(|s| s.layer);
        corridors.sort_by_key(|s| s.layer);
        rooms.extend(corridors);
        rooms
    }
}

/// Scale shapes uniformly to fit a `dimension` square with `border` margin,
/// then center them.
pub fn fit_to_viewport(shapes: &mut [Shape], dimension: f64, border: f64) {
    let Some((min, max)) = extremes(shapes) else {
        return;
    };

    let span = (max.x - min.x).max(max.y - min.y);
    let scale = if span > 0.0 {
        (dimension - 2.0 * border) / span
    } else {
        1.0
    };

    let dx = dimension / 2.0 - (max.x + min.x) * scale / 2.0;
    let dy = dimension / 2.0 - (max.y + min.y) * scale / 2.0;

    for point in shapes.iter_mut().flat_map(|s| s.points.iter_mut()) {
        *point = Point::new(point.x * scale + dx, point.y * scale + dy);
    }
}

fn extremes(shapes: &[Shape]) -> Option<(Point, Point)> {
    let mut points = shapes.iter().flat_map(|s| s.points.iter());
    let first = *points.next()?;

    Some(points.fold((first, first), |(min, max), p| {
        (
            Point::new(min.x.min(p.x), min.y.min(p.y)),
            Point::new(max.x.max(p.x), max.y.max(p.y)),
        )
    }))
}
