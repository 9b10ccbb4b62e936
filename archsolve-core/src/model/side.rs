//! Side - one lateral face of a corridor on one floor.

use std::sync::Arc;

use serde::Serialize;

use super::{Facing, Room, RoomType};
use crate::config::EPS;
use crate::geometry::{End, Line, Point};

/// A finite-capacity face of a corridor that rooms are packed onto.
///
/// The name is stable per corridor and end (`"3a"`, `"3b"`) and shared by
/// the copies of the side on every floor.
#[derive(Debug, Clone, Serialize)]
pub struct Side {
    /// Floor the side belongs to.
    pub floor: usize,
    /// Corridor end the side was derived from.
    pub end: End,
    /// Direction the rooms on this side face.
    pub facing: Facing,
    /// Display name, unique per floor.
    pub name: Arc<str>,
    line: Line,
    length: f64,
    remaining: f64,
    rooms: Vec<Room>,
}

impl Side {
    /// Create an empty side over `line`.
    pub fn new(floor: usize, end: End, facing: Facing, name: impl Into<Arc<str>>, line: Line) -> Self {
        let length = line.length();
        Self {
            floor,
            end,
            facing,
            name: name.into(),
            line,
            length,
            remaining: length,
            rooms: Vec::new(),
        }
    }

    /// Empty copy of this side on another floor.
    pub fn with_floor(&self, floor: usize) -> Side {
        Side {
            floor,
            rooms: Vec::new(),
            remaining: self.length,
            ..self.clone()
        }
    }

    pub fn line(&self) -> &Line {
        &self.line
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Check whether a room of `length` still fits.
    pub fn can_fit(&self, length: f64) -> bool {
        length <= self.remaining + EPS
    }

    /// Place a room at the end of the side. Returns `false` if it does not fit.
    pub fn insert(&mut self, room: Room) -> bool {
        if !self.can_fit(room.length) {
            return false;
        }

        self.remaining = (self.remaining - room.length).max(0.0);
        self.rooms.push(room);
        true
    }

    /// Total length taken by placed rooms.
    pub fn used(&self) -> f64 {
        self.rooms.iter().map(|r| r.length).sum()
    }

    /// Number of placed rooms of a category.
    pub fn room_count(&self, category: RoomType) -> usize {
        self.rooms.iter().filter(|r| r.category == category).count()
    }

    /// Name qualified by floor, unique within a solution.
    pub fn full_name(&self) -> String {
        format!("{}_{}", self.floor, self.name)
    }

    /// Endpoint rooms are laid out from.
    pub fn lower_point(&self) -> Point {
        self.line.lower_point()
    }

    pub fn angle(&self) -> f64 {
        self.line.angle()
    }

    /// Pull one endpoint inwards along the side.
    pub fn pull_endpoint(&mut self, end: End, delta: f64) {
        self.line.move_endpoint(end, delta);
    }

    /// Re-derive length from the line and restore full capacity.
    ///
    /// Only meaningful before any room is placed.
    pub fn reset_capacity(&mut self) {
        self.length = self.line.length();
        self.remaining = self.length - self.used();
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.name, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn side(length: f64) -> Side {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(length, 0.0));
        Side::new(0, End::A, Facing::K, "1a", line)
    }

    #[test]
    fn test_insert_consumes_capacity() {
        let mut s = side(20.0);
        assert!(s.insert(Room::new(RoomType::Classroom, 5.0, 8.0)));
        assert!(s.insert(Room::new(RoomType::Classroom, 5.0, 8.0)));
        assert!((s.remaining() - 4.0).abs() < 1e-9);
        assert!(!s.insert(Room::new(RoomType::Classroom, 5.0, 8.0)));
        assert_eq!(s.rooms().len(), 2);
    }

    #[test]
    fn test_insert_exact_fit() {
        let mut s = side(16.0);
        assert!(s.insert(Room::new(RoomType::Gym, 10.0, 16.0)));
        assert_eq!(s.remaining(), 0.0);
        assert!(!s.can_fit(0.5));
    }

    #[test]
    fn test_never_overfills() {
        let mut s = side(10.0);
        for _ in 0..10 {
            s.insert(Room::new(RoomType::Wc, 2.0, 3.0));
            assert!(s.used() <= s.length() + EPS);
            assert!(s.remaining() >= 0.0);
        }
        assert_eq!(s.rooms().len(), 3);
    }

    #[test]
    fn test_with_floor_is_empty_copy() {
        let mut s = side(20.0);
        s.insert(Room::new(RoomType::Library, 5.0, 8.0));
        let upper = s.with_floor(2);
        assert_eq!(upper.floor, 2);
        assert_eq!(upper.name, s.name);
        assert_eq!(upper.facing, s.facing);
        assert!(upper.rooms().is_empty());
        assert_eq!(upper.remaining(), 20.0);
        assert_eq!(upper.full_name(), "2_1a");
    }

    #[test]
    fn test_room_count() {
        let mut s = side(30.0);
        s.insert(Room::new(RoomType::Wc, 2.0, 3.0));
        s.insert(Room::new(RoomType::Classroom, 5.0, 8.0));
        s.insert(Room::new(RoomType::Wc, 2.0, 3.0));
        assert_eq!(s.room_count(RoomType::Wc), 2);
        assert_eq!(s.room_count(RoomType::Gym), 0);
    }

    #[test]
    fn test_pull_endpoint_and_reset() {
        let mut s = side(20.0);
        s.pull_endpoint(End::B, 2.0);
        s.reset_capacity();
        assert!((s.length() - 18.0).abs() < 1e-9);
        assert!((s.remaining() - 18.0).abs() < 1e-9);
    }
}
