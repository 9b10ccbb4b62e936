//! Solution - one complete candidate layout.

mod conflicts;
mod shapes;

pub use shapes::{fit_to_viewport, Shape};

use std::sync::Arc;

use crate::geometry::Line;
use crate::model::{Climate, Room, RoomType, Side};
use crate::scoring::facing_score;

/// A candidate layout: every side of every floor with its placed rooms,
/// plus the corridor centerlines for rendering.
///
/// Cloning copies every side and room; only the immutable corridor
/// geometry is shared between clones.
#[derive(Debug, Clone)]
pub struct Solution {
    pub climate: Climate,
    sides: Vec<Side>,
    corridors: Arc<[Line]>,
}

impl Solution {
    /// Create an empty solution.
    pub fn new(climate: Climate, corridors: Vec<Line>) -> Self {
        Self {
            climate,
            sides: Vec::new(),
            corridors: corridors.into(),
        }
    }

    pub fn sides(&self) -> &[Side] {
        &self.sides
    }

    pub fn corridors(&self) -> &[Line] {
        &self.corridors
    }

    pub fn push_side(&mut self, side: Side) {
        self.sides.push(side);
    }

    /// Replace every side with one empty copy per floor.
    pub fn replicate_floors(&mut self, floor_count: usize) {
        self.sides = self
            .sides
            .iter()
            .flat_map(|side| (0..floor_count).map(move |floor| side.with_floor(floor)))
            .collect();
    }

    /// Find a side by stable name and floor.
    pub fn side_mut(&mut self, name: &str, floor: usize) -> Option<&mut Side> {
        self.sides
            .iter_mut()
            .find(|s| s.floor == floor && &*s.name == name)
    }

    /// Insert a room on the side at `idx`. Returns `false` if it does not fit.
    pub fn insert_at(&mut self, idx: usize, room: Room) -> bool {
        self.sides.get_mut(idx).is_some_and(|side| side.insert(room))
    }

    /// Number of floors the sides span.
    pub fn floor_count(&self) -> usize {
        self.sides.iter().map(|s| s.floor + 1).max().unwrap_or(0)
    }

    /// Number of placed rooms across all sides.
    pub fn room_count(&self) -> usize {
        self.sides.iter().map(|s| s.rooms().len()).sum()
    }

    /// Number of placed rooms of a category.
    pub fn placed(&self, category: RoomType) -> usize {
        self.sides.iter().map(|s| s.room_count(category)).sum()
    }

    /// Mean facing score over every placed room. `None` when empty.
    pub fn score(&self) -> Option<f64> {
        self.mean_score(|_| true)
    }

    /// Mean facing score over the rooms of one category.
    pub fn category_score(&self, category: RoomType) -> Option<f64> {
        self.mean_score(|c| c == category)
    }

    fn mean_score(&self, include: impl Fn(RoomType) -> bool) -> Option<f64> {
        let (total, count) = self
            .sides
            .iter()
            .flat_map(|side| side.rooms().iter().map(move |room| (side.facing, room)))
            .filter(|(_, room)| include(room.category))
            .fold((0u64, 0usize), |(total, count), (facing, room)| {
                (
                    total + u64::from(facing_score(self.climate, room.category, facing)),
                    count + 1,
                )
            });

        (count > 0).then(|| total as f64 / count as f64)
    }

    /// Overlap with another layout: per side and category, the smaller of
    /// the two room counts, summed.
    pub fn similarity(&self, other: &Solution) -> usize {
        self.sides
            .iter()
            .filter_map(|side| {
                other
                    .sides
                    .iter()
                    .find(|s| s.floor == side.floor && s.name == side.name)
                    .map(|twin| (side, twin))
            })
            .map(|(side, twin)| {
                RoomType::ALL
                    .iter()
                    .map(|&c| side.room_count(c).min(twin.room_count(c)))
                    .sum::<usize>()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{End, Point};
    use crate::model::Facing;

    fn solution() -> Solution {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(30.0, 0.0));
        let mut s = Solution::new(Climate::Cold, vec![line.clone()]);
        s.push_side(Side::new(0, End::A, Facing::G, "1a", line.clone()));
        s.push_side(Side::new(0, End::B, Facing::K, "1b", line));
        s
    }

    fn classroom() -> Room {
        Room::new(RoomType::Classroom, 5.0, 8.0)
    }

    // ==================== Score tests ====================

    #[test]
    fn test_score_empty_is_undefined() {
        assert_eq!(solution().score(), None);
    }

    #[test]
    fn test_score_is_mean_of_facings() {
        let mut s = solution();
        s.side_mut("1a", 0).unwrap().insert(classroom()); // G: 100
        s.side_mut("1b", 0).unwrap().insert(classroom()); // K: 0
        assert_eq!(s.score(), Some(50.0));
        assert_eq!(s.category_score(RoomType::Classroom), Some(50.0));
        assert_eq!(s.category_score(RoomType::Gym), None);
    }

    #[test]
    fn test_score_independent_of_insertion_order() {
        let wc = Room::new(RoomType::Wc, 3.0, 4.0);

        let mut first = solution();
        let side = first.side_mut("1b", 0).unwrap();
        side.insert(classroom());
        side.insert(wc);

        let mut second = solution();
        let side = second.side_mut("1b", 0).unwrap();
        side.insert(wc);
        side.insert(classroom());

        assert_eq!(first.score(), second.score());
    }

    // ==================== Clone tests ====================

    #[test]
    fn test_clone_does_not_alias() {
        let mut original = solution();
        original.side_mut("1a", 0).unwrap().insert(classroom());

        let mut copy = original.clone();
        copy.side_mut("1a", 0).unwrap().insert(classroom());
        copy.side_mut("1b", 0).unwrap().insert(classroom());

        assert_eq!(original.room_count(), 1);
        assert_eq!(copy.room_count(), 3);
        assert!((original.sides()[0].remaining() - 22.0).abs() < 1e-9);
    }

    // ==================== Floor tests ====================

    #[test]
    fn test_replicate_floors() {
        let mut s = solution();
        s.replicate_floors(3);
        assert_eq!(s.sides().len(), 6);
        assert_eq!(s.floor_count(), 3);
        assert!(s.side_mut("1b", 2).is_some());
        assert!(s.side_mut("1b", 3).is_none());
    }

    // ==================== Similarity tests ====================

    #[test]
    fn test_similarity_counts_shared_placements() {
        let mut a = solution();
        let mut b = solution();
        a.side_mut("1a", 0).unwrap().insert(classroom());
        a.side_mut("1a", 0).unwrap().insert(classroom());
        b.side_mut("1a", 0).unwrap().insert(classroom());
        b.side_mut("1b", 0).unwrap().insert(classroom());

        assert_eq!(a.similarity(&b), 1);
        assert_eq!(a.similarity(&a), 2);
    }
}
