//! Category placement order and per-category strategy.

use serde::Serialize;

use crate::model::RoomType;

/// Floor a category is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorAnchor {
    /// A fixed floor index, clamped to the top floor of lower buildings.
    Floor(usize),
    /// The top floor of the building.
    Top,
}

impl FloorAnchor {
    /// Concrete floor index in a building of `floor_count` floors.
    ///
    /// A fixed floor above the top one is clamped down, so a category
    /// anchored to floor 1 lands on the ground floor of a one-floor building
    /// instead of leaving no layout.
    pub fn resolve(self, floor_count: usize) -> usize {
        let top = floor_count.saturating_sub(1);
        match self {
            FloorAnchor::Floor(floor) => floor.min(top),
            FloorAnchor::Top => top,
        }
    }
}

/// How the units of one category are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Batch one unit per floor and branch on every best-tier side.
    Branching,
    /// Greedy placement on an anchored floor, leftovers anywhere.
    Anchored(FloorAnchor),
    /// Greedy placement on any floor.
    Greedy,
}

/// Fixed priority order. Categories that must stack across floors branch
/// first; floor-bound facilities come next; the rest fill what is left.
pub const PLACEMENT_ORDER: [(RoomType, Strategy); 15] = [
    (RoomType::Wc, Strategy::Branching),
    (RoomType::Classroom, Strategy::Branching),
    (RoomType::Circulation, Strategy::Branching),
    (RoomType::Counseling, Strategy::Anchored(FloorAnchor::Floor(1))),
    (RoomType::Gym, Strategy::Anchored(FloorAnchor::Floor(0))),
    (RoomType::Cafe, Strategy::Anchored(FloorAnchor::Floor(0))),
    (RoomType::Headmasters, Strategy::Anchored(FloorAnchor::Floor(1))),
    (RoomType::Mess, Strategy::Anchored(FloorAnchor::Top)),
    (RoomType::Auditorium, Strategy::Anchored(FloorAnchor::Top)),
    (RoomType::Laboratory, Strategy::Greedy),
    (RoomType::Workshop, Strategy::Greedy),
    (RoomType::Administrative, Strategy::Greedy),
    (RoomType::Teachers, Strategy::Greedy),
    (RoomType::Hall, Strategy::Greedy),
    (RoomType::Library, Strategy::Greedy),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_planned_once() {
        for room_type in RoomType::ALL {
            let count = PLACEMENT_ORDER
                .iter()
                .filter(|(t, _)| *t == room_type)
                .count();
            assert_eq!(count, 1, "{room_type} planned {count} times");
        }
    }

    #[test]
    fn test_branching_runs_first() {
        let first_other = PLACEMENT_ORDER
            .iter()
            .position(|(_, s)| *s != Strategy::Branching)
            .unwrap();
        assert!(PLACEMENT_ORDER[first_other..]
            .iter()
            .all(|(_, s)| *s != Strategy::Branching));
    }

    #[test]
    fn test_anchor_resolution() {
        assert_eq!(FloorAnchor::Floor(1).resolve(3), 1);
        assert_eq!(FloorAnchor::Floor(1).resolve(1), 0);
        assert_eq!(FloorAnchor::Top.resolve(4), 3);
        assert_eq!(FloorAnchor::Top.resolve(0), 0);
    }
}
