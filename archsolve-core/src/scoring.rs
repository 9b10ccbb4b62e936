//! Climate scoring table and room color legend.
//!
//! Each climate rates every scoring category for each of the eight facings
//! with 0, 50 or 100. Columns follow [`Facing`] order: G GB B KB K KD D GD.

use crate::model::{Climate, ClimateRoomType, Facing, RoomType};

type CategoryRow = [u8; Facing::COUNT];
type ClimateTable = [CategoryRow; ClimateRoomType::COUNT];

#[rustfmt::skip]
const CLIMATE_SCORES: [ClimateTable; 4] = [
    // Cold
    [
        [100, 100, 50, 0, 0, 0, 50, 100],   // classroom
        [50, 50, 50, 0, 0, 0, 100, 100],    // library
        [0, 0, 50, 100, 100, 100, 50, 0],   // laboratory
        [100, 100, 50, 0, 0, 0, 50, 50],    // cafe
        [100, 100, 50, 0, 0, 0, 50, 50],    // mess
        [0, 50, 50, 100, 100, 100, 50, 50], // hall
        [0, 50, 50, 100, 100, 100, 50, 50], // gym
        [0, 50, 50, 100, 100, 100, 50, 50], // auditorium
        [100, 100, 50, 50, 0, 0, 50, 100],  // workshop
        [0, 0, 0, 50, 100, 50, 0, 0],       // WC
        [0, 0, 50, 100, 100, 100, 50, 0],   // circulation
        [100, 100, 50, 0, 0, 0, 50, 100],   // administrative
    ],
    // Mild
    [
        [100, 100, 50, 0, 0, 0, 50, 100],
        [50, 50, 50, 0, 0, 0, 100, 100],
        [0, 50, 50, 100, 100, 100, 50, 50],
        [100, 100, 50, 0, 0, 50, 50, 100],
        [100, 100, 50, 0, 0, 50, 50, 100],
        [0, 50, 50, 100, 100, 100, 100, 50],
        [0, 50, 50, 100, 100, 100, 100, 50],
        [0, 50, 50, 100, 100, 100, 100, 50],
        [100, 100, 50, 50, 0, 0, 50, 100],
        [0, 0, 50, 100, 100, 100, 50, 0],
        [0, 0, 50, 100, 100, 100, 50, 0],
        [100, 100, 50, 0, 0, 50, 100, 100],
    ],
    // Hot-dry
    [
        [0, 50, 100, 50, 0, 50, 100, 50],
        [0, 50, 100, 0, 0, 0, 100, 50],
        [100, 50, 0, 50, 100, 50, 0, 50],
        [0, 50, 50, 0, 0, 0, 100, 50],
        [0, 50, 50, 0, 0, 0, 100, 50],
        [0, 50, 50, 100, 100, 100, 0, 0],
        [0, 50, 50, 100, 100, 100, 0, 0],
        [0, 50, 50, 100, 100, 100, 0, 0],
        [0, 50, 50, 50, 0, 0, 100, 100],
        [0, 0, 0, 50, 100, 50, 0, 0],
        [0, 0, 50, 100, 100, 100, 50, 0],
        [0, 50, 50, 0, 0, 100, 100, 100],
    ],
    // Hot-humid
    [
        [100, 100, 0, 0, 0, 0, 50, 50],
        [50, 50, 0, 0, 0, 50, 100, 100],
        [0, 0, 50, 100, 100, 100, 50, 0],
        [100, 50, 0, 0, 0, 0, 50, 100],
        [100, 50, 0, 0, 0, 0, 50, 100],
        [0, 0, 100, 100, 100, 50, 50, 0],
        [0, 0, 100, 100, 100, 50, 50, 0],
        [0, 0, 100, 100, 100, 50, 50, 0],
        [100, 100, 50, 50, 0, 0, 50, 100],
        [0, 0, 100, 100, 100, 50, 0, 0],
        [0, 0, 50, 100, 100, 100, 50, 0],
        [100, 100, 0, 0, 0, 0, 50, 50],
    ],
];

/// Score of a room category facing a given direction in a climate.
pub fn facing_score(climate: Climate, room_type: RoomType, facing: Facing) -> u8 {
    CLIMATE_SCORES[climate.index()][room_type.climate_type().index()][facing.index()]
}

/// All eight facing scores of a room category, in [`Facing`] order.
pub fn category_scores(climate: Climate, room_type: RoomType) -> [u8; Facing::COUNT] {
    CLIMATE_SCORES[climate.index()][room_type.climate_type().index()]
}

/// Preference tier of a facing: 0 for 100 points, 1 for 50, 2 otherwise.
pub fn tier(climate: Climate, room_type: RoomType, facing: Facing) -> usize {
    match facing_score(climate, room_type, facing) {
        100 => 0,
        50 => 1,
        _ => 2,
    }
}

/// Number of preference tiers.
pub const TIER_COUNT: usize = 3;

/// Legend color of a room category.
pub fn room_color(room_type: RoomType) -> &'static str {
    match room_type {
        RoomType::Classroom => "#4e79a7",
        RoomType::Library => "#f28e2b",
        RoomType::Laboratory => "#e15759",
        RoomType::Cafe => "#76b7b2",
        RoomType::Mess => "#59a14f",
        RoomType::Hall => "#edc948",
        RoomType::Gym => "#b07aa1",
        RoomType::Auditorium => "#ff9da7",
        RoomType::Workshop => "#9c755f",
        RoomType::Wc => "#bab0ac",
        RoomType::Circulation => "#7f7f7f",
        RoomType::Headmasters => "#8cd17d",
        RoomType::Administrative => "#86bcb6",
        RoomType::Teachers => "#f1ce63",
        RoomType::Counseling => "#d4a6c8",
    }
}

/// Legend entry for front ends.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LegendEntry {
    pub name: &'static str,
    pub color: &'static str,
}

/// Display name and color for every room category.
pub fn legend() -> Vec<LegendEntry> {
    RoomType::ALL
        .iter()
        .map(|t| LegendEntry {
            name: t.display_name(),
            color: room_color(*t),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cold_classroom_scores() {
        assert_eq!(facing_score(Climate::Cold, RoomType::Classroom, Facing::G), 100);
        assert_eq!(facing_score(Climate::Cold, RoomType::Classroom, Facing::B), 50);
        assert_eq!(facing_score(Climate::Cold, RoomType::Classroom, Facing::K), 0);
    }

    #[test]
    fn test_office_rooms_share_a_row() {
        for facing in [Facing::G, Facing::KD, Facing::D] {
            assert_eq!(
                facing_score(Climate::Mild, RoomType::Teachers, facing),
                facing_score(Climate::Mild, RoomType::Administrative, facing)
            );
        }
    }

    #[test]
    fn test_tiers() {
        assert_eq!(tier(Climate::HotDry, RoomType::Classroom, Facing::B), 0);
        assert_eq!(tier(Climate::HotDry, RoomType::Classroom, Facing::GB), 1);
        assert_eq!(tier(Climate::HotDry, RoomType::Classroom, Facing::G), 2);
    }

    #[test]
    fn test_table_values_are_tiered() {
        for climate in [Climate::Cold, Climate::Mild, Climate::HotDry, Climate::HotHumid] {
            for room in RoomType::ALL {
                for score in category_scores(climate, room) {
                    assert!(matches!(score, 0 | 50 | 100));
                }
            }
        }
    }

    #[test]
    fn test_legend_covers_all_categories() {
        let legend = legend();
        assert_eq!(legend.len(), RoomType::ALL.len());
        assert!(legend.iter().any(|e| e.name == "Dining Hall"));
    }
}
