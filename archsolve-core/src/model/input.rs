//! LayoutInput - the solver's request: floors, climate, corridors, rooms.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::{Climate, Corridor, Room, RoomType};
use crate::error::Result;
use crate::geometry::Line;

/// Size and count of one requested room category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub width: f64,
    pub length: f64,
    pub count: usize,
}

/// Requested rooms keyed by category.
pub type Requirements = BTreeMap<RoomType, Requirement>;

/// A complete layout request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInput {
    /// Number of building floors.
    pub floor_count: usize,
    /// Climate zone, as a region code (A-D) or a name.
    pub climate: Climate,
    /// Corridor centerlines as `[[x, y], [x, y]]` pairs.
    pub corridors: Vec<Line>,
    /// Requested rooms keyed by form category name.
    #[serde(deserialize_with = "deserialize_requirements")]
    pub requirements: Requirements,
}

/// Form bookkeeping key carried along with the requirements.
const PROCESS_KEY: &str = "process";

fn deserialize_requirements<'de, D>(deserializer: D) -> std::result::Result<Requirements, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    let mut requirements = Requirements::new();

    for (key, value) in raw {
        if key == PROCESS_KEY {
            continue;
        }
        let room_type: RoomType = key.parse().map_err(D::Error::custom)?;
        let requirement: Requirement = serde_json::from_value(value).map_err(D::Error::custom)?;
        requirements.insert(room_type, requirement);
    }

    Ok(requirements)
}

impl LayoutInput {
    /// Parse a request from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Template corridors, one per centerline.
    pub fn corridor_templates(&self) -> Vec<Corridor> {
        self.corridors.iter().cloned().map(Corridor::template).collect()
    }

    /// Expand the requirements into individual room units.
    pub fn rooms(&self) -> Vec<Room> {
        self.requirements
            .iter()
            .flat_map(|(category, req)| {
                std::iter::repeat(Room::new(*category, req.width, req.length)).take(req.count)
            })
            .collect()
    }

    /// Total number of requested units.
    pub fn room_count(&self) -> usize {
        self.requirements.values().map(|r| r.count).sum()
    }

    /// Total corridor length drawn.
    pub fn corridor_length(&self) -> f64 {
        self.corridors.iter().map(|c| c.length()).sum()
    }

    /// Corridor length needed per floor with rooms lining both faces.
    pub fn required_corridor_length(&self) -> f64 {
        if self.floor_count == 0 {
            return 0.0;
        }

        let total: f64 = self
            .requirements
            .values()
            .map(|r| r.length * r.count as f64)
            .sum();

        total / self.floor_count as f64 / 2.0
    }
}
