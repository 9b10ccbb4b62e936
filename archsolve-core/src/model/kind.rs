//! Domain enums: room categories, climates, tilts and facings.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::{TILT_COS_NARROW, TILT_COS_WIDE};
use crate::error::LayoutError;
use crate::geometry::End;

/// Room category as requested by the curriculum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum RoomType {
    #[serde(rename = "classroom")]
    Classroom,
    #[serde(rename = "library")]
    Library,
    #[serde(rename = "laboratory")]
    Laboratory,
    #[serde(rename = "cafe")]
    Cafe,
    #[serde(rename = "mess")]
    Mess,
    #[serde(rename = "hall")]
    Hall,
    #[serde(rename = "gym")]
    Gym,
    #[serde(rename = "auditorium")]
    Auditorium,
    #[serde(rename = "workshop")]
    Workshop,
    #[serde(rename = "WC", alias = "wc")]
    Wc,
    #[serde(rename = "circulation")]
    Circulation,
    #[serde(rename = "headmasters")]
    Headmasters,
    #[serde(rename = "administrative")]
    Administrative,
    #[serde(rename = "teacherslounge")]
    Teachers,
    #[serde(rename = "counseling")]
    Counseling,
}

impl RoomType {
    pub const ALL: [RoomType; 15] = [
        RoomType::Classroom,
        RoomType::Library,
        RoomType::Laboratory,
        RoomType::Cafe,
        RoomType::Mess,
        RoomType::Hall,
        RoomType::Gym,
        RoomType::Auditorium,
        RoomType::Workshop,
        RoomType::Wc,
        RoomType::Circulation,
        RoomType::Headmasters,
        RoomType::Administrative,
        RoomType::Teachers,
        RoomType::Counseling,
    ];

    /// Key used in requirement forms.
    pub fn key(&self) -> &'static str {
        match self {
            RoomType::Classroom => "classroom",
            RoomType::Library => "library",
            RoomType::Laboratory => "laboratory",
            RoomType::Cafe => "cafe",
            RoomType::Mess => "mess",
            RoomType::Hall => "hall",
            RoomType::Gym => "gym",
            RoomType::Auditorium => "auditorium",
            RoomType::Workshop => "workshop",
            RoomType::Wc => "WC",
            RoomType::Circulation => "circulation",
            RoomType::Headmasters => "headmasters",
            RoomType::Administrative => "administrative",
            RoomType::Teachers => "teacherslounge",
            RoomType::Counseling => "counseling",
        }
    }

    /// Human-readable name for legends.
    pub fn display_name(&self) -> &'static str {
        match self {
            RoomType::Classroom => "Classroom",
            RoomType::Library => "Library",
            RoomType::Laboratory => "Laboratory",
            RoomType::Cafe => "Cafeteria",
            RoomType::Mess => "Dining Hall",
            RoomType::Hall => "Multi-Purpose Hall",
            RoomType::Gym => "Gymnasium",
            RoomType::Auditorium => "Auditorium",
            RoomType::Workshop => "Workshop",
            RoomType::Wc => "WC",
            RoomType::Circulation => "Circulation",
            RoomType::Headmasters => "Principal's Office",
            RoomType::Administrative => "Administrative",
            RoomType::Teachers => "Teachers' Room",
            RoomType::Counseling => "Counseling",
        }
    }

    /// Scoring category; office-like rooms all score as administrative.
    pub fn climate_type(&self) -> ClimateRoomType {
        match self {
            RoomType::Classroom => ClimateRoomType::Classroom,
            RoomType::Library => ClimateRoomType::Library,
            RoomType::Laboratory => ClimateRoomType::Laboratory,
            RoomType::Cafe => ClimateRoomType::Cafe,
            RoomType::Mess => ClimateRoomType::Mess,
            RoomType::Hall => ClimateRoomType::Hall,
            RoomType::Gym => ClimateRoomType::Gym,
            RoomType::Auditorium => ClimateRoomType::Auditorium,
            RoomType::Workshop => ClimateRoomType::Workshop,
            RoomType::Wc => ClimateRoomType::Wc,
            RoomType::Circulation => ClimateRoomType::Circulation,
            RoomType::Headmasters
            | RoomType::Administrative
            | RoomType::Teachers
            | RoomType::Counseling => ClimateRoomType::Administrative,
        }
    }
}

impl FromStr for RoomType {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        RoomType::ALL
            .iter()
            .copied()
            .find(|t| t.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| LayoutError::UnknownRoomType(s.to_string()))
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Category used to index the climate scoring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClimateRoomType {
    Classroom = 0,
    Library = 1,
    Laboratory = 2,
    Cafe = 3,
    Mess = 4,
    Hall = 5,
    Gym = 6,
    Auditorium = 7,
    Workshop = 8,
    Wc = 9,
    Circulation = 10,
    Administrative = 11,
}

impl ClimateRoomType {
    pub const COUNT: usize = 12;

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Compass-style facing of a side: G = south, K = north, B = west, D = east.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    G = 0,
    GB = 1,
    B = 2,
    KB = 3,
    K = 4,
    KD = 5,
    D = 6,
    GD = 7,
}

impl Facing {
    pub const COUNT: usize = 8;

    pub fn index(self) -> usize {
        self as usize
    }

    /// Facing of the side built from `end` of a corridor with `tilt`.
    pub fn from_end_and_tilt(end: End, tilt: Tilt) -> Facing {
        match (end, tilt) {
            (End::A, Tilt::Flat) => Facing::G,
            (End::A, Tilt::Right) => Facing::GD,
            (End::A, Tilt::Perpendicular) => Facing::D,
            (End::A, Tilt::Left) => Facing::KD,
            (End::A, Tilt::OtherFlat) => Facing::K,
            (End::B, Tilt::Flat) => Facing::K,
            (End::B, Tilt::Right) => Facing::KB,
            (End::B, Tilt::Perpendicular) => Facing::B,
            (End::B, Tilt::Left) => Facing::GB,
            (End::B, Tilt::OtherFlat) => Facing::G,
        }
    }
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Five 45° orientation buckets of a corridor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tilt {
    Flat,
    Right,
    Perpendicular,
    Left,
    OtherFlat,
}

impl Tilt {
    /// Bucket a signed cosine in `[-1, 1]`.
    pub fn from_cosine(cosine: f64) -> Tilt {
        if cosine > TILT_COS_NARROW {
            Tilt::Flat
        } else if cosine > TILT_COS_WIDE {
            Tilt::Right
        } else if cosine > -TILT_COS_WIDE {
            Tilt::Perpendicular
        } else if cosine > -TILT_COS_NARROW {
            Tilt::Left
        } else {
            Tilt::OtherFlat
        }
    }
}

/// Climate zone of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Climate {
    Cold = 0,
    Mild = 1,
    HotDry = 2,
    HotHumid = 3,
}

impl Climate {
    pub fn index(self) -> usize {
        self as usize
    }

    /// Regional code: A hot humid, B hot dry, C mild, D cold.
    pub fn code(&self) -> &'static str {
        match self {
            Climate::HotHumid => "A",
            Climate::HotDry => "B",
            Climate::Mild => "C",
            Climate::Cold => "D",
        }
    }
}

impl FromStr for Climate {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "a" | "hot_humid" => Ok(Climate::HotHumid),
            "b" | "hot_dry" => Ok(Climate::HotDry),
            "c" | "mild" => Ok(Climate::Mild),
            "d" | "cold" => Ok(Climate::Cold),
            _ => Err(LayoutError::UnknownClimate(s.to_string())),
        }
    }
}

impl TryFrom<String> for Climate {
    type Error = LayoutError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Climate> for String {
    fn from(c: Climate) -> Self {
        c.code().to_string()
    }
}

impl std::fmt::Display for Climate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Climate::Cold => write!(f, "Cold"),
            Climate::Mild => write!(f, "Mild"),
            Climate::HotDry => write!(f, "Hot-Dry"),
            Climate::HotHumid => write!(f, "Hot-Humid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_buckets() {
        assert_eq!(Tilt::from_cosine(1.0), Tilt::Flat);
        assert_eq!(Tilt::from_cosine(0.95), Tilt::Flat);
        assert_eq!(Tilt::from_cosine(0.7), Tilt::Right);
        assert_eq!(Tilt::from_cosine(0.0), Tilt::Perpendicular);
        assert_eq!(Tilt::from_cosine(-0.7), Tilt::Left);
        assert_eq!(Tilt::from_cosine(-1.0), Tilt::OtherFlat);
        // Boundary values fall into the next bucket down.
        assert_eq!(Tilt::from_cosine(TILT_COS_NARROW), Tilt::Right);
        assert_eq!(Tilt::from_cosine(-TILT_COS_WIDE), Tilt::Left);
    }

    #[test]
    fn test_facing_table_is_opposed() {
        assert_eq!(Facing::from_end_and_tilt(End::A, Tilt::Flat), Facing::G);
        assert_eq!(Facing::from_end_and_tilt(End::B, Tilt::Flat), Facing::K);
        assert_eq!(Facing::from_end_and_tilt(End::A, Tilt::Perpendicular), Facing::D);
        assert_eq!(Facing::from_end_and_tilt(End::B, Tilt::Perpendicular), Facing::B);
        assert_eq!(Facing::from_end_and_tilt(End::A, Tilt::OtherFlat), Facing::K);
        assert_eq!(Facing::from_end_and_tilt(End::B, Tilt::OtherFlat), Facing::G);
    }

    #[test]
    fn test_room_type_parsing() {
        assert_eq!("classroom".parse::<RoomType>().unwrap(), RoomType::Classroom);
        assert_eq!("WC".parse::<RoomType>().unwrap(), RoomType::Wc);
        assert_eq!("teacherslounge".parse::<RoomType>().unwrap(), RoomType::Teachers);
        assert!("kitchen".parse::<RoomType>().is_err());
    }

    #[test]
    fn test_room_type_serde_keys() {
        let t: RoomType = serde_json::from_str("\"headmasters\"").unwrap();
        assert_eq!(t, RoomType::Headmasters);
        assert_eq!(serde_json::to_string(&RoomType::Wc).unwrap(), "\"WC\"");
    }

    #[test]
    fn test_office_rooms_score_as_administrative() {
        for t in [
            RoomType::Headmasters,
            RoomType::Teachers,
            RoomType::Counseling,
            RoomType::Administrative,
        ] {
            assert_eq!(t.climate_type(), ClimateRoomType::Administrative);
        }
        assert_eq!(RoomType::Gym.climate_type(), ClimateRoomType::Gym);
    }

    #[test]
    fn test_climate_codes() {
        assert_eq!("D".parse::<Climate>().unwrap(), Climate::Cold);
        assert_eq!("a".parse::<Climate>().unwrap(), Climate::HotHumid);
        assert_eq!("Hot-Dry".parse::<Climate>().unwrap(), Climate::HotDry);
        assert!("E".parse::<Climate>().is_err());

        let c: Climate = serde_json::from_str("\"C\"").unwrap();
        assert_eq!(c, Climate::Mild);
        assert_eq!(serde_json::to_string(&Climate::Cold).unwrap(), "\"D\"");
    }
}
