//! Room - a single unit of a requested category.

use serde::{Deserialize, Serialize};

use super::RoomType;

/// One room unit. `length` is the capacity it consumes along a side,
/// `width` is its depth away from the corridor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub category: RoomType,
    pub width: f64,
    pub length: f64,
}

impl Room {
    /// Create a new room.
    pub fn new(category: RoomType, width: f64, length: f64) -> Self {
        Self {
            category,
            width,
            length,
        }
    }
}
