//! Error types for layout generation.

use thiserror::Error;

use crate::model::RoomType;

/// Error codes for layout processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed or out-of-range input (-1)
    InvalidInput = -1,
    /// No corridor centerlines supplied (-2)
    NoCorridors = -2,
    /// Unknown climate or room category code (-3)
    UnknownCode = -3,
    /// Internal search invariant broken (E100)
    InvariantViolation = 100,
    /// Corridor graph has no junction for vertical circulation (E200)
    NoCirculationJunction = 200,
    /// Search ended with an empty candidate set (E201)
    NoLayout = 201,
    /// Worker thread failure (E300)
    WorkerFailed = 300,
}

/// Main error type for the solver.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Invalid value for '{field}': {message}")]
    InvalidInput { field: String, message: String },

    #[error("No corridors found in input")]
    NoCorridors,

    #[error("Unknown climate code '{0}'")]
    UnknownClimate(String),

    #[error("Unknown room category '{0}'")]
    UnknownRoomType(String),

    #[error("Side '{name}' on floor {floor} not found in a branch predetermined to fit")]
    SideNotFound { name: String, floor: usize },

    #[error("Side '{name}' on floor {floor} rejected a {category} room predetermined to fit")]
    PlacementRejected {
        name: String,
        floor: usize,
        category: RoomType,
    },

    #[error("Corridors never meet, no junction available for vertical circulation")]
    NoCirculationJunction,

    #[error("No layout satisfies the requirements")]
    NoLayout,

    #[error("Worker thread panicked during a search pass")]
    WorkerPanicked,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LayoutError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            LayoutError::InvalidInput { .. } => ErrorCode::InvalidInput,
            LayoutError::NoCorridors => ErrorCode::NoCorridors,
            LayoutError::UnknownClimate(_) => ErrorCode::UnknownCode,
            LayoutError::UnknownRoomType(_) => ErrorCode::UnknownCode,
            LayoutError::SideNotFound { .. } => ErrorCode::InvariantViolation,
            LayoutError::PlacementRejected { .. } => ErrorCode::InvariantViolation,
            LayoutError::NoCirculationJunction => ErrorCode::NoCirculationJunction,
            LayoutError::NoLayout => ErrorCode::NoLayout,
            LayoutError::WorkerPanicked => ErrorCode::WorkerFailed,
            LayoutError::Json(_) => ErrorCode::InvalidInput,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    /// Whether this error signals a bug in the search rather than bad input.
    pub fn is_invariant_violation(&self) -> bool {
        self.code() == ErrorCode::InvariantViolation
    }
}

/// Result type alias for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(LayoutError::NoCorridors.code_value(), -2);
        assert_eq!(LayoutError::NoLayout.code_value(), 201);
        assert_eq!(
            LayoutError::UnknownClimate("Z".into()).code(),
            ErrorCode::UnknownCode
        );
    }

    #[test]
    fn test_invariant_violations() {
        let err = LayoutError::SideNotFound {
            name: "1a".into(),
            floor: 0,
        };
        assert!(err.is_invariant_violation());
        assert!(!LayoutError::NoLayout.is_invariant_violation());
        assert!(err.to_string().contains("'1a' on floor 0"));
    }
}
