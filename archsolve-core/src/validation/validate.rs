//! Validation of layout requests before solving.

use crate::config::EPS;
use crate::error::{LayoutError, Result};
use crate::geometry::Line;
use crate::model::{LayoutInput, Requirement, RoomType};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error, failing the result.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        self.passed &= other.passed;
    }

    /// Passed without any warning.
    pub fn is_clean(&self) -> bool {
        self.passed && self.warnings.is_empty()
    }
}

/// Validate a whole request.
///
/// A request without corridors cannot be laid out at all and is an error;
/// everything else is collected into the result.
pub fn validate_input(input: &LayoutInput) -> Result<ValidationResult> {
    if input.corridors.is_empty() {
        return Err(LayoutError::NoCorridors);
    }

    let mut result = ValidationResult::ok();

    if input.floor_count == 0 {
        result.add_error("Floor count must be at least 1");
    }

    for (idx, line) in input.corridors.iter().enumerate() {
        result.merge(validate_corridor(line, idx + 1));
    }

    let longest = input
        .corridors
        .iter()
        .map(Line::length)
        .fold(0.0, f64::max);
    for (room_type, requirement) in &input.requirements {
        result.merge(validate_requirement(*room_type, requirement, longest));
    }

    let required = input.required_corridor_length();
    let available = input.corridor_length();
    if required > available + EPS {
        result.add_warning(format!(
            "Corridors are too short: {:.1} drawn, about {:.1} needed",
            available, required
        ));
    }

    Ok(result)
}

/// Validate a single corridor centerline.
pub fn validate_corridor(line: &Line, corridor_num: usize) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if line.length() < EPS {
        result.add_error(format!(
            "Corridor {}: Degenerate line at {}",
            corridor_num,
            line.a()
        ));
    }

    result
}

/// Validate the requirement of one category against the longest corridor.
pub fn validate_requirement(
    room_type: RoomType,
    requirement: &Requirement,
    longest_corridor: f64,
) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let name = room_type.display_name();

    if requirement.width <= 0.0 || requirement.length <= 0.0 {
        result.add_error(format!(
            "{}: Invalid dimensions ({}x{})",
            name, requirement.width, requirement.length
        ));
    }

    if requirement.count == 0 {
        result.add_warning(format!("{}: Zero rooms requested", name));
    } else if requirement.length > longest_corridor + EPS {
        result.add_warning(format!(
            "{}: Length {} exceeds every corridor, rooms will stay undistributed",
            name, requirement.length
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::model::{Climate, Requirements};

    fn input(corridors: Vec<Line>, requirements: Requirements) -> LayoutInput {
        LayoutInput {
            floor_count: 1,
            climate: Climate::Cold,
            corridors,
            requirements,
        }
    }

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
        Line::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    fn requirement(width: f64, length: f64, count: usize) -> Requirement {
        Requirement { width, length, count }
    }

    #[test]
    fn test_valid_input_is_clean() {
        let mut reqs = Requirements::new();
        reqs.insert(RoomType::Classroom, requirement(5.0, 8.0, 2));
        let result = validate_input(&input(vec![line(0.0, 0.0, 20.0, 0.0)], reqs)).unwrap();
        assert!(result.is_clean(), "{:?}", result);
    }

    #[test]
    fn test_no_corridors_is_error() {
        let err = validate_input(&input(Vec::new(), Requirements::new())).unwrap_err();
        assert!(matches!(err, LayoutError::NoCorridors));
    }

    #[test]
    fn test_zero_floors_and_degenerate_corridor() {
        let mut request = input(vec![line(3.0, 3.0, 3.0, 3.0)], Requirements::new());
        request.floor_count = 0;

        let result = validate_input(&request).unwrap();
        assert!(!result.passed);
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_requirement_checks() {
        let bad = validate_requirement(RoomType::Gym, &requirement(0.0, 12.0, 1), 20.0);
        assert!(!bad.passed);

        let empty = validate_requirement(RoomType::Gym, &requirement(10.0, 12.0, 0), 20.0);
        assert!(empty.passed);
        assert_eq!(empty.warnings.len(), 1);

        let long = validate_requirement(RoomType::Gym, &requirement(10.0, 30.0, 1), 20.0);
        assert!(long.passed);
        assert!(long.warnings[0].contains("exceeds every corridor"));
    }

    #[test]
    fn test_short_corridors_warned() {
        let mut reqs = Requirements::new();
        // 10 x 8 / 1 floor / 2 faces = 40 needed, 20 drawn.
        reqs.insert(RoomType::Classroom, requirement(5.0, 8.0, 10));
        let result = validate_input(&input(vec![line(0.0, 0.0, 20.0, 0.0)], reqs)).unwrap();

        assert!(result.passed);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("too short"));
    }
}
