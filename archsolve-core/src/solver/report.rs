//! Solve diagnostics.

use serde::Serialize;

use super::plan::Strategy;
use crate::model::RoomType;

/// Outcome of one category's placement.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub category: RoomType,
    pub strategy: Strategy,
    /// Units requested.
    pub requested: usize,
    /// Units placed in every surviving candidate.
    pub placed: usize,
}

impl CategoryReport {
    pub fn undistributed(&self) -> usize {
        self.requested.saturating_sub(self.placed)
    }
}

/// Diagnostics of a full solve.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SolveReport {
    pub categories: Vec<CategoryReport>,
    /// Splitting passes performed while normalizing corridors.
    pub splits: usize,
    /// Whether any two corridors meet.
    pub junction_found: bool,
    /// Whether the candidate cap was hit during branching.
    pub capped: bool,
    /// Whether the time limit expired before every unit was processed.
    pub timed_out: bool,
    /// Candidates alive at the end of the search.
    pub candidates: usize,
}

impl SolveReport {
    /// Categories with units that were never placed.
    pub fn undistributed(&self) -> Vec<(RoomType, usize)> {
        self.categories
            .iter()
            .filter(|c| c.undistributed() > 0)
            .map(|c| (c.category, c.undistributed()))
            .collect()
    }

    pub fn total_undistributed(&self) -> usize {
        self.categories.iter().map(CategoryReport::undistributed).sum()
    }

    /// Report for a single category, if it was requested.
    pub fn category(&self, category: RoomType) -> Option<&CategoryReport> {
        self.categories.iter().find(|c| c.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undistributed_lists_only_short_categories() {
        let report = SolveReport {
            categories: vec![
                CategoryReport {
                    category: RoomType::Classroom,
                    strategy: Strategy::Branching,
                    requested: 8,
                    placed: 5,
                },
                CategoryReport {
                    category: RoomType::Library,
                    strategy: Strategy::Greedy,
                    requested: 1,
                    placed: 1,
                },
            ],
            ..Default::default()
        };

        assert_eq!(report.undistributed(), vec![(RoomType::Classroom, 3)]);
        assert_eq!(report.total_undistributed(), 3);
        assert_eq!(report.category(RoomType::Library).unwrap().placed, 1);
        assert!(report.category(RoomType::Gym).is_none());
    }
}
