//! archsolve-core - Core library for school floor plan generation.
//!
//! Given corridor centerlines, a floor count, a climate zone and a list of
//! required rooms, this library assigns every room to a corridor side on some
//! floor, preferring sides whose facing suits the room in that climate, and
//! returns the best candidate layouts ranked by score.
//!
//! # Example
//!
//! ```no_run
//! use archsolve_core::{solve_layout, LayoutInput, SolverConfig};
//!
//! let json = std::fs::read_to_string("request.json").unwrap();
//! let input = LayoutInput::from_json_str(&json).unwrap();
//! let result = solve_layout(&input, SolverConfig::seeded(1), 50).unwrap();
//! println!("best score: {:?}", result.solutions[0].score);
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod model;
pub mod scoring;
pub mod solution;
pub mod solver;
pub mod validation;

// Re-exports for convenience
pub use config::{OverflowPolicy, SolverConfig};
pub use error::{ErrorCode, LayoutError, Result};
pub use geometry::{End, Line, Point};
pub use model::{Climate, Corridor, Facing, LayoutInput, Requirement, Room, RoomType, Side};
pub use scoring::{legend, LegendEntry};
pub use solution::{fit_to_viewport, Shape, Solution};
pub use solver::{SolveOutcome, SolveReport, Solver};
pub use validation::{validate_input, ValidationResult};

use std::cmp::Ordering;

use serde::Serialize;

/// One ranked candidate, ready for presentation.
#[derive(Debug, Clone, Serialize)]
pub struct RankedSolution {
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Position of the candidate in the solver's output.
    pub index: usize,
    /// Mean facing score over all rooms.
    pub score: Option<f64>,
    /// Mean facing score over classrooms only.
    pub classroom_score: Option<f64>,
    pub shapes: Vec<Shape>,
}

impl RankedSolution {
    /// Scale the shapes into a square viewport.
    pub fn fit_to_viewport(&mut self, dimension: f64, border: f64) {
        fit_to_viewport(&mut self.shapes, dimension, border);
    }
}

/// Complete answer to a layout request.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutResult {
    pub solutions: Vec<RankedSolution>,
    pub report: SolveReport,
    /// Validation warnings raised before solving.
    pub warnings: Vec<String>,
}

impl LayoutResult {
    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Score, sort best-first and keep the top `keep` candidates.
///
/// Candidates without any room have no score and sort last; ties keep the
/// solver's order.
pub fn rank_solutions(solutions: &[Solution], keep: usize) -> Vec<RankedSolution> {
    let mut scored: Vec<(usize, Option<f64>)> = solutions
        .iter()
        .enumerate()
        .map(|(idx, s)| (idx, s.score()))
        .collect();

    scored.sort_by(|(_, a), (_, b)| match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    scored.truncate(keep);

    scored
        .into_iter()
        .enumerate()
        .map(|(pos, (index, score))| {
            let solution = &solutions[index];
            RankedSolution {
                rank: pos + 1,
                index,
                score,
                classroom_score: solution.category_score(RoomType::Classroom),
                shapes: solution.shapes(),
            }
        })
        .collect()
}

/// Validate, solve and rank a layout request.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Validate the request (warnings are logged and returned)
/// 2. Run the solver
/// 3. Rank the surviving candidates
///
/// Returns [`LayoutError::NoLayout`] when no candidate survives.
pub fn solve_layout(input: &LayoutInput, config: SolverConfig, keep: usize) -> Result<LayoutResult> {
    let validation = validate_input(input)?;
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    if !validation.passed {
        return Err(LayoutError::InvalidInput {
            field: "request".to_string(),
            message: validation.errors.join("; "),
        });
    }

    solve_validated(input, config, keep, validation.warnings)
}

/// Solve and rank a request that already passed [`validate_input`].
///
/// `warnings` are carried into the result unchanged.
pub fn solve_validated(
    input: &LayoutInput,
    config: SolverConfig,
    keep: usize,
    warnings: Vec<String>,
) -> Result<LayoutResult> {
    let mut solver = Solver::from_input(input, config);
    let outcome = solver.solve()?;
    if outcome.solutions.is_empty() {
        return Err(LayoutError::NoLayout);
    }

    tracing::info!(
        "Ranking {} candidates, keeping {}",
        outcome.solutions.len(),
        keep.min(outcome.solutions.len())
    );

    Ok(LayoutResult {
        solutions: rank_solutions(&outcome.solutions, keep),
        report: outcome.report,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution(rooms: &[(&str, Facing)]) -> Solution {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(50.0, 0.0));
        let mut s = Solution::new(Climate::Cold, vec![line.clone()]);
        for (name, facing) in rooms {
            let mut side = Side::new(0, End::B, *facing, *name, line.clone());
            side.insert(Room::new(RoomType::Classroom, 5.0, 8.0));
            s.push_side(side);
        }
        s
    }

    // ==================== Ranking tests ====================

    #[test]
    fn test_rank_orders_best_first() {
        let solutions = vec![
            solution(&[("1a", Facing::K)]),
            solution(&[]),
            solution(&[("1b", Facing::G)]),
            solution(&[("1b", Facing::B)]),
        ];

        let ranked = rank_solutions(&solutions, 10);
        let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![2, 3, 0, 1]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[0].score, Some(100.0));
        assert_eq!(ranked[0].classroom_score, Some(100.0));
        assert_eq!(ranked[3].score, None);
    }

    #[test]
    fn test_rank_truncates() {
        let solutions = vec![solution(&[("1b", Facing::G)]); 5];
        let ranked = rank_solutions(&solutions, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[1].rank, 2);
        assert_eq!(ranked[1].index, 1);
    }

    // ==================== Pipeline tests ====================

    #[test]
    fn test_solve_layout_rejects_invalid_request() {
        let input = LayoutInput {
            floor_count: 0,
            climate: Climate::Cold,
            corridors: vec![Line::new(Point::new(0.0, 0.0), Point::new(20.0, 0.0))],
            requirements: Default::default(),
        };
        let err = solve_layout(&input, SolverConfig::seeded(1), 10).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidInput);
    }

    #[test]
    fn test_solve_validated_keeps_warnings() {
        let input = LayoutInput::from_json_str(
            r#"{
                "floor_count": 1,
                "climate": "D",
                "corridors": [[[0, 0], [20, 0]]],
                "requirements": {"classroom": {"width": 5, "length": 8, "count": 2}}
            }"#,
        )
        .unwrap();
        let warnings = vec!["checked upstream".to_string()];

        let result = solve_validated(&input, SolverConfig::seeded(1), 5, warnings.clone()).unwrap();
        assert_eq!(result.warnings, warnings);
        assert_eq!(result.solutions.len(), 1);
        assert_eq!(result.solutions[0].score, Some(100.0));
    }
}
