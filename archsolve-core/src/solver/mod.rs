//! Solver - priority-ordered assignment of rooms to corridor sides.
//!
//! A solve runs in three phases:
//! 1. Corridors are split at interior crossings (see [`explode`]).
//! 2. A seed solution is built: two sides per corridor, corner conflicts
//!    repaired, then one copy of every side per floor.
//! 3. Categories are placed in [`PLACEMENT_ORDER`], each with its strategy,
//!    against the live candidate set.

mod distribute;
mod parallel;
mod plan;
mod report;
mod topology;

pub use plan::{FloorAnchor, Strategy, PLACEMENT_ORDER};
pub use report::{CategoryReport, SolveReport};
pub use topology::{explode, has_junction};

use tracing::{debug, info, warn};

use crate::config::SolverConfig;
use crate::error::{LayoutError, Result};
use crate::geometry::End;
use crate::model::{Climate, Corridor, LayoutInput, Room, RoomType};
use crate::solution::Solution;
use distribute::Search;

/// Candidate solutions together with the solve diagnostics.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub solutions: Vec<Solution>,
    pub report: SolveReport,
}

/// Layout solver for one request.
#[derive(Debug, Clone)]
pub struct Solver {
    floor_count: usize,
    climate: Climate,
    corridors: Vec<Corridor>,
    rooms: Vec<Room>,
    config: SolverConfig,
}

impl Solver {
    pub fn new(
        floor_count: usize,
        climate: Climate,
        corridors: Vec<Corridor>,
        rooms: Vec<Room>,
        config: SolverConfig,
    ) -> Self {
        Self {
            floor_count,
            climate,
            corridors,
            rooms,
            config,
        }
    }

    /// Build a solver from a parsed request.
    pub fn from_input(input: &LayoutInput, config: SolverConfig) -> Self {
        Self::new(
            input.floor_count,
            input.climate,
            input.corridor_templates(),
            input.rooms(),
            config,
        )
    }

    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Split corridors at interior crossings. Returns the passes performed.
    pub fn normalize_corridors(&mut self) -> usize {
        explode(&mut self.corridors)
    }

    /// Empty seed solution over the current corridors.
    ///
    /// Sides are named `"{n}a"` and `"{n}b"` after their corridor's position,
    /// and keep that name on every floor.
    pub fn seed_solution(&self) -> Solution {
        let lines = self.corridors.iter().map(|c| c.line.clone()).collect();
        let mut solution = Solution::new(self.climate, lines);

        for (i, corridor) in self.corridors.iter().enumerate() {
            for end in [End::A, End::B] {
                solution.push_side(corridor.side(end, format!("{}{}", i + 1, end.marker())));
            }
        }

        solution.resolve_conflicts();
        solution.replicate_floors(self.floor_count);
        solution
    }

    /// Run the full search.
    ///
    /// Normalizes the corridors in place, so a repeated call performs no
    /// further splits. An empty candidate set is returned as is; callers
    /// decide whether that is an error.
    pub fn solve(&mut self) -> Result<SolveOutcome> {
        if self.floor_count == 0 {
            return Err(LayoutError::InvalidInput {
                field: "floor_count".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        let splits = self.normalize_corridors();
        debug!("Normalized corridors: {} after {} splits", self.corridors.len(), splits);

        let junction_found = has_junction(&self.corridors);
        if !junction_found {
            if self.config.strict_circulation {
                return Err(LayoutError::NoCirculationJunction);
            }
            warn!("Corridors never meet; no junction for vertical circulation");
        }

        let mut solutions = vec![self.seed_solution()];
        let mut search = Search::new(&self.config, self.climate, self.floor_count);
        let mut remaining = self.rooms.clone();
        let mut categories = Vec::new();

        for (category, strategy) in PLACEMENT_ORDER {
            let rooms = take_rooms(&mut remaining, category);
            if rooms.is_empty() {
                continue;
            }

            let placed = match strategy {
                Strategy::Branching => search.distribute(&mut solutions, &rooms)?,
                Strategy::Anchored(anchor) => {
                    let floor = anchor.resolve(self.floor_count);
                    let anchored = search.distribute_greedy(&mut solutions, &rooms, Some(floor))?;
                    anchored + search.distribute_greedy(&mut solutions, &rooms[anchored..], None)?
                }
                Strategy::Greedy => search.distribute_greedy(&mut solutions, &rooms, None)?,
            };

            info!(
                "Solved {}: {}/{} placed, {} candidates",
                category.display_name(),
                placed,
                rooms.len(),
                solutions.len()
            );

            categories.push(CategoryReport {
                category,
                strategy,
                requested: rooms.len(),
                placed,
            });
        }

        let report = SolveReport {
            categories,
            splits,
            junction_found,
            capped: search.capped,
            timed_out: search.timed_out,
            candidates: solutions.len(),
        };

        for (category, count) in report.undistributed() {
            warn!("Undistributed: {} x {}", count, category.display_name());
        }

        if let Some(best) = solutions.first() {
            for side in best.sides().iter().filter(|s| !s.rooms().is_empty()) {
                debug!(
                    "{} floor {} {:?}: {} rooms",
                    side.name,
                    side.floor + 1,
                    side.facing,
                    side.rooms().len()
                );
            }
        }

        Ok(SolveOutcome { solutions, report })
    }
}

/// Remove and return every unit of `category`.
fn take_rooms(remaining: &mut Vec<Room>, category: RoomType) -> Vec<Room> {
    let (taken, rest) = remaining.drain(..).partition(|r| r.category == category);
    *remaining = rest;
    taken
}
