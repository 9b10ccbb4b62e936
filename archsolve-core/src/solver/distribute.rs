//! Placement strategies over the live candidate set.

use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::parallel::par_map;
use crate::config::{OverflowPolicy, SolverConfig};
use crate::error::{LayoutError, Result};
use crate::model::{Climate, Room, RoomType};
use crate::scoring::{tier, TIER_COUNT};
use crate::solution::Solution;

/// Mutable state of one search: the master RNG, the clock and the flags
/// collected for the report.
pub(crate) struct Search<'a> {
    config: &'a SolverConfig,
    climate: Climate,
    floor_count: usize,
    rng: StdRng,
    started: Instant,
    pub capped: bool,
    pub timed_out: bool,
}

impl<'a> Search<'a> {
    pub fn new(config: &'a SolverConfig, climate: Climate, floor_count: usize) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            climate,
            floor_count,
            rng,
            started: Instant::now(),
            capped: false,
            timed_out: false,
        }
    }

    fn expired(&mut self) -> bool {
        if let Some(limit) = self.config.time_limit {
            if self.started.elapsed() >= limit {
                self.timed_out = true;
            }
        }
        self.timed_out
    }

    /// Exhaustive branching. Units are taken in batches of one per floor;
    /// every solution spawns one child per best-tier side that fits.
    ///
    /// Returns the number of units placed.
    pub fn distribute(&mut self, solutions: &mut Vec<Solution>, rooms: &[Room]) -> Result<usize> {
        let mut placed = 0;

        for batch in rooms.chunks(self.floor_count.max(1)) {
            if solutions.is_empty() || self.expired() {
                break;
            }

            let capped = self.branch(solutions, batch)?;
            if solutions.is_empty() {
                break;
            }
            placed += batch.len();

            if capped && self.config.overflow == OverflowPolicy::DropNewest {
                break;
            }
        }

        Ok(placed)
    }

    /// One branching pass. Returns whether the children were cut to the cap.
    fn branch(&mut self, solutions: &mut Vec<Solution>, batch: &[Room]) -> Result<bool> {
        let Some(first) = batch.first() else {
            return Ok(false);
        };
        let category = first.category;
        let length = batch.iter().map(|r| r.length).fold(0.0, f64::max);
        let climate = self.climate;

        let parents: Vec<&Solution> = solutions.iter().collect();
        let mut targets = par_map(parents, self.config.workers, |solution| {
            branch_targets(solution, climate, category, length)
        })?;

        let total: usize = targets.iter().map(Vec::len).sum();
        let mut capped = false;
        if self.config.over_capacity(total) {
            let max = self.config.max_candidates.unwrap_or(total);
            targets = self.select(targets, total, max);
            capped = true;
            self.capped = true;
        }

        debug!(
            "Branching {} x{}: {} candidates, {} children{}",
            category,
            batch.len(),
            solutions.len(),
            total.min(self.config.max_candidates.unwrap_or(usize::MAX)),
            if capped { " (capped)" } else { "" }
        );

        let jobs: Vec<(Solution, Vec<Arc<str>>)> = std::mem::take(solutions)
            .into_iter()
            .zip(targets)
            .filter(|(_, names)| !names.is_empty())
            .collect();

        let children = par_map(jobs, self.config.workers, |(parent, names)| {
            spawn_children(parent, &names, batch)
        })?;

        for family in children {
            solutions.extend(family?);
        }

        Ok(capped)
    }

    /// Keep `max` of `total` planned children according to the overflow policy.
    fn select(&mut self, targets: Vec<Vec<Arc<str>>>, total: usize, max: usize) -> Vec<Vec<Arc<str>>> {
        let mut keep = vec![false; total];
        match self.config.overflow {
            OverflowPolicy::DropNewest => keep[..max].fill(true),
            OverflowPolicy::Sample => {
                for idx in rand::seq::index::sample(&mut self.rng, total, max).iter() {
                    keep[idx] = true;
                }
            }
        }

        let mut flat = keep.into_iter();
        targets
            .into_iter()
            .map(|names| {
                let mut kept = Vec::new();
                for name in names {
                    if flat.next().unwrap_or(false) {
                        kept.push(name);
                    }
                }
                kept
            })
            .collect()
    }

    /// Greedy placement, one unit at a time, optionally restricted to a floor.
    ///
    /// Returns the number of units placed.
    pub fn distribute_greedy(
        &mut self,
        solutions: &mut Vec<Solution>,
        rooms: &[Room],
        floor: Option<usize>,
    ) -> Result<usize> {
        let mut placed = 0;

        for &room in rooms {
            if solutions.is_empty() || self.expired() {
                break;
            }

            self.greedy_pass(solutions, room, floor)?;
            if solutions.is_empty() {
                break;
            }
            placed += 1;
        }

        Ok(placed)
    }

    fn greedy_pass(&mut self, solutions: &mut Vec<Solution>, room: Room, floor: Option<usize>) -> Result<()> {
        let climate = self.climate;
        let before = solutions.len();

        // Seeds are drawn up front so the result is independent of the worker count.
        let jobs: Vec<(Solution, u64)> = std::mem::take(solutions)
            .into_iter()
            .map(|solution| (solution, self.rng.gen()))
            .collect();

        let survivors = par_map(jobs, self.config.workers, |(mut solution, seed)| {
            let fitting = best_fit(&solution, climate, room.category, room.length, floor)?;
            let mut rng = StdRng::seed_from_u64(seed);
            let &idx = fitting.choose(&mut rng)?;
            solution.insert_at(idx, room).then_some(solution)
        })?;

        solutions.extend(survivors.into_iter().flatten());
        debug!(
            "Placed {} on {}: {} of {} candidates kept",
            room.category,
            floor.map_or_else(|| "any floor".to_string(), |f| format!("floor {f}")),
            solutions.len(),
            before
        );

        Ok(())
    }
}

/// Indices of the sides that fit `length` in the best non-empty tier,
/// optionally restricted to one floor.
pub(crate) fn best_fit(
    solution: &Solution,
    climate: Climate,
    category: RoomType,
    length: f64,
    floor: Option<usize>,
) -> Option<Vec<usize>> {
    let mut tiers: [Vec<usize>; TIER_COUNT] = Default::default();

    for (idx, side) in solution.sides().iter().enumerate() {
        if floor.is_some_and(|f| side.floor != f) || !side.can_fit(length) {
            continue;
        }
        tiers[tier(climate, category, side.facing)].push(idx);
    }

    tiers.into_iter().find(|t| !t.is_empty())
}

/// Names of the ground floor sides a batch may branch onto.
fn branch_targets(solution: &Solution, climate: Climate, category: RoomType, length: f64) -> Vec<Arc<str>> {
    best_fit(solution, climate, category, length, Some(0))
        .map(|fitting| {
            fitting
                .into_iter()
                .map(|idx| solution.sides()[idx].name.clone())
                .collect()
        })
        .unwrap_or_default()
}

/// One child per side name; the last child reuses the parent.
fn spawn_children(parent: Solution, names: &[Arc<str>], batch: &[Room]) -> Result<Vec<Solution>> {
    let Some((last, rest)) = names.split_last() else {
        return Ok(Vec::new());
    };

    let mut children = Vec::with_capacity(names.len());
    for name in rest {
        let mut child = parent.clone();
        place_batch(&mut child, name, batch)?;
        children.push(child);
    }

    let mut child = parent;
    place_batch(&mut child, last, batch)?;
    children.push(child);

    Ok(children)
}

/// Put unit `k` of the batch on floor `k` of the named side.
fn place_batch(solution: &mut Solution, name: &str, batch: &[Room]) -> Result<()> {
    for (floor, room) in batch.iter().enumerate() {
        let side = solution
            .side_mut(name, floor)
            .ok_or_else(|| LayoutError::SideNotFound {
                name: name.to_string(),
                floor,
            })?;

        if !side.insert(*room) {
            return Err(LayoutError::PlacementRejected {
                name: name.to_string(),
                floor,
                category: room.category,
            });
        }
    }
    Ok(())
}
