//! Configuration constants and settings for the layout solver.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Minimum corridor fragment length, also the corner separation distance
/// applied to conflicting sides.
pub const PULL_DISTANCE: f64 = 2.0;

/// Points closer than this to a segment endpoint count as that endpoint.
pub const COINCIDENT_DISTANCE: f64 = 0.1;

/// cos(22.5°): upper bucket boundary between FLAT and RIGHT.
pub const TILT_COS_NARROW: f64 = 0.923_879_532_51;

/// cos(67.5°): bucket boundary between RIGHT and PERPENDICULAR.
pub const TILT_COS_WIDE: f64 = 0.382_683_432_36;

/// Default cap on live candidate solutions during exhaustive branching.
pub const DEFAULT_MAX_CANDIDATES: usize = 50_000;

/// Default number of ranked solutions handed back to the caller.
pub const DEFAULT_KEEP: usize = 50;

/// Side of the square viewport front ends draw into.
pub const VIEWPORT_DIMENSION: f64 = 400.0;

/// Margin kept free around the drawing inside the viewport.
pub const VIEWPORT_BORDER: f64 = 10.0;

/// Below this many solutions a pass runs on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 64;

/// What to do when exhaustive branching would exceed the candidate cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverflowPolicy {
    /// Keep the earliest children up to the cap and stop branching for the
    /// rest of the category. Remaining units are reported undistributed.
    #[default]
    DropNewest,
    /// Keep a uniform random sample of the children and keep branching.
    Sample,
}

impl std::fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverflowPolicy::DropNewest => write!(f, "drop-newest"),
            OverflowPolicy::Sample => write!(f, "sample"),
        }
    }
}

/// Solver configuration.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Cap on live candidates during branching (`None` = unbounded).
    pub max_candidates: Option<usize>,
    /// Policy applied when the cap is hit.
    pub overflow: OverflowPolicy,
    /// Seed for tie-breaking (`None` = seeded from entropy).
    pub seed: Option<u64>,
    /// Wall-clock budget, checked at every pass boundary.
    pub time_limit: Option<Duration>,
    /// Worker threads for per-solution passes.
    pub workers: usize,
    /// Fail instead of warning when the corridors have no junction.
    pub strict_circulation: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_candidates: Some(DEFAULT_MAX_CANDIDATES),
            overflow: OverflowPolicy::DropNewest,
            seed: None,
            time_limit: None,
            workers: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            strict_circulation: false,
        }
    }
}

impl SolverConfig {
    /// Create a deterministic configuration with the given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Check whether `count` planned candidates exceed the configured cap.
    pub fn over_capacity(&self, count: usize) -> bool {
        self.max_candidates.is_some_and(|max| count > max)
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Round to one decimal place, the precision used for point equality.
    #[inline]
    pub fn round1(a: f64) -> f64 {
        (a * 10.0).round() / 10.0
    }

    /// Round to two decimal places, the precision used for slope comparison.
    #[inline]
    pub fn round2(a: f64) -> f64 {
        (a * 100.0).round() / 100.0
    }

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }
}
