//! archsolve - CLI tool to generate school floor layouts from a JSON request.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use archsolve_core::config::{DEFAULT_KEEP, DEFAULT_MAX_CANDIDATES, VIEWPORT_BORDER, VIEWPORT_DIMENSION};
use archsolve_core::{solve_validated, validate_input, LayoutInput, OverflowPolicy, SolverConfig};

/// Policy applied when branching exceeds the candidate cap.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Overflow {
    /// Keep the earliest candidates and stop branching the category
    DropNewest,
    /// Keep a random sample and continue
    Sample,
}

impl From<Overflow> for OverflowPolicy {
    fn from(value: Overflow) -> Self {
        match value {
            Overflow::DropNewest => OverflowPolicy::DropNewest,
            Overflow::Sample => OverflowPolicy::Sample,
        }
    }
}

/// Assign school rooms to corridor sides, preferring climate-suited facings.
#[derive(Parser, Debug)]
#[command(name = "archsolve")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input JSON request path
    #[arg(short, long)]
    input: PathBuf,

    /// Output JSON path (defaults to the input with a .solutions.json extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed for random tie-breaking
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of ranked solutions to keep
    #[arg(short, long, default_value_t = DEFAULT_KEEP)]
    keep: usize,

    /// Cap on live candidates during branching
    #[arg(long, default_value_t = DEFAULT_MAX_CANDIDATES, conflicts_with = "unbounded")]
    max_candidates: usize,

    /// Disable the candidate cap
    #[arg(long)]
    unbounded: bool,

    /// What to do when the cap is hit
    #[arg(long, value_enum, default_value = "drop-newest")]
    overflow: Overflow,

    /// Time limit in seconds
    #[arg(long)]
    time_limit: Option<u64>,

    /// Worker threads (defaults to available cores)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Fail when the corridors never meet
    #[arg(long)]
    strict_circulation: bool,

    /// Scale shapes into a square drawing viewport
    #[arg(long)]
    viewport: bool,

    /// Validate only, don't solve
    #[arg(long)]
    validate: bool,

    /// Output the parsed request as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn solver_config(&self) -> SolverConfig {
        let mut config = SolverConfig {
            max_candidates: (!self.unbounded).then_some(self.max_candidates),
            overflow: self.overflow.into(),
            seed: self.seed,
            time_limit: self.time_limit.map(Duration::from_secs),
            strict_circulation: self.strict_circulation,
            ..Default::default()
        };
        if let Some(workers) = self.workers {
            config.workers = workers.max(1);
        }
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Processing: {}", args.input.display());

    let json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let input = LayoutInput::from_json_str(&json)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    info!(
        "Parsed {} corridor(s), {} room(s) over {} floor(s), climate {}",
        input.corridors.len(),
        input.room_count(),
        input.floor_count,
        input.climate
    );

    // Debug output
    if args.debug {
        let json = serde_json::to_string_pretty(&input)?;
        println!("{}", json);
        return Ok(());
    }

    // Validate
    let validation = validate_input(&input)?;

    for err in &validation.errors {
        error!("{}", err);
    }
    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let config = args.solver_config();
    info!(
        "Solving with cap {:?} ({}), {} worker(s)",
        config.max_candidates, config.overflow, config.workers
    );

    let mut result = solve_validated(&input, config, args.keep, validation.warnings)
        .with_context(|| format!("Failed to solve {}", args.input.display()))?;

    if args.viewport {
        for solution in &mut result.solutions {
            solution.fit_to_viewport(VIEWPORT_DIMENSION, VIEWPORT_BORDER);
        }
    }

    if let Some(best) = result.solutions.first() {
        info!(
            "Best score: {}",
            best.score
                .map_or_else(|| "n/a".to_string(), |s| format!("{:.1}", s))
        );
    }

    // Write output
    let output_path = args.output.unwrap_or_else(|| {
        let mut path = args.input.clone();
        path.set_extension("solutions.json");
        path
    });

    std::fs::write(&output_path, result.to_json()?)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!(
        "Generated: {} ({} solution(s))",
        output_path.display(),
        result.solutions.len()
    );

    Ok(())
}
