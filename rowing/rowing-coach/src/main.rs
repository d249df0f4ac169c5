//! Rowing stroke pose coach.
//!
//! Reads pose detector payloads (`{"landmarks": {...}}`), evaluates the
//! rowing stroke, and prints a coaching report.
//!
//! # Usage
//!
//! - `rowing-coach` - Paste one payload on stdin, finish with an empty line
//! - `rowing-coach catch.json drive.json` - Evaluate files in parallel
//! - `rowing-coach --format json pose.json` - Machine-readable output
//! - `rowing-coach --ranges masters.json pose.json` - Override reference ranges
//!
//! Logging goes to stderr; set `ROWING_LOG` (e.g. `ROWING_LOG=debug`) or pass
//! `-v`/`-vv` to see more.

mod input;
mod logging;
mod render;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use rowing_feedback::{CoachingReport, ReferenceRanges, evaluate};
use rowing_types::{PoseResult, parse_payload};
use tracing::{debug, info};

use crate::input::Source;

/// Rowing stroke pose coach
///
/// Evaluates joint angles of a captured pose against rowing reference ranges.
#[derive(Parser)]
#[command(name = "rowing-coach")]
#[command(about = "Coaching feedback for a captured rowing pose", long_about = None)]
#[command(version)]
struct Cli {
    /// Pose payload files; reads stdin when none are given
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Pretty)]
    format: Format,

    /// JSON file overriding the reference ranges
    #[arg(long)]
    ranges: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Human-readable report
    Pretty,
    /// JSON report
    Json,
}

/// One evaluated payload.
struct Outcome {
    source: String,
    result: PoseResult<CoachingReport>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ranges = load_ranges(cli.ranges.as_deref())?;

    let sources = if cli.files.is_empty() {
        vec![input::read_stdin()?]
    } else {
        cli.files
            .iter()
            .map(|path| input::read_file(path))
            .collect::<Result<Vec<_>>>()?
    };
    info!(payloads = sources.len(), "evaluating poses");

    let outcomes = evaluate_all(&sources, &ranges);

    match cli.format {
        Format::Pretty => {
            let labelled = outcomes.len() > 1;
            for outcome in &outcomes {
                let text = render::pretty(outcome, labelled);
                if outcome.result.is_ok() {
                    print!("{text}");
                } else {
                    eprint!("{text}");
                }
            }
        }
        Format::Json => {
            let json = render::json(&outcomes)?;
            println!("{json}");
        }
    }

    let rejected = outcomes
        .iter()
        .filter(|o| o.result.as_ref().is_err_and(|e| !e.is_no_human()))
        .count();
    if rejected > 0 {
        debug!(rejected, "some payloads were rejected");
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn load_ranges(path: Option<&Path>) -> Result<ReferenceRanges> {
    let Some(path) = path else {
        return Ok(ReferenceRanges::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read reference ranges from {}", path.display()))?;
    let ranges = ReferenceRanges::from_json(&text)
        .with_context(|| format!("invalid reference ranges in {}", path.display()))?;
    info!(path = %path.display(), "loaded reference ranges");
    Ok(ranges)
}

/// Evaluate every source in parallel, keeping input order.
fn evaluate_all(sources: &[Source], ranges: &ReferenceRanges) -> Vec<Outcome> {
    sources
        .par_iter()
        .map(|source| Outcome {
            source: source.name.clone(),
            result: parse_payload(&source.text).and_then(|map| evaluate(&map, ranges)),
        })
        .collect()
}
