//! Headless battle runner.
//!
//! Loads a built-in or TOML scenario, advances it at a fixed step and
//! prints per-side headcounts until one side is left or the frame limit is
//! reached.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;

use skirmish_core::constants::DEFAULT_DT;
use skirmish_core::enums::Outcome;
use skirmish_core::state::{GameStateSnapshot, SideView};
use skirmish_sim::scenario::{Scenario, ScenarioId};

/// Headless Skirmish runner - scripted battles without a window
#[derive(Parser, Debug)]
#[command(name = "skirmish-runner")]
#[command(about = "Run a scripted unit battle and report the outcome")]
struct Args {
    /// Built-in scenario: skirmish or duel
    #[arg(long, default_value = "skirmish")]
    scenario: ScenarioId,

    /// Load the scenario from a TOML file instead
    #[arg(long)]
    file: Option<PathBuf>,

    /// Stop after this many frames even if the battle is undecided
    #[arg(long, default_value_t = 600)]
    max_frames: u64,

    /// Seconds per frame
    #[arg(long, default_value_t = DEFAULT_DT)]
    dt: f64,

    /// Print headcounts every N frames (0 disables)
    #[arg(long, default_value_t = 60)]
    report_every: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging of every attack
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON output structure
#[derive(Serialize)]
struct BattleSummary<'a> {
    scenario: &'a str,
    frames: u64,
    elapsed_secs: f64,
    outcome: Outcome,
    survivors: &'a [SideView],
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let scenario = match &args.file {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("loading scenario from {}", path.display()))?,
        None => Scenario::build(args.scenario),
    };
    tracing::info!(scenario = %scenario.name, units = scenario.units.len(), "starting battle");

    let mut engine = scenario.instantiate();
    tracing::debug!(
        collisions = engine.config().resolve_collisions,
        units = engine.roster().len(),
        "engine ready"
    );
    let mut snapshot = engine.snapshot();
    let mut frame = 0;
    while !engine.is_game_over() && frame < args.max_frames {
        snapshot = engine.advance(args.dt);
        frame += 1;
        let report_due = args.report_every > 0 && frame % args.report_every == 0;
        if args.format == OutputFormat::Text && report_due {
            println!("{}", status_line(frame, &snapshot));
        }
    }

    match args.format {
        OutputFormat::Text => {
            println!("{}", status_line(frame, &snapshot));
            println!("{}", describe(snapshot.outcome));
        }
        OutputFormat::Json => {
            let summary = BattleSummary {
                scenario: &scenario.name,
                frames: frame,
                elapsed_secs: snapshot.time.elapsed_secs,
                outcome: snapshot.outcome,
                survivors: &snapshot.sides,
            };
            let json = serde_json::to_string_pretty(&summary).context("encoding battle summary")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn status_line(frame: u64, snapshot: &GameStateSnapshot) -> String {
    let counts: Vec<String> = snapshot
        .sides
        .iter()
        .map(|s| format!("{}: {}", s.side, s.live_units))
        .collect();
    format!("frame {frame} - {}", counts.join(", "))
}

fn describe(outcome: Outcome) -> String {
    match outcome {
        Outcome::InProgress => "undecided at frame limit".to_string(),
        Outcome::Victory { side } => format!("{side} wins"),
        Outcome::Draw => "draw: no units left".to_string(),
    }
}
