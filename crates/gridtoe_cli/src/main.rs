//! gridtoe - terminal tic-tac-toe against a minimax opponent.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use gridtoe::{HumanMark, Mode, RuleSet};
use gridtoe_cli::{Cli, Command, Settings, self_play, session};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            mode,
            human,
            no_ai,
            settings,
        } => run_play(mode, human, no_ai, settings).await,
        Command::SelfPlay { mode, games, seed } => run_self_play(mode, games, seed).await,
        Command::Lines { mode, json } => run_lines(mode, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
async fn run_play(
    mode: Option<Mode>,
    human: Option<HumanMark>,
    no_ai: bool,
    settings: Option<PathBuf>,
) -> Result<()> {
    let settings = Settings::load(settings.as_deref())
        .context("Failed to load settings")?
        .with_overrides(mode, human, no_ai);

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();
    let tally = session::run(&settings, input, &mut out).await?;

    if tally.games() > 0 {
        println!("{}", tally);
    }
    Ok(())
}

/// Run computer-versus-computer games off the async runtime
#[instrument]
async fn run_self_play(mode: Mode, games: usize, seed: Option<u64>) -> Result<()> {
    info!("Starting self-play");
    let tally = tokio::task::spawn_blocking(move || self_play::run(mode, games, seed))
        .await
        .context("Self-play task failed")?;
    println!("[{}] {} games: {}", mode.label(), tally.games(), tally);
    Ok(())
}

/// Print the winning lines for a mode
#[instrument]
fn run_lines(mode: Mode, json: bool) -> Result<()> {
    let rules = RuleSet::new(mode.config());

    if json {
        println!("{}", serde_json::to_string_pretty(rules.lines())?);
        return Ok(());
    }

    println!("[{}] {} winning lines", mode.label(), rules.lines().len());
    for (number, line) in rules.lines().iter().enumerate() {
        let cells: Vec<String> = line.indices().iter().map(|i| (i + 1).to_string()).collect();
        println!("{:>3}: {}", number + 1, cells.join(" "));
    }
    Ok(())
}
