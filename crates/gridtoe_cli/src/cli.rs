//! Command-line interface for gridtoe.

use clap::{Parser, Subcommand};
use gridtoe::{HumanMark, Mode};

/// gridtoe - tic-tac-toe on 3x3, 5x5 and 3x8 boards against the computer
#[derive(Parser, Debug)]
#[command(name = "gridtoe")]
#[command(about = "Variable-board tic-tac-toe with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Board mode (three-by-three, five-by-five, three-by-eight)
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Mark the human plays (o, x, random)
        #[arg(long)]
        human: Option<HumanMark>,

        /// Two humans share the keyboard; the computer never moves
        #[arg(long)]
        no_ai: bool,

        /// Path to a TOML settings file
        #[arg(short, long)]
        settings: Option<std::path::PathBuf>,
    },

    /// Let the computer play itself and report the results
    SelfPlay {
        /// Board mode
        #[arg(short, long, default_value = "three-by-three")]
        mode: Mode,

        /// Number of games
        #[arg(short, long, default_value = "10")]
        games: usize,

        /// Seed for the random opening move
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the winning lines for a mode
    Lines {
        /// Board mode
        #[arg(short, long, default_value = "three-by-three")]
        mode: Mode,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
