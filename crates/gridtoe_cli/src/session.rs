//! Interactive terminal session.
//!
//! Reads one command per line, lets the computer reply on a blocking
//! worker, and redraws the board after every change.

use crate::settings::Settings;
use crate::tally::Tally;
use anyhow::{Context, Result};
use derive_more::Display;
use gridtoe::{GameState, Mode};
use std::io::Write;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "Commands: <cell number> | r (restart) | m <mode> (3x3, 5x5, 3x8) | h (help) | q (quit)";

/// One parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// 1-based cell number.
    Cell(usize),
    /// Start a new game in the same mode.
    Restart,
    /// Start a new game in another mode.
    Mode(Mode),
    /// Print the command summary.
    Help,
    /// Leave the session.
    Quit,
}

/// Input the session could not understand.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Blank line.
    #[display("Enter a cell number or a command (h for help)")]
    Empty,
    /// Cell number zero.
    #[display("Cells are numbered from 1")]
    ZeroCell,
    /// `m` without a recognizable mode.
    #[display("Unknown mode '{}'; try 3x3, 5x5 or 3x8", _0)]
    UnknownMode(String),
    /// Anything else.
    #[display("Unknown command '{}'", _0)]
    Unknown(String),
}

impl std::error::Error for InputError {}

/// Accepts either the kebab-case name or the short label.
pub fn parse_mode(text: &str) -> Option<Mode> {
    Mode::from_str(text)
        .ok()
        .or_else(|| Mode::iter().find(|mode| mode.label() == text))
}

/// Parses one line of player input.
pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let line = line.trim().to_lowercase();
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(InputError::Empty);
    };

    match head {
        "q" | "quit" | "exit" => Ok(Input::Quit),
        "r" | "restart" => Ok(Input::Restart),
        "h" | "help" | "?" => Ok(Input::Help),
        "m" | "mode" => {
            let name = words.next().unwrap_or_default();
            parse_mode(name)
                .map(Input::Mode)
                .ok_or_else(|| InputError::UnknownMode(name.to_string()))
        }
        _ => match head.parse::<usize>() {
            Ok(0) => Err(InputError::ZeroCell),
            Ok(cell) => Ok(Input::Cell(cell)),
            Err(_) => Err(InputError::Unknown(head.to_string())),
        },
    }
}

/// Writes the board, the marks and the status line.
pub fn render(game: &GameState, out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", game.board().display_highlighted(game.status().line()))?;
    writeln!(
        out,
        "[{}] you: {}  computer: {}",
        game.mode().label(),
        game.human(),
        game.ai()
    )?;
    writeln!(out, "{}", game.status_message())?;
    Ok(())
}

/// Lets the computer move on a blocking worker if it is its turn.
#[instrument(skip(game), fields(mode = %game.mode()))]
async fn computer_turn(game: &mut GameState) -> Result<Option<usize>> {
    if !game.is_ai_turn() {
        return Ok(None);
    }

    let snapshot = game.clone();
    let index = tokio::task::spawn_blocking(move || snapshot.suggest_move())
        .await
        .context("Search task failed")?;

    let Some(index) = index else {
        warn!("Search found no move on a live board");
        return Ok(None);
    };
    game.play(index)?;
    info!(index, "Computer moved");
    Ok(Some(index))
}

/// Runs a session until `q` or end of input, returning the finished games.
#[instrument(skip_all, fields(mode = %settings.mode(), ai = settings.ai()))]
pub async fn run<R, W>(settings: &Settings, input: R, out: &mut W) -> Result<Tally>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut tally = Tally::default();
    let mut game = GameState::with_mark(*settings.mode(), *settings.human());
    let mut recorded = false;
    let mut lines = input.lines();

    writeln!(out, "{}", HELP)?;

    loop {
        if *settings.ai() {
            if let Some(index) = computer_turn(&mut game).await? {
                writeln!(out, "Computer plays {}", index + 1)?;
            }
        }

        if !game.is_active() && !recorded {
            tally.record(game.status());
            recorded = true;
        }

        render(&game, out)?;
        out.flush()?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            debug!("Input closed");
            break;
        };

        match parse_input(&line) {
            Ok(Input::Quit) => break,
            Ok(Input::Help) => writeln!(out, "{}", HELP)?,
            Ok(Input::Restart) => {
                game = GameState::with_mark(game.mode(), *settings.human());
                recorded = false;
            }
            Ok(Input::Mode(mode)) => {
                game = GameState::with_mark(mode, *settings.human());
                recorded = false;
            }
            Ok(Input::Cell(cell)) => {
                if let Err(e) = game.play(cell - 1) {
                    debug!(cell, error = %e, "Move rejected");
                    writeln!(out, "{}", e)?;
                }
            }
            Err(e) => writeln!(out, "{}", e)?,
        }
    }

    info!(%tally, "Session finished");
    Ok(tally)
}
