//! Terminal front end for gridtoe.
//!
//! Owns everything the engine deliberately leaves out: settings, the
//! interactive loop, and computer-versus-computer matches.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod self_play;
pub mod session;
pub mod settings;
pub mod tally;

pub use cli::{Cli, Command};
pub use session::{Input, InputError, parse_input, parse_mode};
pub use settings::Settings;
pub use tally::Tally;
