//! Results across several games.

use derive_more::Display;
use gridtoe::{GameStatus, Player};
use serde::{Deserialize, Serialize};

/// Win and draw counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
#[display("O wins: {}, X wins: {}, draws: {}", o_wins, x_wins, draws)]
pub struct Tally {
    /// Games won by O.
    pub o_wins: usize,
    /// Games won by X.
    pub x_wins: usize,
    /// Drawn games.
    pub draws: usize,
}

impl Tally {
    /// Counts a finished game. Games still in progress are ignored.
    pub fn record(&mut self, status: &GameStatus) {
        match status.winner() {
            Some(Player::O) => self.o_wins += 1,
            Some(Player::X) => self.x_wins += 1,
            None if *status == GameStatus::Draw => self.draws += 1,
            None => {}
        }
    }

    /// Number of finished games counted.
    pub fn games(&self) -> usize {
        self.o_wins + self.x_wins + self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_ignores_unfinished() {
        let mut tally = Tally::default();
        tally.record(&GameStatus::InProgress);
        tally.record(&GameStatus::Draw);
        assert_eq!(tally.games(), 1);
        assert_eq!(tally.to_string(), "O wins: 0, X wins: 0, draws: 1");
    }
}
