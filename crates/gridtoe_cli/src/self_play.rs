//! Computer-versus-computer matches.

use crate::tally::Tally;
use gridtoe::{GameState, Mode, Player};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// Plays `games` games where both sides use the search.
///
/// The first move of each game is random so the matches differ; every
/// later move is the search's choice for the side on turn.
#[instrument]
pub fn run(mode: Mode, games: usize, seed: Option<u64>) -> Tally {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut tally = Tally::default();
    for game_number in 0..games {
        let game = play_one(mode, &mut rng);
        debug!(game_number, status = ?game.status(), moves = game.history().len(), "Game finished");
        tally.record(game.status());
    }

    info!(%tally, "Self-play finished");
    tally
}

/// Plays a single game to completion.
fn play_one<R: Rng>(mode: Mode, rng: &mut R) -> GameState {
    let mut game = GameState::new(mode, Player::O);

    let opening = rng.gen_range(0..game.board().cell_count());
    if game.play(opening).is_err() {
        return game;
    }

    while let Some(index) = game.suggest_move() {
        if game.play(index).is_err() {
            break;
        }
    }
    game
}
