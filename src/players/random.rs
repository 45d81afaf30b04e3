//! Player that picks a uniformly random empty cell.

use super::{Player, PlayerError};
use crate::games::tictactoe::{Coordinate, Game};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Random move generator with a reproducible seed.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    name: String,
    seed: u64,
    rng: ChaCha8Rng,
}

impl RandomAgent {
    /// Creates a random agent. Without a seed one is drawn from the OS.
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            name: name.into(),
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the seed the generator started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Player for RandomAgent {
    #[instrument(skip_all, fields(player = %self.name, seed = self.seed))]
    fn make_move(&mut self, game: &Game) -> Result<Coordinate, PlayerError> {
        let candidates: Vec<Coordinate> = game.board().empty_cells().collect();
        let at = candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or(PlayerError::NoMoves)?;
        debug!(%at, candidates = candidates.len(), "Random agent chose cell");
        Ok(at)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
