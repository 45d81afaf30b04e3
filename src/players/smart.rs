//! Placeholder for a heuristic player.

use super::{Player, PlayerError};
use crate::games::tictactoe::{Coordinate, Game};
use tracing::warn;

/// Player without a strategy; every request fails.
#[derive(Debug, Clone)]
pub struct SmartAgent {
    name: String,
}

impl SmartAgent {
    /// Creates the placeholder.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for SmartAgent {
    fn make_move(&mut self, _game: &Game) -> Result<Coordinate, PlayerError> {
        warn!(player = %self.name, "Smart agent has no strategy");
        Err(PlayerError::Unimplemented {
            agent: self.name.clone(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
