//! Game orchestration between players.

use crate::games::tictactoe::{Game, Mark, Phase};
use crate::players::Player;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// Runs one game between two players, rendering it as text.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates an orchestrator for `game`.
    pub fn new(game: Game, player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            game,
            player_x,
            player_o,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays until the game ends and returns the terminal phase.
    ///
    /// Moves the engine rejects are reported on `out` and the same side is
    /// asked again. A player that cannot produce a move ends the run with
    /// an error.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Phase> {
        if self.game.phase() == Phase::NotStarted {
            self.game.start()?;
        }
        info!("Starting game orchestration");

        while self.game.phase() == Phase::InProgress {
            write!(out, "{}", self.game.board())?;
            if let Some(name) = self.game.current_player_name() {
                writeln!(out, "Current player: {name}")?;
            }

            let player = match self.game.to_move() {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            debug!(player = %player.name(), "Waiting for move");
            let at = player
                .make_move(&self.game)
                .with_context(|| format!("{} failed to move", player.name()))?;

            match self.game.play(at.row, at.col) {
                Ok(phase) => debug!(%at, %phase, "Move accepted"),
                Err(e) => {
                    warn!(%at, error = %e, "Move rejected");
                    writeln!(out, "{e}")?;
                }
            }
        }

        write!(out, "{}", self.game.board())?;
        if let Some(result) = self.game.result() {
            writeln!(out, "{result}")?;
        }
        info!(phase = %self.game.phase(), "Game over");
        Ok(self.game.phase())
    }
}
