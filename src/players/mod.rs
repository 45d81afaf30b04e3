//! Player trait and implementations.
//!
//! The engine never asks where a move comes from. A driver holds one
//! [`Player`] per mark and calls [`Player::make_move`] whenever that mark is
//! to move.

mod human;
mod minimax;
mod random;
mod smart;

pub use human::{HumanPlayer, LineSource, ask_name};
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
pub use smart::SmartAgent;

use crate::games::tictactoe::{BoardError, Coordinate, Game, Mark};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Trait for anything that can choose a move.
pub trait Player {
    /// Chooses a coordinate for the side to move.
    ///
    /// Only called while `game` is in progress.
    fn make_move(&mut self, game: &Game) -> Result<Coordinate, PlayerError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Failure to produce a move.
#[derive(Debug, Display, Error, From)]
pub enum PlayerError {
    /// The board has no empty cell.
    #[display("No empty cell left to move into")]
    NoMoves,

    /// The player has no strategy.
    #[display("{agent} cannot choose a move: strategy not implemented")]
    Unimplemented {
        /// Name of the player.
        agent: String,
    },

    /// Input ended before a move was entered.
    #[display("Input closed before a move was entered")]
    InputClosed,

    /// The search board rejected a placement.
    #[display("Board rejected a placement: {_0}")]
    #[from]
    Board(BoardError),

    /// Reading input or writing a prompt failed.
    #[display("I/O error: {_0}")]
    #[from]
    Io(std::io::Error),
}

/// Which kind of player controls a side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PlayerKind {
    /// Moves typed on the console.
    #[default]
    Human,
    /// Uniformly random empty cell.
    Random,
    /// Exhaustive minimax search.
    Minimax,
    /// Placeholder without a strategy.
    Smart,
}

impl PlayerKind {
    /// Returns true for the computer-controlled kinds.
    pub fn is_automated(self) -> bool {
        !matches!(self, PlayerKind::Human)
    }

    /// Name used when none is configured.
    pub fn default_name(self, mark: Mark) -> String {
        if self.is_automated() {
            format!("AI {mark}")
        } else {
            format!("Player {mark}")
        }
    }
}

/// Builds a boxed player of the given kind.
///
/// Human players read from stdin and prompt on stdout. `seed` only affects
/// [`RandomAgent`].
#[instrument(skip(name), fields(name = %name.as_ref()))]
pub fn build_player(
    kind: PlayerKind,
    name: impl AsRef<str>,
    mark: Mark,
    seed: Option<u64>,
) -> Box<dyn Player> {
    let name = name.as_ref().to_string();
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::stdio(name)),
        PlayerKind::Random => {
            let agent = RandomAgent::new(name, seed);
            info!(%mark, seed = agent.seed(), "Random agent seeded");
            Box::new(agent)
        }
        PlayerKind::Minimax => Box::new(MinimaxAgent::new(name, mark)),
        PlayerKind::Smart => Box::new(SmartAgent::new(name)),
    }
}
