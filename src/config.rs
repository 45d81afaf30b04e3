//! Game configuration loaded from TOML.
//!
//! ```toml
//! seed = 7
//!
//! [x]
//! kind = "human"
//! name = "Alice"
//!
//! [o]
//! kind = "minimax"
//! ```

use crate::games::tictactoe::Mark;
use crate::players::PlayerKind;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for one side of the board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct SideConfig {
    /// Who controls this side.
    #[serde(default)]
    kind: PlayerKind,

    /// Display name; derived from the kind when absent.
    #[serde(default)]
    name: Option<String>,
}

/// Configuration for a game session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// The X side (moves first).
    #[serde(default)]
    x: SideConfig,

    /// The O side.
    #[serde(default)]
    o: SideConfig,

    /// Seed for random agents.
    #[serde(default)]
    seed: Option<u64>,
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(x = %config.x.kind, o = %config.o.kind, "Config loaded successfully");
        Ok(config)
    }

    /// Returns the settings for `mark`.
    pub fn side(&self, mark: Mark) -> &SideConfig {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Replaces the settings for `mark`.
    pub fn with_side(self, mark: Mark, side: SideConfig) -> Self {
        match mark {
            Mark::X => self.with_x(side),
            Mark::O => self.with_o(side),
        }
    }

    /// Configured name for `mark`, or the kind's default name.
    pub fn display_name(&self, mark: Mark) -> String {
        let side = self.side(mark);
        side.name.clone().unwrap_or_else(|| side.kind.default_name(mark))
    }

    /// Applies command-line overrides on top of the loaded settings.
    ///
    /// Each `Some` replaces the matching field; `None` keeps what was loaded.
    #[instrument(skip(self))]
    pub fn with_overrides(
        self,
        x: Option<PlayerKind>,
        x_name: Option<String>,
        o: Option<PlayerKind>,
        o_name: Option<String>,
        seed: Option<u64>,
    ) -> Self {
        let mut config = self
            .override_side(Mark::X, x, x_name)
            .override_side(Mark::O, o, o_name);
        if seed.is_some() {
            config = config.with_seed(seed);
        }
        debug!(x = %config.x.kind, o = %config.o.kind, seed = ?config.seed, "Overrides applied");
        config
    }

    fn override_side(self, mark: Mark, kind: Option<PlayerKind>, name: Option<String>) -> Self {
        let mut side = self.side(mark).clone();
        if let Some(kind) = kind {
            side = side.with_kind(kind);
        }
        if name.is_some() {
            side = side.with_name(name);
        }
        self.with_side(mark, side)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
