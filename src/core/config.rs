//! Game configuration types.
//!
//! - `Phase`: where a turn currently stands
//! - `GameConfig`: which god each player plays
//!
//! A config is checked once when a game is created; an invalid config
//! never produces a game.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::{ConfigError, PlayerId, PlayerMap};
use crate::gods::God;

/// Turn phase.
///
/// The game starts in `Placement`. Once all four workers are down, turns
/// cycle `Move` then `Build`, with god powers allowed to hold a phase for
/// an extra action.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    #[default]
    Placement,
    Move,
    Build,
}

/// Configuration for a new game.
///
/// ## Example
///
/// ```
/// use santorini_rules::core::{GameConfig, PlayerId};
/// use santorini_rules::gods::God;
///
/// let config = GameConfig::new()
///     .with_god(PlayerId::A, God::Apollo)
///     .with_god(PlayerId::B, God::Minotaur);
/// assert!(config.validate().is_ok());
///
/// let config = GameConfig::from_names(Some("pan"), None).unwrap();
/// assert_eq!(config.god(PlayerId::A), God::Pan);
/// assert_eq!(config.god(PlayerId::B), God::Mortal);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// God played by each player. `God::Mortal` means no power.
    pub gods: PlayerMap<God>,
}

impl GameConfig {
    /// Both players without powers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the god for a player.
    #[must_use]
    pub fn with_god(mut self, player: PlayerId, god: God) -> Self {
        self.gods[player] = god;
        self
    }

    /// Build a config from optional god names.
    ///
    /// Names are matched case-insensitively. `None` and empty names mean no
    /// power. Unknown names are rejected.
    pub fn from_names(god_a: Option<&str>, god_b: Option<&str>) -> Result<Self, ConfigError> {
        let config = Self::new()
            .with_god(PlayerId::A, God::parse_optional(god_a)?)
            .with_god(PlayerId::B, God::parse_optional(god_b)?);
        config.validate()?;
        Ok(config)
    }

    /// The god a player plays.
    #[must_use]
    pub fn god(&self, player: PlayerId) -> God {
        self.gods[player]
    }

    /// Check the configuration.
    ///
    /// Both players may go without a power, but may not share a god.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (a, b) = (self.gods[PlayerId::A], self.gods[PlayerId::B]);
        if a == b && a != God::Mortal {
            return Err(ConfigError::DuplicateGod(a));
        }
        Ok(())
    }
}
