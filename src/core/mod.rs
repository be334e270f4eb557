//! Core types: coordinates, players, configuration, actions, errors.
//!
//! Everything here is independent of the board and of god powers, except
//! that configuration names a [`God`](crate::gods::God) per player.

pub mod coord;
pub mod player;
pub mod config;
pub mod action;
pub mod error;

pub use coord::{Coord, BOARD_SIZE};
pub use player::{Player, PlayerId, PlayerMap, PLAYER_COUNT, WORKERS_PER_PLAYER};
pub use config::{GameConfig, Phase};
pub use action::{Action, ActionRecord, Intent};
pub use error::{
    CapacityViolation, CharacterRuleViolation, ConfigError, GameError, GeometryViolation,
    OccupancyViolation, PhaseViolation,
};
