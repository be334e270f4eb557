//! # santorini-rules
//!
//! Rules engine for a two-player, Santorini-style building game on a 5x5
//! board, with optional god powers that bend the standard rules.
//!
//! ## Design Principles
//!
//! 1. **Rules behind one trait**: Every god implements [`GodPower`]. Default
//!    methods apply the standard rules, so each god overrides only what its
//!    power changes.
//!
//! 2. **Reject, don't corrupt**: A rejected operation returns a categorized
//!    [`GameError`] and leaves the game exactly as it was.
//!
//! 3. **Selectable means legal**: The selectable-cell queries and the
//!    operations share one set of checks, so a highlighted cell is always
//!    accepted.
//!
//! ## Modules
//!
//! - `core`: Coordinates, players, configuration, actions, errors
//! - `board`: Heights, domes, and worker positions
//! - `gods`: The `GodPower` trait, the standard rules, and ten gods
//! - `game`: Shared state, the turn loop, display snapshots
//! - `session`: A resettable game slot returning views
//!
//! ## Example
//!
//! ```
//! use santorini_rules::{Coord, Game, God, Phase};
//!
//! let mut game = Game::with_gods(God::Artemis, God::Minotaur).unwrap();
//! for (x, y) in [(0, 0), (4, 4), (0, 4), (4, 0)] {
//!     game.place_worker(Coord::new(x, y)).unwrap();
//! }
//! assert_eq!(game.state().phase(), Phase::Move);
//!
//! game.move_worker(0, Coord::new(1, 1)).unwrap();
//! // Artemis may move again or skip to building.
//! assert_eq!(game.state().phase(), Phase::Move);
//! game.end_turn().unwrap();
//! assert_eq!(game.state().phase(), Phase::Build);
//! ```

pub mod core;
pub mod board;
pub mod gods;
pub mod game;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Coord, GameConfig, Intent, Phase, Player, PlayerId, PlayerMap,
    BOARD_SIZE,
};

pub use crate::core::{
    CapacityViolation, CharacterRuleViolation, ConfigError, GameError, GeometryViolation,
    OccupancyViolation, PhaseViolation,
};

pub use crate::board::{Board, Worker, WorkerId, DOME, WINNING_HEIGHT};

pub use crate::gods::{God, GodPower, Power, Transition};

pub use crate::game::{CellView, Game, GameState, GameStateView, WorkerView};

pub use crate::session::Session;
