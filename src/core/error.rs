//! Rule violations.
//!
//! Every rejected operation reports exactly one of these. The categories
//! tell callers *why* a request was refused:
//!
//! - [`PhaseViolation`]: wrong time (phase, ended game, locked worker)
//! - [`GeometryViolation`]: wrong place (bounds, adjacency, climb height)
//! - [`OccupancyViolation`]: target cell is taken
//! - [`CharacterRuleViolation`]: a god-specific restriction
//! - [`CapacityViolation`]: worker count or worker index problems
//! - [`ConfigError`]: bad game setup
//!
//! A rejected operation never changes game state.

use thiserror::Error;

use crate::board::WorkerId;
use crate::core::{Coord, Intent, Phase, PlayerId};
use crate::gods::God;

/// Operation attempted at the wrong time.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PhaseViolation {
    #[error("the game has ended")]
    GameEnded,

    #[error("expected the {expected} phase but the game is in the {actual} phase")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("no worker has been chosen this turn")]
    NoWorkerSelected,

    #[error("{selected} is acting this turn, {requested} cannot be used")]
    WorkerLocked {
        selected: WorkerId,
        requested: WorkerId,
    },

    #[error("nothing optional is pending in the {phase} phase")]
    NothingToSkip { phase: Phase },
}

/// Target cell is in the wrong place.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GeometryViolation {
    #[error("{0} is off the board")]
    OutOfBounds(Coord),

    #[error("{to} is not adjacent to {from}")]
    NotAdjacent { from: Coord, to: Coord },

    #[error("cannot climb from level {from} to level {to}")]
    TooHigh { from: u8, to: u8 },

    #[error("the pushed worker would leave the board at {0}")]
    PushOutOfBounds(Coord),
}

/// Target cell is taken.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OccupancyViolation {
    #[error("{0} holds a worker")]
    Occupied(Coord),

    #[error("{0} holds one of your own workers")]
    OwnWorker(Coord),

    #[error("{0} is capped by a dome")]
    Dome(Coord),

    #[error("no worker stands on {0}")]
    NoWorker(Coord),

    #[error("cannot push a worker onto {0}")]
    PushBlocked(Coord),
}

/// A god-specific restriction was broken.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CharacterRuleViolation {
    #[error("{god} cannot return to the starting cell {at}")]
    ReturnToStart { god: God, at: Coord },

    #[error("{god} must make the second build somewhere other than {first}")]
    SameCellRebuild { god: God, first: Coord },

    #[error("{god} must make the extra build on {first}")]
    ExtraBuildElsewhere { god: God, first: Coord },

    #[error("{god} cannot place a dome with the extra build")]
    ExtraBuildDome { god: God },

    #[error("{god} may only keep moving between cells of the same level")]
    NotLevel { god: God },

    #[error("{god} has no further action of this kind this turn")]
    ExtraActionSpent { god: God },

    #[error("moving up is forbidden this turn: {reason}")]
    ClimbForbidden { reason: &'static str },

    #[error("{god} has no power to declare {intent}")]
    UnsupportedIntent { god: God, intent: Intent },

    #[error("{god} cannot declare {intent} now: {reason}")]
    IntentUnavailable {
        god: God,
        intent: Intent,
        reason: &'static str,
    },
}

/// Worker count or lookup problem.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CapacityViolation {
    #[error("{player} has already placed {max} workers")]
    WorkersExhausted { player: PlayerId, max: usize },

    #[error("{player} has no worker with index {index}")]
    NoSuchWorker { player: PlayerId, index: usize },

    #[error("{0} is not on the board")]
    UnknownWorker(WorkerId),
}

/// Bad game setup.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown god \"{0}\"")]
    UnknownGod(String),

    #[error("both players cannot play {0}")]
    DuplicateGod(God),

    #[error("no player with index {0}")]
    UnknownPlayer(u8),
}

/// Any rejected game operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Phase(#[from] PhaseViolation),

    #[error(transparent)]
    Geometry(#[from] GeometryViolation),

    #[error(transparent)]
    Occupancy(#[from] OccupancyViolation),

    #[error(transparent)]
    CharacterRule(#[from] CharacterRuleViolation),

    #[error(transparent)]
    Capacity(#[from] CapacityViolation),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
