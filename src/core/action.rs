//! Actions and action history.
//!
//! ## Action
//!
//! One request a player can make of the game. Actions are serializable with
//! an `actionType` tag so that a front end can post them directly:
//!
//! ```
//! use santorini_rules::core::Action;
//!
//! let action: Action =
//!     serde_json::from_str(r#"{"actionType":"move","workerIndex":1,"x":2,"y":3}"#).unwrap();
//! assert_eq!(action, Action::Move { worker_index: 1, x: 2, y: 3 });
//! ```
//!
//! ## Intent
//!
//! An announced use of an optional god power, made before the action it
//! changes. See [`crate::gods::GodPower::declare`].
//!
//! ## ActionRecord
//!
//! Accepted actions are recorded with the acting player, turn number, and a
//! sequence number, forming the game's history.

use serde::{Deserialize, Serialize};
use strum::Display;

use super::{Coord, PlayerId};

/// An optional power a player announces before using it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Intent {
    /// Atlas: the next build this turn places a dome at any level.
    #[strum(to_string = "a dome build")]
    DomeBuild,

    /// Prometheus: the given worker builds before it moves, then may not
    /// move up this turn.
    #[strum(to_string = "a build before moving")]
    BuildBeforeMove { worker_index: usize },

    /// Hermes: the given worker skips the move phase and goes straight to
    /// building.
    #[strum(to_string = "a build without moving")]
    StayInPlace { worker_index: usize },
}

impl Intent {
    /// The worker an intent commits to, if it names one.
    #[must_use]
    pub fn worker_index(self) -> Option<usize> {
        match self {
            Intent::DomeBuild => None,
            Intent::BuildBeforeMove { worker_index } | Intent::StayInPlace { worker_index } => {
                Some(worker_index)
            }
        }
    }
}

/// A player request.
///
/// Worker indices refer to the current player's workers in placement order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "actionType", rename_all = "camelCase")]
pub enum Action {
    PlaceWorker {
        x: i32,
        y: i32,
    },
    Move {
        #[serde(rename = "workerIndex")]
        worker_index: usize,
        x: i32,
        y: i32,
    },
    Build {
        x: i32,
        y: i32,
    },
    /// Decline the optional action the current phase is holding for.
    EndTurn,
    /// Declare [`Intent::DomeBuild`].
    DomeBuild,
    /// Declare [`Intent::BuildBeforeMove`].
    BuildBeforeMove {
        #[serde(rename = "workerIndex")]
        worker_index: usize,
    },
    /// Declare [`Intent::StayInPlace`].
    StayInPlace {
        #[serde(rename = "workerIndex")]
        worker_index: usize,
    },
}

impl Action {
    /// Target cell, for actions that have one.
    #[must_use]
    pub fn target(&self) -> Option<Coord> {
        match *self {
            Action::PlaceWorker { x, y } | Action::Move { x, y, .. } | Action::Build { x, y } => {
                Some(Coord::new(x, y))
            }
            Action::EndTurn
            | Action::DomeBuild
            | Action::BuildBeforeMove { .. }
            | Action::StayInPlace { .. } => None,
        }
    }
}

impl From<Intent> for Action {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::DomeBuild => Action::DomeBuild,
            Intent::BuildBeforeMove { worker_index } => Action::BuildBeforeMove { worker_index },
            Intent::StayInPlace { worker_index } => Action::StayInPlace { worker_index },
        }
    }
}

/// Record of an accepted action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken. Placement happens on turn 0.
    pub turn: u32,

    /// Position in the game's overall action order.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_json_shape() {
        let json = serde_json::to_string(&Action::PlaceWorker { x: 1, y: 4 }).unwrap();
        assert_eq!(json, r#"{"actionType":"placeWorker","x":1,"y":4}"#);

        let json = serde_json::to_string(&Action::EndTurn).unwrap();
        assert_eq!(json, r#"{"actionType":"endTurn"}"#);

        let json = serde_json::to_string(&Action::BuildBeforeMove { worker_index: 0 }).unwrap();
        assert_eq!(json, r#"{"actionType":"buildBeforeMove","workerIndex":0}"#);

        let action: Action =
            serde_json::from_str(r#"{"actionType":"stayInPlace","workerIndex":1}"#).unwrap();
        assert_eq!(action, Action::StayInPlace { worker_index: 1 });
    }

    #[test]
    fn test_action_target() {
        assert_eq!(
            Action::Build { x: 3, y: 0 }.target(),
            Some(Coord::new(3, 0))
        );
        assert_eq!(Action::DomeBuild.target(), None);
    }

    #[test]
    fn test_intent_conversion() {
        assert_eq!(Action::from(Intent::DomeBuild), Action::DomeBuild);
        assert_eq!(
            Action::from(Intent::BuildBeforeMove { worker_index: 1 }),
            Action::BuildBeforeMove { worker_index: 1 }
        );
        assert_eq!(Intent::DomeBuild.to_string(), "a dome build");
        assert_eq!(Intent::DomeBuild.worker_index(), None);
        assert_eq!(Intent::StayInPlace { worker_index: 1 }.worker_index(), Some(1));
    }

    #[test]
    fn test_action_record() {
        let action = Action::Build { x: 0, y: 0 };
        let record = ActionRecord::new(PlayerId::B, action.clone(), 3, 12);

        assert_eq!(record.player, PlayerId::B);
        assert_eq!(record.action, action);
        assert_eq!(record.turn, 3);
        assert_eq!(record.sequence, 12);

        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
