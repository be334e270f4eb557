//! God powers.
//!
//! Each player plays one [`God`]. A god's power changes one or more of the
//! standard rules: how workers move, how they build, how the game is won, and
//! when a phase ends.
//!
//! ## GodPower
//!
//! The [`GodPower`] trait is the seam between the game loop and the rules.
//! Every method has a default that applies the standard rules from
//! [`standard`], so a power overrides only what it changes.
//!
//! ## Power
//!
//! [`Power`] is the closed set of implementations, one variant per god, each
//! holding that god's per-turn bookkeeping. The game keeps one `Power` for
//! the current player and replaces it with a fresh one at every turn change,
//! so turn-scoped state cannot leak into the next turn.
//!
//! ## Phase flow
//!
//! After each accepted move or build the game asks the power for a
//! [`Transition`]. Powers that grant an optional extra action return
//! [`Transition::Hold`]; the player then either takes the extra action or
//! declines it with [`GodPower::skip_optional`].

use std::collections::BTreeSet;
use std::ops::{Deref, DerefMut};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::board::WorkerId;
use crate::core::{CharacterRuleViolation, ConfigError, Coord, GameError, Intent, Phase};
use crate::game::GameState;

pub mod standard;

#[cfg(test)]
pub(crate) mod testing;

pub mod apollo;
pub mod artemis;
pub mod athena;
pub mod atlas;
pub mod demeter;
pub mod hephaestus;
pub mod hermes;
pub mod minotaur;
pub mod pan;
pub mod prometheus;

pub use apollo::Apollo;
pub use artemis::Artemis;
pub use athena::Athena;
pub use atlas::Atlas;
pub use demeter::Demeter;
pub use hephaestus::Hephaestus;
pub use hermes::Hermes;
pub use minotaur::Minotaur;
pub use pan::Pan;
pub use prometheus::Prometheus;

/// A god a player can play.
///
/// `Mortal` is the absence of a power and follows the standard rules.
///
/// ```
/// use santorini_rules::gods::God;
///
/// assert_eq!("minotaur".parse::<God>().unwrap(), God::Minotaur);
/// assert_eq!("Default".parse::<God>().unwrap(), God::Mortal);
/// assert_eq!(God::Mortal.to_string(), "Default");
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum God {
    #[default]
    #[serde(rename = "Default", alias = "Mortal")]
    #[strum(to_string = "Default", serialize = "Mortal", serialize = "None")]
    Mortal,
    Apollo,
    Artemis,
    Athena,
    Atlas,
    Demeter,
    Hephaestus,
    Hermes,
    Minotaur,
    Pan,
    Prometheus,
}

impl God {
    /// Parse an optional, possibly blank god name. Blank means `Mortal`.
    pub fn parse_optional(name: Option<&str>) -> Result<God, ConfigError> {
        match name.map(str::trim) {
            None | Some("") => Ok(God::Mortal),
            Some(name) => name
                .parse()
                .map_err(|_| ConfigError::UnknownGod(name.to_string())),
        }
    }
}

/// What the phase machine does after an accepted action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Stay in the current phase; an optional extra action is available.
    Hold,
    /// Move to another phase of the same turn.
    Enter(Phase),
    /// End the turn and hand over to the opponent.
    PassTurn,
}

/// Rules for one player's turn.
///
/// Implementors hold only per-turn bookkeeping. Everything shared lives in
/// [`GameState`].
pub trait GodPower {
    /// Which god this is.
    fn god(&self) -> God;

    /// Move `worker` to `to`. Must leave `state` untouched on error.
    fn move_worker(
        &mut self,
        state: &mut GameState,
        worker: WorkerId,
        to: Coord,
    ) -> Result<(), GameError> {
        standard::move_worker(state, worker, to)
    }

    /// Build with `worker` on `at`. Must leave `state` untouched on error.
    fn build(&mut self, state: &mut GameState, worker: WorkerId, at: Coord) -> Result<(), GameError> {
        standard::build(state, worker, at).map(|_| ())
    }

    /// Check whether `worker`'s last move won the game.
    fn check_victory(&self, state: &GameState, worker: WorkerId) -> bool {
        standard::check_victory(state, worker)
    }

    /// Cells `worker` could move to right now.
    ///
    /// Exactly the targets [`move_worker`](Self::move_worker) would accept.
    fn selectable_move_cells(&self, state: &GameState, worker: WorkerId) -> BTreeSet<Coord> {
        standard::selectable_move_cells(state, worker)
    }

    /// Cells `worker` could build on right now.
    ///
    /// Exactly the targets [`build`](Self::build) would accept.
    fn selectable_build_cells(&self, state: &GameState, worker: WorkerId) -> BTreeSet<Coord> {
        standard::selectable_build_cells(state, worker)
    }

    /// Phase change after an accepted move or build.
    fn next_phase(&self, state: &GameState) -> Transition {
        standard::next_phase(state.phase())
    }

    /// Decline the optional action the current phase is holding for.
    fn skip_optional(&mut self, state: &GameState) -> Result<Transition, GameError> {
        Err(standard::nothing_to_skip(state))
    }

    /// Announce an optional power before using it.
    ///
    /// The returned transition is applied to the phase as for a move or build.
    fn declare(&mut self, _state: &GameState, intent: Intent) -> Result<Transition, GameError> {
        Err(CharacterRuleViolation::UnsupportedIntent {
            god: self.god(),
            intent,
        }
        .into())
    }

    /// Check whether a build is allowed in `phase`.
    fn can_build_in(&self, phase: Phase) -> bool {
        phase == Phase::Build
    }

    /// Check whether the opponent may not move up during their next turn.
    fn restricts_opponent_climb(&self) -> bool {
        false
    }

    /// Per-turn bookkeeping for display, booleans as 0/1.
    fn turn_state(&self) -> FxHashMap<String, i64> {
        FxHashMap::default()
    }
}

/// No power: the standard rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mortal;

impl GodPower for Mortal {
    fn god(&self) -> God {
        God::Mortal
    }
}

/// The active power for the current turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Power {
    Mortal(Mortal),
    Apollo(Apollo),
    Artemis(Artemis),
    Athena(Athena),
    Atlas(Atlas),
    Demeter(Demeter),
    Hephaestus(Hephaestus),
    Hermes(Hermes),
    Minotaur(Minotaur),
    Pan(Pan),
    Prometheus(Prometheus),
}

impl Power {
    /// Fresh power with no turn state.
    #[must_use]
    pub fn new(god: God) -> Self {
        match god {
            God::Mortal => Power::Mortal(Mortal),
            God::Apollo => Power::Apollo(Apollo::default()),
            God::Artemis => Power::Artemis(Artemis::default()),
            God::Athena => Power::Athena(Athena::default()),
            God::Atlas => Power::Atlas(Atlas::default()),
            God::Demeter => Power::Demeter(Demeter::default()),
            God::Hephaestus => Power::Hephaestus(Hephaestus::default()),
            God::Hermes => Power::Hermes(Hermes::default()),
            God::Minotaur => Power::Minotaur(Minotaur::default()),
            God::Pan => Power::Pan(Pan::default()),
            God::Prometheus => Power::Prometheus(Prometheus::default()),
        }
    }

    fn as_dyn(&self) -> &(dyn GodPower + 'static) {
        match self {
            Power::Mortal(p) => p,
            Power::Apollo(p) => p,
            Power::Artemis(p) => p,
            Power::Athena(p) => p,
            Power::Atlas(p) => p,
            Power::Demeter(p) => p,
            Power::Hephaestus(p) => p,
            Power::Hermes(p) => p,
            Power::Minotaur(p) => p,
            Power::Pan(p) => p,
            Power::Prometheus(p) => p,
        }
    }

    fn as_dyn_mut(&mut self) -> &mut (dyn GodPower + 'static) {
        match self {
            Power::Mortal(p) => p,
            Power::Apollo(p) => p,
            Power::Artemis(p) => p,
            Power::Athena(p) => p,
            Power::Atlas(p) => p,
            Power::Demeter(p) => p,
            Power::Hephaestus(p) => p,
            Power::Hermes(p) => p,
            Power::Minotaur(p) => p,
            Power::Pan(p) => p,
            Power::Prometheus(p) => p,
        }
    }
}

impl Default for Power {
    fn default() -> Self {
        Power::Mortal(Mortal)
    }
}

impl Deref for Power {
    type Target = dyn GodPower;

    fn deref(&self) -> &Self::Target {
        self.as_dyn()
    }
}

impl DerefMut for Power {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_dyn_mut()
    }
}
