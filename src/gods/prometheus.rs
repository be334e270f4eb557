//! Prometheus: may build before moving, but then may not move up that turn.
//!
//! The player declares [`Intent::BuildBeforeMove`] during the move phase
//! before moving. The declared worker builds once, still in the move phase,
//! then moves and builds as usual.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;
use tracing::debug;

use super::{standard, God, GodPower, Transition};
use crate::board::WorkerId;
use crate::core::{CharacterRuleViolation, Coord, GameError, Intent, Phase};
use crate::game::GameState;

/// Progress of the optional pre-move build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum PreBuild {
    #[default]
    None,
    Declared,
    Built,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Prometheus {
    pre_build: PreBuild,
    moved: bool,
}

impl Prometheus {
    fn check_no_climb(&self, state: &GameState, worker: WorkerId, to: Coord) -> Result<(), GameError> {
        if self.pre_build == PreBuild::Built
            && state.board().height_at(to)? > state.worker_height(worker)?
        {
            return Err(CharacterRuleViolation::ClimbForbidden {
                reason: "Prometheus built before moving",
            }
            .into());
        }
        Ok(())
    }
}

impl GodPower for Prometheus {
    fn god(&self) -> God {
        God::Prometheus
    }

    fn declare(&mut self, state: &GameState, intent: Intent) -> Result<Transition, GameError> {
        let Intent::BuildBeforeMove { .. } = intent else {
            return Err(CharacterRuleViolation::UnsupportedIntent {
                god: God::Prometheus,
                intent,
            }
            .into());
        };
        let unavailable = |reason| CharacterRuleViolation::IntentUnavailable {
            god: God::Prometheus,
            intent,
            reason,
        };
        if state.phase() != Phase::Move || self.moved {
            return Err(unavailable("a worker has already moved").into());
        }
        if self.pre_build != PreBuild::None {
            return Err(unavailable("already declared this turn").into());
        }
        self.pre_build = PreBuild::Declared;
        Ok(Transition::Hold)
    }

    fn can_build_in(&self, phase: Phase) -> bool {
        match phase {
            Phase::Build => true,
            Phase::Move => self.pre_build == PreBuild::Declared && !self.moved,
            Phase::Placement => false,
        }
    }

    fn build(&mut self, state: &mut GameState, worker: WorkerId, at: Coord) -> Result<(), GameError> {
        standard::build(state, worker, at)?;
        if state.phase() == Phase::Move {
            self.pre_build = PreBuild::Built;
            debug!(%worker, %at, "Prometheus built before moving");
        }
        Ok(())
    }

    fn move_worker(
        &mut self,
        state: &mut GameState,
        worker: WorkerId,
        to: Coord,
    ) -> Result<(), GameError> {
        standard::check_move(state, worker, to)?;
        self.check_no_climb(state, worker, to)?;
        standard::move_worker(state, worker, to)?;
        if self.pre_build == PreBuild::Declared {
            self.pre_build = PreBuild::None;
        }
        self.moved = true;
        Ok(())
    }

    fn selectable_move_cells(&self, state: &GameState, worker: WorkerId) -> BTreeSet<Coord> {
        standard::cells_where(state, worker, |c| {
            standard::check_move(state, worker, c).is_ok()
                && self.check_no_climb(state, worker, c).is_ok()
        })
    }

    fn next_phase(&self, state: &GameState) -> Transition {
        if state.phase() == Phase::Move && !self.moved {
            Transition::Hold
        } else {
            standard::next_phase(state.phase())
        }
    }

    fn turn_state(&self) -> FxHashMap<String, i64> {
        let mut map = FxHashMap::default();
        map.insert(
            "buildBeforeMoveDeclared".to_string(),
            i64::from(self.pre_build == PreBuild::Declared),
        );
        map.insert(
            "hasBuiltBeforeMove".to_string(),
            i64::from(self.pre_build == PreBuild::Built),
        );
        map
    }
}
