//! Demeter: may build one additional time, but not on the same cell.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use super::{standard, God, GodPower, Transition};
use crate::board::WorkerId;
use crate::core::{CharacterRuleViolation, Coord, GameError, Phase};
use crate::game::GameState;

const MAX_BUILDS: u8 = 2;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Demeter {
    first: Option<Coord>,
    builds: u8,
}

impl Demeter {
    fn extra_build_available(&self) -> bool {
        self.builds == 1
    }

    fn check_extra_build(&self, at: Coord) -> Result<(), GameError> {
        if self.builds >= MAX_BUILDS {
            return Err(CharacterRuleViolation::ExtraActionSpent { god: God::Demeter }.into());
        }
        match self.first {
            Some(first) if at == first => Err(CharacterRuleViolation::SameCellRebuild {
                god: God::Demeter,
                first,
            }
            .into()),
            _ => Ok(()),
        }
    }
}

impl GodPower for Demeter {
    fn god(&self) -> God {
        God::Demeter
    }

    fn build(&mut self, state: &mut GameState, worker: WorkerId, at: Coord) -> Result<(), GameError> {
        self.check_extra_build(at)?;
        standard::build(state, worker, at)?;
        if self.first.is_none() {
            self.first = Some(at);
        }
        self.builds += 1;
        Ok(())
    }

    fn selectable_build_cells(&self, state: &GameState, worker: WorkerId) -> BTreeSet<Coord> {
        standard::cells_where(state, worker, |c| {
            self.check_extra_build(c).is_ok() && standard::check_build(state, worker, c).is_ok()
        })
    }

    fn next_phase(&self, state: &GameState) -> Transition {
        if state.phase() == Phase::Build && self.extra_build_available() {
            Transition::Hold
        } else {
            standard::next_phase(state.phase())
        }
    }

    fn skip_optional(&mut self, state: &GameState) -> Result<Transition, GameError> {
        if state.phase() == Phase::Build && self.extra_build_available() {
            self.builds = MAX_BUILDS;
            Ok(Transition::PassTurn)
        } else {
            Err(standard::nothing_to_skip(state))
        }
    }

    fn turn_state(&self) -> FxHashMap<String, i64> {
        let (x, y) = self.first.map_or((-1, -1), |c| (c.x, c.y));
        let mut map = FxHashMap::default();
        map.insert(
            "extraBuildAvailable".to_string(),
            i64::from(self.extra_build_available()),
        );
        map.insert("firstBuildX".to_string(), i64::from(x));
        map.insert("firstBuildY".to_string(), i64::from(y));
        map
    }
}
