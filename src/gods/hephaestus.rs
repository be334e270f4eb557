//! Hephaestus: may build one additional block on top of the first block,
//! but not a dome.
//!
//! The extra build is only offered when the first build left the cell below
//! level 3, so it can never complete a dome.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use super::{standard, God, GodPower, Transition};
use crate::board::{WorkerId, WINNING_HEIGHT};
use crate::core::{CharacterRuleViolation, Coord, GameError, Phase};
use crate::game::GameState;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hephaestus {
    first: Option<Coord>,
    extra_available: bool,
}

impl Hephaestus {
    fn check_extra_build(&self, state: &GameState, at: Coord) -> Result<(), GameError> {
        let Some(first) = self.first else {
            return Ok(());
        };
        if !self.extra_available {
            return Err(CharacterRuleViolation::ExtraActionSpent {
                god: God::Hephaestus,
            }
            .into());
        }
        if at != first {
            return Err(CharacterRuleViolation::ExtraBuildElsewhere {
                god: God::Hephaestus,
                first,
            }
            .into());
        }
        if state.board().height_at(at)? >= WINNING_HEIGHT {
            return Err(CharacterRuleViolation::ExtraBuildDome {
                god: God::Hephaestus,
            }
            .into());
        }
        Ok(())
    }
}

impl GodPower for Hephaestus {
    fn god(&self) -> God {
        God::Hephaestus
    }

    fn build(&mut self, state: &mut GameState, worker: WorkerId, at: Coord) -> Result<(), GameError> {
        self.check_extra_build(state, at)?;
        let height = standard::build(state, worker, at)?;
        if self.first.is_none() {
            self.first = Some(at);
            self.extra_available = height < WINNING_HEIGHT;
        } else {
            self.extra_available = false;
        }
        Ok(())
    }

    fn selectable_build_cells(&self, state: &GameState, worker: WorkerId) -> BTreeSet<Coord> {
        standard::cells_where(state, worker, |c| {
            self.check_extra_build(state, c).is_ok()
                && standard::check_build(state, worker, c).is_ok()
        })
    }

    fn next_phase(&self, state: &GameState) -> Transition {
        if state.phase() == Phase::Build && self.extra_available {
            Transition::Hold
        } else {
            standard::next_phase(state.phase())
        }
    }

    fn skip_optional(&mut self, state: &GameState) -> Result<Transition, GameError> {
        if state.phase() == Phase::Build && self.extra_available {
            self.extra_available = false;
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
            i64::from(self.extra_available),
        );
        map.insert("firstBuildX".to_string(), i64::from(x));
        map.insert("firstBuildY".to_string(), i64::from(y));
        map
    }
}
