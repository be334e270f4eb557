//! Artemis: the moving worker may move one additional time, but not back to
//! the cell it started the turn on.
//!
//! After the first move the phase holds; a second move or a skip leads to
//! the build phase.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use super::{standard, God, GodPower, Transition};
use crate::board::WorkerId;
use crate::core::{CharacterRuleViolation, Coord, GameError, Phase};
use crate::game::GameState;

const MAX_MOVES: u8 = 2;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Artemis {
    start: Option<Coord>,
    moves: u8,
}

impl Artemis {
    fn extra_move_available(&self) -> bool {
        self.moves == 1
    }

    fn check_extra_move(&self, to: Coord) -> Result<(), GameError> {
        if self.moves >= MAX_MOVES {
            return Err(CharacterRuleViolation::ExtraActionSpent { god: God::Artemis }.into());
        }
        match self.start {
            Some(start) if self.moves > 0 && to == start => {
                Err(CharacterRuleViolation::ReturnToStart {
                    god: God::Artemis,
                    at: start,
                }
                .into())
            }
            _ => Ok(()),
        }
    }
}

impl GodPower for Artemis {
    fn god(&self) -> God {
        God::Artemis
    }

    fn move_worker(
        &mut self,
        state: &mut GameState,
        worker: WorkerId,
        to: Coord,
    ) -> Result<(), GameError> {
        self.check_extra_move(to)?;
        let from = state.worker_position(worker)?;
        standard::move_worker(state, worker, to)?;
        if self.moves == 0 {
            self.start = Some(from);
        }
        self.moves += 1;
        Ok(())
    }

    fn selectable_move_cells(&self, state: &GameState, worker: WorkerId) -> BTreeSet<Coord> {
        standard::cells_where(state, worker, |c| {
            self.check_extra_move(c).is_ok() && standard::check_move(state, worker, c).is_ok()
        })
    }

    fn next_phase(&self, state: &GameState) -> Transition {
        if state.phase() == Phase::Move && self.extra_move_available() {
            Transition::Hold
        } else {
            standard::next_phase(state.phase())
        }
    }

    fn skip_optional(&mut self, state: &GameState) -> Result<Transition, GameError> {
        if state.phase() == Phase::Move && self.extra_move_available() {
            self.moves = MAX_MOVES;
            Ok(Transition::Enter(Phase::Build))
        } else {
            Err(standard::nothing_to_skip(state))
        }
    }

    fn turn_state(&self) -> FxHashMap<String, i64> {
        let (x, y) = self.start.map_or((-1, -1), |c| (c.x, c.y));
        let mut map = FxHashMap::default();
        map.insert(
            "extraMoveAvailable".to_string(),
            i64::from(self.extra_move_available()),
        );
        map.insert("initialX".to_string(), i64::from(x));
        map.insert("initialY".to_string(), i64::from(y));
        map
    }
}
