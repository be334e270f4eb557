//! Hermes: the worker moves any number of times, zero included.
//!
//! The first move follows the standard rules. After a move that stays on the
//! same level, the worker may keep moving, as long as each move stays level
//! and does not return to the cell the turn started on. A move that changes
//! level ends the move phase.
//!
//! The player ends a run of level moves with [`GodPower::skip_optional`], or
//! skips moving altogether by declaring [`Intent::StayInPlace`] for the
//! worker that will build.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use super::{standard, God, GodPower, Transition};
use crate::board::WorkerId;
use crate::core::{CharacterRuleViolation, Coord, GameError, Intent, Phase};
use crate::game::GameState;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hermes {
    start: Option<Coord>,
    moves: u32,
    level: bool,
}

impl Hermes {
    fn can_keep_moving(&self) -> bool {
        self.moves > 0 && self.level
    }

    /// Extra checks for moves after the first.
    fn check_continue(&self, state: &GameState, worker: WorkerId, to: Coord) -> Result<(), GameError> {
        if self.moves == 0 {
            return Ok(());
        }
        if !self.level {
            return Err(CharacterRuleViolation::ExtraActionSpent { god: God::Hermes }.into());
        }
        if let Some(start) = self.start {
            if to == start {
                return Err(CharacterRuleViolation::ReturnToStart {
                    god: God::Hermes,
                    at: start,
                }
                .into());
            }
        }
        let board = state.board();
        if board.height_at(to)? != state.worker_height(worker)? {
            return Err(CharacterRuleViolation::NotLevel { god: God::Hermes }.into());
        }
        Ok(())
    }
}

impl GodPower for Hermes {
    fn god(&self) -> God {
        God::Hermes
    }

    fn move_worker(
        &mut self,
        state: &mut GameState,
        worker: WorkerId,
        to: Coord,
    ) -> Result<(), GameError> {
        let from = standard::check_move(state, worker, to)?;
        self.check_continue(state, worker, to)?;
        let before = state.worker_height(worker)?;
        standard::move_worker(state, worker, to)?;

        if self.moves == 0 {
            self.start = Some(from);
        }
        self.moves += 1;
        self.level = state.worker_height(worker)? == before;
        Ok(())
    }

    fn selectable_move_cells(&self, state: &GameState, worker: WorkerId) -> BTreeSet<Coord> {
        standard::cells_where(state, worker, |c| {
            standard::check_move(state, worker, c).is_ok()
                && self.check_continue(state, worker, c).is_ok()
        })
    }

    fn next_phase(&self, state: &GameState) -> Transition {
        if state.phase() == Phase::Move && self.can_keep_moving() {
            Transition::Hold
        } else {
            standard::next_phase(state.phase())
        }
    }

    fn skip_optional(&mut self, state: &GameState) -> Result<Transition, GameError> {
        if state.phase() == Phase::Move && self.can_keep_moving() {
            self.level = false;
            Ok(Transition::Enter(Phase::Build))
        } else {
            Err(standard::nothing_to_skip(state))
        }
    }

    fn declare(&mut self, state: &GameState, intent: Intent) -> Result<Transition, GameError> {
        let Intent::StayInPlace { .. } = intent else {
            return Err(CharacterRuleViolation::UnsupportedIntent {
                god: God::Hermes,
                intent,
            }
            .into());
        };
        if state.phase() != Phase::Move || self.moves > 0 {
            return Err(CharacterRuleViolation::IntentUnavailable {
                god: God::Hermes,
                intent,
                reason: "a worker has already moved",
            }
            .into());
        }
        Ok(Transition::Enter(Phase::Build))
    }

    fn turn_state(&self) -> FxHashMap<String, i64> {
        let (x, y) = self.start.map_or((-1, -1), |c| (c.x, c.y));
        let mut map = FxHashMap::default();
        map.insert("moveCount".to_string(), i64::from(self.moves));
        map.insert("canKeepMoving".to_string(), i64::from(self.can_keep_moving()));
        map.insert("originalX".to_string(), i64::from(x));
        map.insert("originalY".to_string(), i64::from(y));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::gods::testing::{raise, table};

    #[test]
    fn test_level_moves_continue() {
        let (mut state, w) = table(&[(PlayerId::A, (0, 0))]);
        let mut hermes = Hermes::default();

        hermes.move_worker(&mut state, w[0], Coord::new(1, 0)).unwrap();
        assert_eq!(hermes.next_phase(&state), Transition::Hold);
        hermes.move_worker(&mut state, w[0], Coord::new(2, 0)).unwrap();
        hermes.move_worker(&mut state, w[0], Coord::new(3, 1)).unwrap();
        assert_eq!(hermes.turn_state()["moveCount"], 3);
        assert_eq!(hermes.next_phase(&state), Transition::Hold);

        assert_eq!(
            hermes.skip_optional(&state).unwrap(),
            Transition::Enter(Phase::Build)
        );
    }

    #[test]
    fn test_climb_ends_moving() {
        let (mut state, w) = table(&[(PlayerId::A, (0, 0))]);
        raise(&mut state, (1, 1), 1);
        let mut hermes = Hermes::default();

        hermes.move_worker(&mut state, w[0], Coord::new(1, 1)).unwrap();
        assert_eq!(hermes.next_phase(&state), Transition::Enter(Phase::Build));
        assert!(hermes.selectable_move_cells(&state, w[0]).is_empty());
    }

    #[test]
    fn test_extra_moves_must_stay_level() {
        let (mut state, w) = table(&[(PlayerId::A, (0, 0))]);
        raise(&mut state, (2, 0), 1);
        let mut hermes = Hermes::default();

        hermes.move_worker(&mut state, w[0], Coord::new(1, 0)).unwrap();
        let err = hermes
            .move_worker(&mut state, w[0], Coord::new(2, 0))
            .unwrap_err();
        assert_eq!(
            err,
            GameError::from(CharacterRuleViolation::NotLevel { god: God::Hermes })
        );

        let cells = hermes.selectable_move_cells(&state, w[0]);
        assert!(!cells.contains(&Coord::new(2, 0)));
        assert!(!cells.contains(&Coord::new(0, 0)));
        assert!(cells.contains(&Coord::new(0, 1)));
    }

    #[test]
    fn test_cannot_return_to_start() {
        let (mut state, w) = table(&[(PlayerId::A, (0, 0))]);
        let mut hermes = Hermes::default();

        hermes.move_worker(&mut state, w[0], Coord::new(1, 1)).unwrap();
        let err = hermes
            .move_worker(&mut state, w[0], Coord::new(0, 0))
            .unwrap_err();
        assert!(matches!(
            err,
            GameError::CharacterRule(CharacterRuleViolation::ReturnToStart { .. })
        ));
    }

    #[test]
    fn test_stay_in_place_skips_to_build() {
        let (state, _) = table(&[(PlayerId::A, (0, 0))]);
        let mut hermes = Hermes::default();

        let transition = hermes
            .declare(&state, Intent::StayInPlace { worker_index: 0 })
            .unwrap();
        assert_eq!(transition, Transition::Enter(Phase::Build));
        assert_eq!(hermes.turn_state()["moveCount"], 0);
        assert!(matches!(
            hermes.declare(&state, Intent::DomeBuild).unwrap_err(),
            GameError::CharacterRule(CharacterRuleViolation::UnsupportedIntent { .. })
        ));
    }

    #[test]
    fn test_stay_in_place_only_before_moving() {
        let (mut state, w) = table(&[(PlayerId::A, (0, 0))]);
        let mut hermes = Hermes::default();

        hermes.move_worker(&mut state, w[0], Coord::new(1, 0)).unwrap();
        let err = hermes
            .declare(&state, Intent::StayInPlace { worker_index: 0 })
            .unwrap_err();
        assert!(matches!(
            err,
            GameError::CharacterRule(CharacterRuleViolation::IntentUnavailable { .. })
        ));
    }
}
