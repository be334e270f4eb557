//! Minotaur: may move into a cell held by an opponent's worker if that
//! worker can be pushed one cell further in the same direction.
//!
//! The push target must be on the board and free of workers and domes. Its
//! level does not matter. Everything is checked before either worker moves.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;
use tracing::debug;

use super::{standard, God, GodPower};
use crate::board::WorkerId;
use crate::core::{Coord, GameError, GeometryViolation, OccupancyViolation};
use crate::game::GameState;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Minotaur {
    pushed: bool,
}

/// A validated push.
struct Push {
    from: Coord,
    landing: Coord,
}

impl Minotaur {
    /// Check a push of the worker on `to`. `None` if `to` has no rival.
    fn check_push(
        state: &GameState,
        worker: WorkerId,
        to: Coord,
    ) -> Result<Option<Push>, GameError> {
        if standard::rival_at(state, worker, to)?.is_none() {
            return Ok(None);
        }
        let from = standard::check_reach(state, worker, to)?;
        standard::check_climb(state, from, to)?;

        let landing = to.beyond(from);
        if !landing.in_bounds() {
            return Err(GeometryViolation::PushOutOfBounds(landing).into());
        }
        if state.board().is_occupied(landing) {
            return Err(OccupancyViolation::PushBlocked(landing).into());
        }
        Ok(Some(Push { from, landing }))
    }
}

impl GodPower for Minotaur {
    fn god(&self) -> God {
        God::Minotaur
    }

    fn move_worker(
        &mut self,
        state: &mut GameState,
        worker: WorkerId,
        to: Coord,
    ) -> Result<(), GameError> {
        match Self::check_push(state, worker, to)? {
            Some(Push { from, landing }) => {
                state.record_departure(worker)?;
                let board = state.board_mut();
                board.force_move_worker(to, landing)?;
                board.force_move_worker(from, to)?;
                self.pushed = true;
                debug!(%worker, %to, %landing, "Minotaur pushed a worker");
            }
            None => standard::move_worker(state, worker, to)?,
        }
        Ok(())
    }

    fn selectable_move_cells(&self, state: &GameState, worker: WorkerId) -> BTreeSet<Coord> {
        standard::cells_where(state, worker, |c| {
            matches!(Self::check_push(state, worker, c), Ok(Some(_)))
                || standard::check_move(state, worker, c).is_ok()
        })
    }

    fn turn_state(&self) -> FxHashMap<String, i64> {
        let mut map = FxHashMap::default();
        map.insert("hasPushed".to_string(), i64::from(self.pushed));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::gods::testing::{raise, table};

    #[test]
    fn test_push_straight() {
        let (mut state, w) = table(&[(PlayerId::A, (2, 2)), (PlayerId::B, (2, 3))]);
        let mut minotaur = Minotaur::default();

        minotaur.move_worker(&mut state, w[0], Coord::new(2, 3)).unwrap();
        assert_eq!(state.worker_position(w[0]).unwrap(), Coord::new(2, 3));
        assert_eq!(state.worker_position(w[1]).unwrap(), Coord::new(2, 4));
        assert_eq!(minotaur.turn_state()["hasPushed"], 1);
    }

    #[test]
    fn test_push_diagonal_onto_any_level() {
        let (mut state, w) = table(&[(PlayerId::A, (1, 1)), (PlayerId::B, (2, 2))]);
        raise(&mut state, (3, 3), 3);
        let mut minotaur = Minotaur::default();

        minotaur.move_worker(&mut state, w[0], Coord::new(2, 2)).unwrap();
        assert_eq!(state.worker_position(w[1]).unwrap(), Coord::new(3, 3));
    }

    #[test]
    fn test_push_off_board_rejected() {
        let (mut state, w) = table(&[(PlayerId::A, (2, 3)), (PlayerId::B, (2, 4))]);
        let before = state.board().clone();
        let mut minotaur = Minotaur::default();

        let err = minotaur
            .move_worker(&mut state, w[0], Coord::new(2, 4))
            .unwrap_err();
        assert_eq!(err, GameError::from(GeometryViolation::PushOutOfBounds(Coord::new(2, 5))));
        assert_eq!(state.board(), &before);
    }

    #[test]
    fn test_push_into_dome_or_worker_rejected() {
        let (mut state, w) = table(&[
            (PlayerId::A, (0, 0)),
            (PlayerId::B, (1, 1)),
            (PlayerId::B, (0, 1)),
        ]);
        state.board_mut().build_dome(Coord::new(2, 2)).unwrap();
        state.board_mut().build(Coord::new(0, 2)).unwrap();
        let mut minotaur = Minotaur::default();

        let err = minotaur
            .move_worker(&mut state, w[0], Coord::new(1, 1))
            .unwrap_err();
        assert_eq!(err, GameError::from(OccupancyViolation::PushBlocked(Coord::new(2, 2))));

        // (0, 2) is raised but free, so this push works.
        minotaur.move_worker(&mut state, w[0], Coord::new(0, 1)).unwrap();
        assert_eq!(state.worker_position(w[2]).unwrap(), Coord::new(0, 2));
    }

    #[test]
    fn test_selectable_cells_match_pushes() {
        let (state, w) = table(&[
            (PlayerId::A, (0, 0)),
            (PlayerId::B, (1, 0)),
            (PlayerId::B, (1, 1)),
        ]);
        let cells = Minotaur::default().selectable_move_cells(&state, w[0]);
        assert!(cells.contains(&Coord::new(1, 0)));
        assert!(cells.contains(&Coord::new(1, 1)));
        assert!(cells.contains(&Coord::new(0, 1)));
    }
}
