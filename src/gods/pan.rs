//! Pan: also wins by moving down two or more levels.

use rustc_hash::FxHashMap;

use super::{standard, God, GodPower};
use crate::board::WorkerId;
use crate::core::{Coord, GameError};
use crate::game::GameState;

/// Levels Pan must drop in one move to win.
const WINNING_DROP: i64 = 2;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pan {
    last_height_difference: i64,
}

impl GodPower for Pan {
    fn god(&self) -> God {
        God::Pan
    }

    fn move_worker(
        &mut self,
        state: &mut GameState,
        worker: WorkerId,
        to: Coord,
    ) -> Result<(), GameError> {
        let before = state.worker_height(worker)?;
        standard::move_worker(state, worker, to)?;
        let after = state.worker_height(worker)?;
        self.last_height_difference = i64::from(after) - i64::from(before);
        Ok(())
    }

    fn check_victory(&self, state: &GameState, worker: WorkerId) -> bool {
        let drop = state
            .worker_height(worker)
            .map(|now| i64::from(state.previous_height(worker)) - i64::from(now));
        matches!(drop, Ok(d) if d >= WINNING_DROP) || standard::check_victory(state, worker)
    }

    fn turn_state(&self) -> FxHashMap<String, i64> {
        let mut map = FxHashMap::default();
        map.insert(
            "lastMoveHeightDifference".to_string(),
            self.last_height_difference,
        );
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::gods::testing::{raise, table};

    fn worker_on_level(level: u8) -> (GameState, WorkerId) {
        let (mut state, w) = table(&[(PlayerId::A, (0, 0))]);
        raise(&mut state, (1, 1), level);
        state
            .board_mut()
            .force_move_worker(Coord::new(0, 0), Coord::new(1, 1))
            .unwrap();
        (state, w[0])
    }

    #[test]
    fn test_drop_two_levels_wins() {
        let (mut state, w) = worker_on_level(2);
        let mut pan = Pan::default();

        pan.move_worker(&mut state, w, Coord::new(2, 2)).unwrap();
        assert_eq!(pan.turn_state()["lastMoveHeightDifference"], -2);
        assert!(pan.check_victory(&state, w));
    }

    #[test]
    fn test_drop_one_level_does_not_win() {
        let (mut state, w) = worker_on_level(1);
        let mut pan = Pan::default();

        pan.move_worker(&mut state, w, Coord::new(2, 2)).unwrap();
        assert!(!pan.check_victory(&state, w));
    }

    #[test]
    fn test_standard_victory_still_applies() {
        let (mut state, w) = worker_on_level(2);
        raise(&mut state, (2, 2), 3);
        let mut pan = Pan::default();

        pan.move_worker(&mut state, w, Coord::new(2, 2)).unwrap();
        assert!(pan.check_victory(&state, w));
    }
}
