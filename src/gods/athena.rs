//! Athena: if one of her workers moved up this turn, the opponent may not
//! move up during their next turn.
//!
//! The game reads [`GodPower::restricts_opponent_climb`] when the turn
//! passes and applies the restriction to exactly the following turn.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::{standard, God, GodPower};
use crate::board::WorkerId;
use crate::core::{Coord, GameError};
use crate::game::GameState;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Athena {
    moved_up: bool,
}

impl GodPower for Athena {
    fn god(&self) -> God {
        God::Athena
    }

    fn move_worker(
        &mut self,
        state: &mut GameState,
        worker: WorkerId,
        to: Coord,
    ) -> Result<(), GameError> {
        let before = state.worker_height(worker)?;
        standard::move_worker(state, worker, to)?;
        if state.worker_height(worker)? > before {
            self.moved_up = true;
            debug!(%worker, "Athena moved up");
        }
        Ok(())
    }

    fn restricts_opponent_climb(&self) -> bool {
        self.moved_up
    }

    fn turn_state(&self) -> FxHashMap<String, i64> {
        let mut map = FxHashMap::default();
        map.insert("hasMovedUp".to_string(), i64::from(self.moved_up));
        map
    }
}
