//! Apollo: may move into a cell held by an opponent's worker, swapping the
//! two workers.
//!
//! The swap obeys the normal climb limit and never targets a dome or one of
//! Apollo's own workers.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;
use tracing::debug;

use super::{standard, God, GodPower};
use crate::board::WorkerId;
use crate::core::{Coord, GameError};
use crate::game::GameState;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Apollo {
    swapped: bool,
}

impl Apollo {
    /// Check a swap with the worker on `to`. Returns that worker.
    fn check_swap(
        state: &GameState,
        worker: WorkerId,
        to: Coord,
    ) -> Result<Option<WorkerId>, GameError> {
        let Some(rival) = standard::rival_at(state, worker, to)? else {
            return Ok(None);
        };
        let from = standard::check_reach(state, worker, to)?;
        standard::check_climb(state, from, to)?;
        Ok(Some(rival))
    }
}

impl GodPower for Apollo {
    fn god(&self) -> God {
        God::Apollo
    }

    fn move_worker(
        &mut self,
        state: &mut GameState,
        worker: WorkerId,
        to: Coord,
    ) -> Result<(), GameError> {
        match Self::check_swap(state, worker, to)? {
            Some(rival) => {
                state.record_departure(worker)?;
                state.board_mut().swap_workers(worker, rival)?;
                self.swapped = true;
                debug!(%worker, %rival, %to, "Apollo swapped places");
            }
            None => standard::move_worker(state, worker, to)?,
        }
        Ok(())
    }

    fn selectable_move_cells(&self, state: &GameState, worker: WorkerId) -> BTreeSet<Coord> {
        standard::cells_where(state, worker, |c| {
            matches!(Self::check_swap(state, worker, c), Ok(Some(_)))
                || standard::check_move(state, worker, c).is_ok()
        })
    }

    fn turn_state(&self) -> FxHashMap<String, i64> {
        let mut map = FxHashMap::default();
        map.insert("hasSwapped".to_string(), i64::from(self.swapped));
        map
    }
}
