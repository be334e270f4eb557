//! Test fixtures for power rules.

use crate::board::WorkerId;
use crate::core::{Coord, GameConfig, Phase, PlayerId};
use crate::game::GameState;

/// A state in the move phase with workers placed at the given cells.
///
/// Returned ids are in the same order as `workers`.
pub(crate) fn table(workers: &[(PlayerId, (i32, i32))]) -> (GameState, Vec<WorkerId>) {
    table_on(&[], workers)
}

/// Like [`table`], with cells raised before any worker is placed.
pub(crate) fn table_on(
    heights: &[((i32, i32), u8)],
    workers: &[(PlayerId, (i32, i32))],
) -> (GameState, Vec<WorkerId>) {
    let mut state = GameState::new(&GameConfig::default());
    for &(cell, levels) in heights {
        raise(&mut state, cell, levels);
    }
    let ids = workers
        .iter()
        .map(|&(owner, (x, y))| state.place_worker(owner, Coord::new(x, y)).unwrap())
        .collect();
    state.set_phase(Phase::Move);
    (state, ids)
}

/// Raise an unoccupied cell by `levels` blocks.
pub(crate) fn raise(state: &mut GameState, (x, y): (i32, i32), levels: u8) {
    for _ in 0..levels {
        state.board_mut().build(Coord::new(x, y)).unwrap();
    }
}
