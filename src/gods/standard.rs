//! Standard rules, shared by every power.
//!
//! - Move: to an adjacent vacant cell at most one level up. Moving up is
//!   refused while the turn's climb restriction is active.
//! - Build: on an adjacent vacant cell; level 3 becomes a dome.
//! - Victory: the moved worker stands on level 3.
//! - Phases: a move leads to the build phase, a build ends the turn.
//!
//! The `check_*` functions validate without mutating and are the single
//! source for both the operations and the selectable-cell queries.

use std::collections::BTreeSet;

use tracing::debug;

use crate::board::{WorkerId, WINNING_HEIGHT};
use crate::core::{
    CharacterRuleViolation, Coord, GameError, GeometryViolation, OccupancyViolation, Phase,
    PhaseViolation,
};
use crate::game::GameState;

use super::Transition;

/// Check that `to` is on the board and touches the worker's cell.
///
/// Returns the worker's position.
pub fn check_reach(state: &GameState, worker: WorkerId, to: Coord) -> Result<Coord, GameError> {
    let from = state.worker_position(worker)?;
    if !to.in_bounds() {
        return Err(GeometryViolation::OutOfBounds(to).into());
    }
    if !from.is_adjacent(to) {
        return Err(GeometryViolation::NotAdjacent { from, to }.into());
    }
    Ok(from)
}

/// Check the level change of a step from `from` to `to`.
pub fn check_climb(state: &GameState, from: Coord, to: Coord) -> Result<(), GameError> {
    let board = state.board();
    let (from_height, to_height) = (board.height_at(from)?, board.height_at(to)?);
    if to_height > from_height + 1 {
        return Err(GeometryViolation::TooHigh {
            from: from_height,
            to: to_height,
        }
        .into());
    }
    if to_height > from_height && state.climb_blocked() {
        return Err(CharacterRuleViolation::ClimbForbidden {
            reason: "the opponent's Athena moved up last turn",
        }
        .into());
    }
    Ok(())
}

/// Check a standard move. Returns the worker's position.
pub fn check_move(state: &GameState, worker: WorkerId, to: Coord) -> Result<Coord, GameError> {
    let from = state.worker_position(worker)?;
    state.board().check_move(from, to)?;
    check_climb(state, from, to)?;
    Ok(from)
}

/// Move a worker under the standard rules.
pub fn move_worker(state: &mut GameState, worker: WorkerId, to: Coord) -> Result<(), GameError> {
    let from = check_move(state, worker, to)?;
    state.record_departure(worker)?;
    state.board_mut().move_worker(from, to)?;
    debug!(%worker, %from, %to, "worker moved");
    Ok(())
}

/// The opponent's worker on `to`, if any.
///
/// Fails if `to` holds one of the mover's own workers.
pub fn rival_at(state: &GameState, worker: WorkerId, to: Coord) -> Result<Option<WorkerId>, GameError> {
    let Some(other) = state.board().occupant(to) else {
        return Ok(None);
    };
    if state.owner_of(other) == state.owner_of(worker) {
        return Err(OccupancyViolation::OwnWorker(to).into());
    }
    Ok(Some(other))
}

/// Check a standard build.
pub fn check_build(state: &GameState, worker: WorkerId, at: Coord) -> Result<(), GameError> {
    check_reach(state, worker, at)?;
    state.board().check_vacant(at)
}

/// Build under the standard rules. Returns the new level.
pub fn build(state: &mut GameState, worker: WorkerId, at: Coord) -> Result<u8, GameError> {
    check_build(state, worker, at)?;
    let height = state.board_mut().build(at)?;
    debug!(%worker, %at, height, "built");
    Ok(height)
}

/// Check if the worker stands on the winning level.
#[must_use]
pub fn check_victory(state: &GameState, worker: WorkerId) -> bool {
    state.worker_height(worker).ok() == Some(WINNING_HEIGHT)
}

/// Neighbors of the worker's cell that pass `check`.
pub fn cells_where(
    state: &GameState,
    worker: WorkerId,
    check: impl Fn(Coord) -> bool,
) -> BTreeSet<Coord> {
    state
        .worker_position(worker)
        .map(|from| from.neighbors().filter(|&c| check(c)).collect())
        .unwrap_or_default()
}

pub fn selectable_move_cells(state: &GameState, worker: WorkerId) -> BTreeSet<Coord> {
    cells_where(state, worker, |c| check_move(state, worker, c).is_ok())
}

pub fn selectable_build_cells(state: &GameState, worker: WorkerId) -> BTreeSet<Coord> {
    cells_where(state, worker, |c| check_build(state, worker, c).is_ok())
}

/// Standard phase flow.
#[must_use]
pub fn next_phase(phase: Phase) -> Transition {
    match phase {
        Phase::Placement => Transition::Hold,
        Phase::Move => Transition::Enter(Phase::Build),
        Phase::Build => Transition::PassTurn,
    }
}

/// Error for skipping when no optional action is pending.
#[must_use]
pub fn nothing_to_skip(state: &GameState) -> GameError {
    PhaseViolation::NothingToSkip {
        phase: state.phase(),
    }
    .into()
}
