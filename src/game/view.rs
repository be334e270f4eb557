//! Display snapshot of a game.
//!
//! `GameStateView` is a plain serializable copy of everything a front end
//! shows: the grid, workers, whose turn it is, the phase, both gods, the
//! outcome, and the active power's turn bookkeeping. Field names serialize
//! in camelCase.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::GameState;
use crate::board::{Worker, WorkerId};
use crate::core::{Coord, Phase, PlayerId};
use crate::gods::{God, Power};

/// A worker as displayed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerView {
    pub id: WorkerId,
    pub player: String,
    pub x: i32,
    pub y: i32,
}

impl From<&Worker> for WorkerView {
    fn from(worker: &Worker) -> Self {
        Self {
            id: worker.id(),
            player: worker.owner().to_string(),
            x: worker.position().x,
            y: worker.position().y,
        }
    }
}

/// One cell as displayed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellView {
    pub x: i32,
    pub y: i32,
    pub height: u8,
    pub worker: Option<WorkerView>,
}

/// Snapshot of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateView {
    /// All 25 cells, `x` major.
    pub grid: Vec<CellView>,
    pub workers: Vec<WorkerView>,
    pub current_player: String,
    pub phase: Phase,
    pub player_a_god: God,
    pub player_b_god: God,
    pub selected_worker: Option<WorkerId>,
    pub game_ended: bool,
    pub winner: Option<String>,
    /// "In Progress" or "<player> Wins!".
    pub status: String,
    pub turn_number: u32,
    /// The current power's turn bookkeeping.
    pub power_state: FxHashMap<String, i64>,
}

impl GameStateView {
    /// Snapshot the shared state plus the current player's power.
    #[must_use]
    pub fn capture(state: &GameState, power: &Power) -> Self {
        let board = state.board();
        let grid = board
            .cells()
            .map(|(at, height, worker)| CellView {
                x: at.x,
                y: at.y,
                height,
                worker: worker.map(WorkerView::from),
            })
            .collect();
        let winner = state.winner();

        Self {
            grid,
            workers: board.workers().map(WorkerView::from).collect(),
            current_player: state.current_player().to_string(),
            phase: state.phase(),
            player_a_god: state.player(PlayerId::A).god(),
            player_b_god: state.player(PlayerId::B).god(),
            selected_worker: state.selected_worker(),
            game_ended: winner.is_some(),
            winner: winner.map(|p| p.to_string()),
            status: winner.map_or_else(|| "In Progress".to_string(), |p| format!("{p} Wins!")),
            turn_number: state.turn_number(),
            power_state: power.turn_state(),
        }
    }

    /// Look up a cell.
    #[must_use]
    pub fn cell(&self, at: Coord) -> Option<&CellView> {
        self.grid.iter().find(|c| c.x == at.x && c.y == at.y)
    }
}
