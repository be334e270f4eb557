//! Game orchestration: shared state, the turn loop, and display snapshots.

pub mod state;
pub mod engine;
pub mod view;

pub use state::GameState;
pub use engine::Game;
pub use view::{CellView, GameStateView, WorkerView};
