//! Board state: cell heights and workers.

pub mod grid;
pub mod worker;

pub use grid::{Board, DOME, WINNING_HEIGHT};
pub use worker::{Worker, WorkerId};
