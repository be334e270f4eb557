//! Worker identification.
//!
//! Workers are stored in an arena on the [`Board`](super::Board) and referred
//! to everywhere else by `WorkerId`. Ids are allocated in placement order, so
//! the first worker placed in a game is `WorkerId(0)`.
//!
//! A worker's position is owned by the board: only board operations move it,
//! which keeps it in step with the board's occupancy grid.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, PlayerId};

/// Unique identifier for a worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorkerId(pub u8);

impl WorkerId {
    /// Create a new worker ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index into the board's worker arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Worker({})", self.0)
    }
}

/// A worker on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Worker {
    id: WorkerId,
    owner: PlayerId,
    position: Coord,
}

impl Worker {
    pub(super) fn new(id: WorkerId, owner: PlayerId, position: Coord) -> Self {
        Self {
            id,
            owner,
            position,
        }
    }

    #[must_use]
    pub fn id(&self) -> WorkerId {
        self.id
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    #[must_use]
    pub fn position(&self) -> Coord {
        self.position
    }

    pub(super) fn set_position(&mut self, position: Coord) {
        self.position = position;
    }
}
