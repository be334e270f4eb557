//! The 5x5 building grid.
//!
//! ## Heights
//!
//! Each cell has a level from 0 to 4. Levels 1-3 are tower blocks; level 4
//! ([`DOME`]) is a dome, which nothing can stand on or build over.
//!
//! ## Occupancy
//!
//! At most one worker stands on a cell. The board keeps a cell -> worker
//! grid alongside the worker arena and updates both together, so a worker's
//! position and the cell recording it never disagree.
//!
//! ## Checks
//!
//! `check_*` methods return the specific violation; `is_*` methods are the
//! boolean forms. Mutating methods check first and change nothing on error.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Worker, WorkerId};
use crate::core::{
    CapacityViolation, Coord, GameError, GeometryViolation, OccupancyViolation, PlayerId,
    BOARD_SIZE,
};

/// Level of a dome.
pub const DOME: u8 = 4;

/// Level a worker must move up to in order to win.
pub const WINNING_HEIGHT: u8 = 3;

const SIDE: usize = BOARD_SIZE as usize;

/// Heights plus workers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    heights: [[u8; SIDE]; SIDE],
    occupants: [[Option<WorkerId>; SIDE]; SIDE],
    workers: SmallVec<[Worker; 4]>,
}

fn check_bounds(at: Coord) -> Result<(), GeometryViolation> {
    if at.in_bounds() {
        Ok(())
    } else {
        Err(GeometryViolation::OutOfBounds(at))
    }
}

impl Board {
    /// An empty board: every cell at level 0, no workers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Queries ===

    /// Level of a cell.
    pub fn height_at(&self, at: Coord) -> Result<u8, GameError> {
        check_bounds(at)?;
        Ok(self.heights[at.x as usize][at.y as usize])
    }

    /// Check if a cell is capped by a dome. False off the board.
    #[must_use]
    pub fn is_dome(&self, at: Coord) -> bool {
        matches!(self.height_at(at), Ok(DOME))
    }

    /// Check if a cell holds a worker or a dome. False off the board.
    #[must_use]
    pub fn is_occupied(&self, at: Coord) -> bool {
        self.occupant(at).is_some() || self.is_dome(at)
    }

    /// Check if two cells touch, including diagonally.
    #[must_use]
    pub fn is_adjacent(&self, a: Coord, b: Coord) -> bool {
        a.is_adjacent(b)
    }

    /// The worker standing on a cell.
    #[must_use]
    pub fn occupant(&self, at: Coord) -> Option<WorkerId> {
        if at.in_bounds() {
            self.occupants[at.x as usize][at.y as usize]
        } else {
            None
        }
    }

    /// The worker standing on a cell.
    #[must_use]
    pub fn worker_at(&self, at: Coord) -> Option<&Worker> {
        self.occupant(at).and_then(|id| self.worker(id))
    }

    #[must_use]
    pub fn worker(&self, id: WorkerId) -> Option<&Worker> {
        self.workers.get(id.index())
    }

    /// All workers, in placement order.
    pub fn workers(&self) -> impl Iterator<Item = &Worker> {
        self.workers.iter()
    }

    /// Every cell with its level and worker, `x` major.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, u8, Option<&Worker>)> {
        Coord::all().map(move |c| {
            (
                c,
                self.heights[c.x as usize][c.y as usize],
                self.worker_at(c),
            )
        })
    }

    /// Check that a cell can receive a worker or a block.
    ///
    /// Reports a dome before a worker.
    pub fn check_vacant(&self, at: Coord) -> Result<(), GameError> {
        check_bounds(at)?;
        if self.is_dome(at) {
            return Err(OccupancyViolation::Dome(at).into());
        }
        if self.occupant(at).is_some() {
            return Err(OccupancyViolation::Occupied(at).into());
        }
        Ok(())
    }

    /// Check a standard move between two cells.
    ///
    /// Checks, in order: bounds, adjacency, vacancy, and that the target is
    /// at most one level higher than the source.
    pub fn check_move(&self, from: Coord, to: Coord) -> Result<(), GameError> {
        let from_height = self.height_at(from)?;
        check_bounds(to)?;
        if !from.is_adjacent(to) {
            return Err(GeometryViolation::NotAdjacent { from, to }.into());
        }
        self.check_vacant(to)?;
        let to_height = self.heights[to.x as usize][to.y as usize];
        if to_height > from_height + 1 {
            return Err(GeometryViolation::TooHigh {
                from: from_height,
                to: to_height,
            }
            .into());
        }
        Ok(())
    }

    /// Boolean form of [`check_move`](Self::check_move).
    #[must_use]
    pub fn is_valid_move(&self, from: Coord, to: Coord) -> bool {
        self.check_move(from, to).is_ok()
    }

    // === Building ===

    /// Raise a cell by one level. Building on level 3 places a dome.
    ///
    /// Returns the new level.
    pub fn build(&mut self, at: Coord) -> Result<u8, GameError> {
        self.check_vacant(at)?;
        let height = &mut self.heights[at.x as usize][at.y as usize];
        *height += 1;
        Ok(*height)
    }

    /// Cap a cell with a dome regardless of its level.
    pub fn build_dome(&mut self, at: Coord) -> Result<(), GameError> {
        self.check_vacant(at)?;
        self.heights[at.x as usize][at.y as usize] = DOME;
        Ok(())
    }

    // === Workers ===

    /// Put a new worker on a vacant cell.
    pub fn place_worker(&mut self, at: Coord, owner: PlayerId) -> Result<WorkerId, GameError> {
        self.check_vacant(at)?;
        let id = WorkerId(self.workers.len() as u8);
        self.workers.push(Worker::new(id, owner, at));
        self.occupants[at.x as usize][at.y as usize] = Some(id);
        Ok(id)
    }

    /// Move the worker on `from` to `to` under the standard move rule.
    pub fn move_worker(&mut self, from: Coord, to: Coord) -> Result<(), GameError> {
        self.check_move(from, to)?;
        let id = self
            .occupant(from)
            .ok_or(OccupancyViolation::NoWorker(from))?;
        self.relocate(id, from, to);
        Ok(())
    }

    /// Move the worker on `from` to any vacant cell, ignoring adjacency and
    /// height. Used for pushes.
    pub fn force_move_worker(&mut self, from: Coord, to: Coord) -> Result<(), GameError> {
        check_bounds(from)?;
        let id = self
            .occupant(from)
            .ok_or(OccupancyViolation::NoWorker(from))?;
        self.check_vacant(to)?;
        self.relocate(id, from, to);
        Ok(())
    }

    /// Exchange the positions of two workers.
    pub fn swap_workers(&mut self, a: WorkerId, b: WorkerId) -> Result<(), GameError> {
        let pos_a = self
            .worker(a)
            .map(Worker::position)
            .ok_or(CapacityViolation::UnknownWorker(a))?;
        let pos_b = self
            .worker(b)
            .map(Worker::position)
            .ok_or(CapacityViolation::UnknownWorker(b))?;

        self.occupants[pos_a.x as usize][pos_a.y as usize] = Some(b);
        self.occupants[pos_b.x as usize][pos_b.y as usize] = Some(a);
        self.workers[a.index()].set_position(pos_b);
        self.workers[b.index()].set_position(pos_a);
        Ok(())
    }

    fn relocate(&mut self, id: WorkerId, from: Coord, to: Coord) {
        self.occupants[from.x as usize][from.y as usize] = None;
        self.occupants[to.x as usize][to.y as usize] = Some(id);
        self.workers[id.index()].set_position(to);
    }
}

impl std::fmt::Display for Board {
    /// One row per `y`, each cell as its level followed by the owner's
    /// letter or `.`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let at = Coord::new(x, y);
                let mark = match self.worker_at(at).map(Worker::owner) {
                    Some(PlayerId::A) => 'A',
                    Some(_) => 'B',
                    None => '.',
                };
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}{}", self.heights[x as usize][y as usize], mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn test_new_board_is_flat_and_empty() {
        let board = Board::new();
        for (_, height, worker) in board.cells() {
            assert_eq!(height, 0);
            assert!(worker.is_none());
        }
        assert_eq!(board.workers().count(), 0);
    }

    #[test]
    fn test_build_sequence_ends_in_dome() {
        let mut board = Board::new();
        assert_eq!(board.build(c(1, 1)).unwrap(), 1);
        assert_eq!(board.build(c(1, 1)).unwrap(), 2);
        assert_eq!(board.build(c(1, 1)).unwrap(), 3);
        assert_eq!(board.build(c(1, 1)).unwrap(), DOME);
        assert!(board.is_dome(c(1, 1)));
        assert!(board.is_occupied(c(1, 1)));

        let err = board.build(c(1, 1)).unwrap_err();
        assert_eq!(err, GameError::from(OccupancyViolation::Dome(c(1, 1))));
        assert_eq!(board.height_at(c(1, 1)).unwrap(), DOME);
    }

    #[test]
    fn test_build_on_worker_fails() {
        let mut board = Board::new();
        board.place_worker(c(2, 2), PlayerId::A).unwrap();
        let err = board.build(c(2, 2)).unwrap_err();
        assert_eq!(err, GameError::from(OccupancyViolation::Occupied(c(2, 2))));
        assert_eq!(board.height_at(c(2, 2)).unwrap(), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(
            board.height_at(c(5, 0)).unwrap_err(),
            GameError::from(GeometryViolation::OutOfBounds(c(5, 0)))
        );
        assert!(board.build(c(-1, 2)).is_err());
        assert!(board.place_worker(c(0, 5), PlayerId::A).is_err());
        assert!(!board.is_occupied(c(9, 9)));
        assert!(!board.is_adjacent(c(i32::MIN, 0), c(1, 0)));
        assert!(!board.is_valid_move(c(0, 0), c(i32::MAX, i32::MIN)));
    }

    #[test]
    fn test_build_dome_at_any_level() {
        let mut board = Board::new();
        board.build(c(0, 0)).unwrap();
        board.build_dome(c(0, 0)).unwrap();
        assert_eq!(board.height_at(c(0, 0)).unwrap(), DOME);

        board.build_dome(c(4, 4)).unwrap();
        assert!(board.is_dome(c(4, 4)));
    }

    #[test]
    fn test_place_worker_allocates_ids() {
        let mut board = Board::new();
        let a = board.place_worker(c(0, 0), PlayerId::A).unwrap();
        let b = board.place_worker(c(4, 4), PlayerId::B).unwrap();
        assert_eq!(a, WorkerId(0));
        assert_eq!(b, WorkerId(1));
        assert_eq!(board.worker_at(c(4, 4)).map(Worker::owner), Some(PlayerId::B));

        let err = board.place_worker(c(0, 0), PlayerId::B).unwrap_err();
        assert_eq!(err, GameError::from(OccupancyViolation::Occupied(c(0, 0))));
        assert_eq!(board.workers().count(), 2);
    }

    #[test]
    fn test_move_rules() {
        let mut board = Board::new();
        board.place_worker(c(2, 2), PlayerId::A).unwrap();
        board.place_worker(c(3, 3), PlayerId::B).unwrap();
        board.build(c(2, 3)).unwrap();
        board.build(c(1, 1)).unwrap();
        board.build(c(1, 1)).unwrap();

        assert!(board.is_valid_move(c(2, 2), c(2, 3)));
        assert!(!board.is_valid_move(c(2, 2), c(1, 1)));
        assert!(!board.is_valid_move(c(2, 2), c(3, 3)));
        assert!(!board.is_valid_move(c(2, 2), c(4, 4)));
        assert!(!board.is_valid_move(c(2, 2), c(2, 2)));

        assert_eq!(
            board.check_move(c(2, 2), c(1, 1)).unwrap_err(),
            GameError::from(GeometryViolation::TooHigh { from: 0, to: 2 })
        );
        assert_eq!(
            board.check_move(c(2, 2), c(0, 2)).unwrap_err(),
            GameError::from(GeometryViolation::NotAdjacent {
                from: c(2, 2),
                to: c(0, 2)
            })
        );
    }

    #[test]
    fn test_move_down_any_distance() {
        let mut board = Board::new();
        for _ in 0..3 {
            board.build(c(0, 0)).unwrap();
        }
        board.place_worker(c(0, 0), PlayerId::A).unwrap();
        assert!(board.is_valid_move(c(0, 0), c(1, 1)));
    }

    #[test]
    fn test_move_worker_updates_both_views() {
        let mut board = Board::new();
        let id = board.place_worker(c(0, 0), PlayerId::A).unwrap();
        board.move_worker(c(0, 0), c(1, 0)).unwrap();

        assert_eq!(board.occupant(c(0, 0)), None);
        assert_eq!(board.occupant(c(1, 0)), Some(id));
        assert_eq!(board.worker(id).map(Worker::position), Some(c(1, 0)));

        let err = board.move_worker(c(3, 3), c(3, 4)).unwrap_err();
        assert_eq!(err, GameError::from(OccupancyViolation::NoWorker(c(3, 3))));
    }

    #[test]
    fn test_swap_workers() {
        let mut board = Board::new();
        let a = board.place_worker(c(1, 1), PlayerId::A).unwrap();
        let b = board.place_worker(c(1, 2), PlayerId::B).unwrap();
        board.swap_workers(a, b).unwrap();

        assert_eq!(board.occupant(c(1, 1)), Some(b));
        assert_eq!(board.occupant(c(1, 2)), Some(a));
        assert_eq!(board.worker(a).map(Worker::position), Some(c(1, 2)));

        let err = board.swap_workers(a, WorkerId(9)).unwrap_err();
        assert_eq!(err, GameError::from(CapacityViolation::UnknownWorker(WorkerId(9))));
    }

    #[test]
    fn test_force_move_ignores_distance_and_height() {
        let mut board = Board::new();
        board.build(c(4, 4)).unwrap();
        board.build(c(4, 4)).unwrap();
        let id = board.place_worker(c(0, 0), PlayerId::B).unwrap();
        board.force_move_worker(c(0, 0), c(4, 4)).unwrap();
        assert_eq!(board.occupant(c(4, 4)), Some(id));

        board.build_dome(c(3, 3)).unwrap();
        assert!(board.force_move_worker(c(4, 4), c(3, 3)).is_err());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place_worker(c(0, 0), PlayerId::A).unwrap();
        board.build(c(1, 0)).unwrap();
        let text = board.to_string();
        assert!(text.starts_with("0A 1. 0. 0. 0.\n"));
        assert_eq!(text.lines().count(), 5);
    }
}
