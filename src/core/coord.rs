//! Board coordinates.
//!
//! Coordinates are signed so that caller input (and push targets that fall
//! off the edge) can be represented and rejected instead of wrapping.
//!
//! ```
//! use santorini_rules::core::Coord;
//!
//! let c = Coord::new(0, 0);
//! assert_eq!(c.neighbors().count(), 3); // corner
//! assert!(c.is_adjacent(Coord::new(1, 1)));
//! assert!(!c.is_adjacent(c));
//! ```

use serde::{Deserialize, Serialize};

/// Side length of the square board.
pub const BOARD_SIZE: i32 = 5;

/// A cell position. `x` and `y` are 0-based and valid in `0..BOARD_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Create a coordinate. No bounds check is made.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check if this coordinate lies on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// Chebyshev distance between two cells.
    #[must_use]
    pub fn distance(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Check if `other` is one of the 8 cells surrounding this one.
    #[must_use]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.distance(other) == 1
    }

    /// The cell one further step along the line from `from` through `self`.
    ///
    /// Used for pushes: a worker at `self`, approached from `from`, lands here.
    #[must_use]
    pub fn beyond(self, from: Coord) -> Coord {
        let step = |to: i32, from: i32| to.saturating_add(to.saturating_sub(from));
        Coord::new(step(self.x, from.x), step(self.y, from.y))
    }

    /// Iterate over the in-bounds cells surrounding this one.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        (-1..=1)
            .flat_map(move |dx| (-1..=1).map(move |dy| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(move |(dx, dy)| Coord::new(self.x + dx, self.y + dy))
            .filter(|c| c.in_bounds())
    }

    /// Iterate over every cell on the board, `x` major.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|x| (0..BOARD_SIZE).map(move |y| Coord::new(x, y)))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
