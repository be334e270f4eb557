//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! The game is strictly two-player: `PlayerId::A` (index 0) and
//! `PlayerId::B` (index 1).
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`.
//!
//! ## Player
//!
//! A player's name, god, and the (at most two) workers they own.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use crate::board::WorkerId;
use crate::core::{CapacityViolation, ConfigError};
use crate::gods::God;

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

/// Number of workers each player places.
pub const WORKERS_PER_PLAYER: usize = 2;

/// Player identifier.
///
/// Only `A` and `B` exist; deserializing any other index fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first player. Places first and takes the first turn.
    pub const A: PlayerId = PlayerId(0);

    /// The second player.
    pub const B: PlayerId = PlayerId(1);

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        if self.0 == 0 {
            Self::B
        } else {
            Self::A
        }
    }

    /// Display name, as shown in status text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        if self.0 == 0 {
            "Player A"
        } else {
            "Player B"
        }
    }

    /// Iterate over both players, A first.
    ///
    /// ```
    /// use santorini_rules::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::A, PlayerId::B]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::A, Self::B].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = ConfigError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::A),
            1 => Ok(Self::B),
            _ => Err(ConfigError::UnknownPlayer(index)),
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use santorini_rules::core::{PlayerId, PlayerMap};
///
/// let mut moves: PlayerMap<u32> = PlayerMap::with_default();
/// moves[PlayerId::B] += 1;
/// assert_eq!(moves[PlayerId::A], 0);
/// assert_eq!(moves[PlayerId::B], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::A), factory(PlayerId::B)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A participant: identity, chosen god, and owned workers.
///
/// Workers are recorded in placement order, so worker index 0 is the
/// first one the player placed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    god: God,
    workers: SmallVec<[WorkerId; WORKERS_PER_PLAYER]>,
}

impl Player {
    /// Create a player with no workers.
    #[must_use]
    pub fn new(id: PlayerId, god: God) -> Self {
        Self {
            id,
            name: id.name().to_string(),
            god,
            workers: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn god(&self) -> God {
        self.god
    }

    /// Workers in placement order.
    #[must_use]
    pub fn workers(&self) -> &[WorkerId] {
        &self.workers
    }

    /// Look up a worker by placement index.
    #[must_use]
    pub fn worker(&self, index: usize) -> Option<WorkerId> {
        self.workers.get(index).copied()
    }

    /// Check if this player owns the given worker.
    #[must_use]
    pub fn owns(&self, worker: WorkerId) -> bool {
        self.workers.contains(&worker)
    }

    /// Check if both workers have been placed.
    #[must_use]
    pub fn has_all_workers(&self) -> bool {
        self.workers.len() >= WORKERS_PER_PLAYER
    }

    /// Check capacity for one more worker without adding it.
    pub(crate) fn check_capacity(&self) -> Result<(), CapacityViolation> {
        if self.has_all_workers() {
            return Err(CapacityViolation::WorkersExhausted {
                player: self.id,
                max: WORKERS_PER_PLAYER,
            });
        }
        Ok(())
    }

    /// Record a newly placed worker.
    pub(crate) fn add_worker(&mut self, worker: WorkerId) -> Result<(), CapacityViolation> {
        self.check_capacity()?;
        self.workers.push(worker);
        Ok(())
    }
}
