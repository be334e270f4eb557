//! Shared game state.
//!
//! `GameState` holds everything that is not specific to one god: the board,
//! both players, whose turn it is, the phase, and the history. God powers
//! read it to validate actions and mutate it through the board.
//!
//! ## Turn-scoped fields
//!
//! - `selected`: the worker acting this turn, set by its first move (or by
//!   a pre-move build declaration). Cleared when the turn passes.
//! - `climb_blocked`: set at turn start when the previous player's power
//!   forbids moving up for exactly this turn.
//!
//! ## Previous heights
//!
//! Before any worker leaves a cell its level is recorded, so win rules that
//! depend on the level a worker came from can consult it after the move.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::{Board, WorkerId};
use crate::core::{
    Action, ActionRecord, CapacityViolation, Coord, GameConfig, GameError, Phase, Player,
    PlayerId, PlayerMap,
};

/// Board, players, and turn bookkeeping.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    players: PlayerMap<Player>,

    // === Turn ===
    current: PlayerId,
    phase: Phase,
    selected: Option<WorkerId>,
    climb_blocked: bool,

    /// Starts at 0 during placement; the first movement turn is 1.
    turn_number: u32,

    // === Outcome ===
    winner: Option<PlayerId>,

    // === History ===
    previous_heights: FxHashMap<WorkerId, u8>,
    action_sequence: u32,
    history: Vector<ActionRecord>,
}

impl GameState {
    /// Fresh state: empty board, Player A to place.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::new(),
            players: PlayerMap::new(|id| Player::new(id, config.god(id))),
            current: PlayerId::A,
            phase: Phase::Placement,
            selected: None,
            climb_blocked: false,
            turn_number: 0,
            winner: None,
            previous_heights: FxHashMap::default(),
            action_sequence: 0,
            history: Vector::new(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The worker acting this turn, if one has been chosen.
    #[must_use]
    pub fn selected_worker(&self) -> Option<WorkerId> {
        self.selected
    }

    /// Check if moving up is forbidden for the current turn.
    #[must_use]
    pub fn climb_blocked(&self) -> bool {
        self.climb_blocked
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.winner.is_some()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Level the worker stood on before its last move. 0 if it never moved.
    #[must_use]
    pub fn previous_height(&self, worker: WorkerId) -> u8 {
        self.previous_heights.get(&worker).copied().unwrap_or(0)
    }

    /// Who owns a worker.
    #[must_use]
    pub fn owner_of(&self, worker: WorkerId) -> Option<PlayerId> {
        self.board.worker(worker).map(|w| w.owner())
    }

    /// Current position of a worker.
    pub fn worker_position(&self, worker: WorkerId) -> Result<Coord, GameError> {
        self.board
            .worker(worker)
            .map(|w| w.position())
            .ok_or_else(|| CapacityViolation::UnknownWorker(worker).into())
    }

    /// Level under a worker.
    pub fn worker_height(&self, worker: WorkerId) -> Result<u8, GameError> {
        self.board.height_at(self.worker_position(worker)?)
    }

    /// Check if both players have placed both workers.
    #[must_use]
    pub fn all_workers_placed(&self) -> bool {
        self.players.iter().all(|(_, p)| p.has_all_workers())
    }

    // === Mutation (crate-internal) ===

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Place a worker for a player, checking capacity before touching the
    /// board.
    pub(crate) fn place_worker(
        &mut self,
        owner: PlayerId,
        at: Coord,
    ) -> Result<WorkerId, GameError> {
        self.players[owner].check_capacity()?;
        let id = self.board.place_worker(at, owner)?;
        self.players[owner].add_worker(id)?;
        Ok(id)
    }

    /// Record the level a worker is about to leave.
    pub(crate) fn record_departure(&mut self, worker: WorkerId) -> Result<(), GameError> {
        let height = self.worker_height(worker)?;
        self.previous_heights.insert(worker, height);
        Ok(())
    }

    pub(crate) fn set_current_player(&mut self, player: PlayerId) {
        self.current = player;
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn select(&mut self, worker: WorkerId) {
        self.selected = Some(worker);
    }

    pub(crate) fn finish(&mut self, winner: PlayerId) {
        self.winner = Some(winner);
    }

    /// Hand the turn to `next`, starting its move phase.
    pub(crate) fn begin_turn(&mut self, next: PlayerId, climb_blocked: bool) {
        self.current = next;
        self.phase = Phase::Move;
        self.selected = None;
        self.climb_blocked = climb_blocked;
        self.turn_number += 1;
    }

    /// Append an accepted action to the history.
    pub(crate) fn record(&mut self, action: Action) {
        let record = ActionRecord::new(self.current, action, self.turn_number, self.action_sequence);
        self.history.push_back(record);
        self.action_sequence += 1;
    }
}
