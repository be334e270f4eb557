//! The turn loop.
//!
//! `Game` owns the shared [`GameState`] and the current player's [`Power`].
//! Each operation checks the phase, resolves the acting worker, hands the
//! rules to the power, then checks for a win and applies the power's
//! [`Transition`].
//!
//! ## Turn order
//!
//! Placement alternates A, B, A, B. Player A takes the first movement turn.
//! When a turn passes, the outgoing power decides whether the incoming
//! player may move up, and a fresh power is created for the incoming player.
//!
//! ## Worker lock
//!
//! The first move of a turn (or a declaration naming a worker) chooses the
//! acting worker. Every later action that turn must use the same worker.

use std::collections::BTreeSet;

use tracing::{debug, info, instrument, warn};

use super::{GameState, GameStateView};
use crate::board::WorkerId;
use crate::core::{
    Action, CapacityViolation, Coord, GameConfig, GameError, Intent, Phase, PhaseViolation,
    PlayerId,
};
use crate::gods::{God, Power, Transition};

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
    power: Power,
}

impl Default for Game {
    fn default() -> Self {
        Self::from_valid_config(&GameConfig::default())
    }
}

impl Game {
    /// Start a game. Fails if the config is invalid.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::from_valid_config(&config))
    }

    /// Start a game with the given gods for Player A and Player B.
    pub fn with_gods(god_a: God, god_b: God) -> Result<Self, GameError> {
        Self::new(
            GameConfig::new()
                .with_god(PlayerId::A, god_a)
                .with_god(PlayerId::B, god_b),
        )
    }

    fn from_valid_config(config: &GameConfig) -> Self {
        let state = GameState::new(config);
        let power = Power::new(config.god(state.current_player()));
        info!(god_a = %config.god(PlayerId::A), god_b = %config.god(PlayerId::B), "game started");
        Self { state, power }
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The current player's power.
    #[must_use]
    pub fn power(&self) -> &Power {
        &self.power
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.state.is_ended()
    }

    /// Snapshot for display.
    #[must_use]
    pub fn view(&self) -> GameStateView {
        GameStateView::capture(&self.state, &self.power)
    }

    /// Cells the current player's worker could move to.
    pub fn selectable_move_cells(&self, worker_index: usize) -> Result<BTreeSet<Coord>, GameError> {
        self.expect_phase(Phase::Move)?;
        let worker = self.resolve_worker(worker_index)?;
        Ok(self.power.selectable_move_cells(&self.state, worker))
    }

    /// Cells the current player's worker could build on.
    pub fn selectable_build_cells(&self, worker_index: usize) -> Result<BTreeSet<Coord>, GameError> {
        self.expect_build_allowed()?;
        let worker = self.resolve_worker(worker_index)?;
        Ok(self.power.selectable_build_cells(&self.state, worker))
    }

    // === Operations ===

    /// Place the current player's next worker.
    #[instrument(level = "debug", skip(self), fields(player = %self.state.current_player()))]
    pub fn place_worker(&mut self, at: Coord) -> Result<WorkerId, GameError> {
        self.expect_phase(Phase::Placement)?;
        let player = self.state.current_player();
        let worker = self
            .state
            .place_worker(player, at)
            .inspect_err(|err| warn!(%err, "placement rejected"))?;
        self.state.record(Action::PlaceWorker { x: at.x, y: at.y });

        let next = player.opponent();
        self.state.set_current_player(next);
        self.power = Power::new(self.state.player(next).god());
        if self.state.all_workers_placed() {
            self.state.begin_turn(PlayerId::A, false);
            self.power = Power::new(self.state.player(PlayerId::A).god());
            info!("all workers placed");
        }
        Ok(worker)
    }

    /// Move one of the current player's workers.
    #[instrument(level = "debug", skip(self), fields(player = %self.state.current_player()))]
    pub fn move_worker(&mut self, worker_index: usize, to: Coord) -> Result<(), GameError> {
        self.expect_phase(Phase::Move)?;
        let worker = self.resolve_worker(worker_index)?;
        self.power
            .move_worker(&mut self.state, worker, to)
            .inspect_err(|err| warn!(%err, "move rejected"))?;
        self.state.select(worker);
        self.state.record(Action::Move {
            worker_index,
            x: to.x,
            y: to.y,
        });

        if self.power.check_victory(&self.state, worker) {
            let winner = self.state.current_player();
            self.state.finish(winner);
            info!(%winner, "game won");
            return Ok(());
        }
        let transition = self.power.next_phase(&self.state);
        self.advance(transition);
        Ok(())
    }

    /// Build with the worker acting this turn.
    #[instrument(level = "debug", skip(self), fields(player = %self.state.current_player()))]
    pub fn build(&mut self, at: Coord) -> Result<(), GameError> {
        self.expect_build_allowed()?;
        let worker = self
            .state
            .selected_worker()
            .ok_or(PhaseViolation::NoWorkerSelected)?;
        self.power
            .build(&mut self.state, worker, at)
            .inspect_err(|err| warn!(%err, "build rejected"))?;
        self.state.record(Action::Build { x: at.x, y: at.y });

        let transition = self.power.next_phase(&self.state);
        self.advance(transition);
        Ok(())
    }

    /// Decline the optional action the current phase is holding for.
    #[instrument(level = "debug", skip(self), fields(player = %self.state.current_player()))]
    pub fn end_turn(&mut self) -> Result<(), GameError> {
        self.ensure_running()?;
        let transition = self.power.skip_optional(&self.state)?;
        self.state.record(Action::EndTurn);
        self.advance(transition);
        Ok(())
    }

    /// Announce an optional power.
    #[instrument(level = "debug", skip(self), fields(player = %self.state.current_player()))]
    pub fn declare(&mut self, intent: Intent) -> Result<(), GameError> {
        self.ensure_running()?;
        if self.state.phase() == Phase::Placement {
            return Err(PhaseViolation::WrongPhase {
                expected: Phase::Move,
                actual: Phase::Placement,
            }
            .into());
        }
        let worker = intent
            .worker_index()
            .map(|index| self.resolve_worker(index))
            .transpose()?;
        let transition = self
            .power
            .declare(&self.state, intent)
            .inspect_err(|err| warn!(%err, "declaration rejected"))?;
        if let Some(worker) = worker {
            self.state.select(worker);
        }
        self.state.record(Action::from(intent));
        self.advance(transition);
        Ok(())
    }

    /// Apply a serialized action.
    pub fn apply(&mut self, action: &Action) -> Result<(), GameError> {
        match *action {
            Action::PlaceWorker { x, y } => self.place_worker(Coord::new(x, y)).map(|_| ()),
            Action::Move { worker_index, x, y } => self.move_worker(worker_index, Coord::new(x, y)),
            Action::Build { x, y } => self.build(Coord::new(x, y)),
            Action::EndTurn => self.end_turn(),
            Action::DomeBuild => self.declare(Intent::DomeBuild),
            Action::BuildBeforeMove { worker_index } => {
                self.declare(Intent::BuildBeforeMove { worker_index })
            }
            Action::StayInPlace { worker_index } => {
                self.declare(Intent::StayInPlace { worker_index })
            }
        }
    }

    // === Internals ===

    fn ensure_running(&self) -> Result<(), PhaseViolation> {
        if self.state.is_ended() {
            return Err(PhaseViolation::GameEnded);
        }
        Ok(())
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), PhaseViolation> {
        self.ensure_running()?;
        let actual = self.state.phase();
        if actual != expected {
            return Err(PhaseViolation::WrongPhase { expected, actual });
        }
        Ok(())
    }

    fn expect_build_allowed(&self) -> Result<(), PhaseViolation> {
        self.ensure_running()?;
        let actual = self.state.phase();
        if !self.power.can_build_in(actual) {
            return Err(PhaseViolation::WrongPhase {
                expected: Phase::Build,
                actual,
            });
        }
        Ok(())
    }

    /// Map a worker index to the current player's worker, honoring the
    /// worker lock.
    fn resolve_worker(&self, index: usize) -> Result<WorkerId, GameError> {
        let player = self.state.current_player();
        let worker = self
            .state
            .player(player)
            .worker(index)
            .ok_or(CapacityViolation::NoSuchWorker { player, index })?;
        match self.state.selected_worker() {
            Some(selected) if selected != worker => Err(PhaseViolation::WorkerLocked {
                selected,
                requested: worker,
            }
            .into()),
            _ => Ok(worker),
        }
    }

    fn advance(&mut self, transition: Transition) {
        match transition {
            Transition::Hold => debug!(phase = %self.state.phase(), "phase held"),
            Transition::Enter(phase) => {
                self.state.set_phase(phase);
                debug!(%phase, "phase entered");
            }
            Transition::PassTurn => self.pass_turn(),
        }
    }

    fn pass_turn(&mut self) {
        let climb_blocked = self.power.restricts_opponent_climb();
        let next = self.state.current_player().opponent();
        self.state.begin_turn(next, climb_blocked);
        self.power = Power::new(self.state.player(next).god());
        info!(player = %next, turn = self.state.turn_number(), climb_blocked, "turn passed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(god_a: God, god_b: God) -> Game {
        let mut game = Game::with_gods(god_a, god_b).unwrap();
        for (x, y) in [(0, 0), (4, 4), (0, 4), (4, 0)] {
            game.place_worker(Coord::new(x, y)).unwrap();
        }
        game
    }

    #[test]
    fn test_placement_alternates() {
        let mut game = Game::default();
        assert_eq!(game.state().current_player(), PlayerId::A);
        game.place_worker(Coord::new(0, 0)).unwrap();
        assert_eq!(game.state().current_player(), PlayerId::B);
        game.place_worker(Coord::new(1, 0)).unwrap();
        assert_eq!(game.state().current_player(), PlayerId::A);
        game.place_worker(Coord::new(2, 0)).unwrap();
        game.place_worker(Coord::new(3, 0)).unwrap();

        assert_eq!(game.state().phase(), Phase::Move);
        assert_eq!(game.state().current_player(), PlayerId::A);
        assert_eq!(game.state().turn_number(), 1);
        assert_eq!(
            game.state().player(PlayerId::A).workers(),
            &[WorkerId(0), WorkerId(2)]
        );
    }

    #[test]
    fn test_placement_on_occupied_cell_keeps_turn() {
        let mut game = Game::default();
        game.place_worker(Coord::new(0, 0)).unwrap();
        assert!(game.place_worker(Coord::new(0, 0)).is_err());
        assert_eq!(game.state().current_player(), PlayerId::B);
    }

    #[test]
    fn test_standard_turn() {
        let mut game = placed(God::Mortal, God::Mortal);
        game.move_worker(0, Coord::new(1, 1)).unwrap();
        assert_eq!(game.state().phase(), Phase::Build);
        game.build(Coord::new(1, 2)).unwrap();

        assert_eq!(game.state().current_player(), PlayerId::B);
        assert_eq!(game.state().phase(), Phase::Move);
        assert_eq!(game.state().selected_worker(), None);
        assert_eq!(game.state().turn_number(), 2);
    }

    #[test]
    fn test_wrong_phase() {
        let mut game = placed(God::Mortal, God::Mortal);
        let err = game.build(Coord::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            GameError::from(PhaseViolation::WrongPhase {
                expected: Phase::Build,
                actual: Phase::Move
            })
        );
        assert!(game.place_worker(Coord::new(2, 2)).is_err());
    }

    #[test]
    fn test_no_such_worker() {
        let mut game = placed(God::Mortal, God::Mortal);
        let err = game.move_worker(2, Coord::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            GameError::from(CapacityViolation::NoSuchWorker {
                player: PlayerId::A,
                index: 2
            })
        );
    }

    #[test]
    fn test_end_turn_without_option_rejected() {
        let mut game = placed(God::Mortal, God::Mortal);
        let err = game.end_turn().unwrap_err();
        assert_eq!(
            err,
            GameError::from(PhaseViolation::NothingToSkip { phase: Phase::Move })
        );
    }

    #[test]
    fn test_history_records_accepted_actions() {
        let mut game = placed(God::Mortal, God::Mortal);
        assert!(game.move_worker(0, Coord::new(3, 3)).is_err());
        game.move_worker(0, Coord::new(1, 0)).unwrap();

        let history = game.state().history();
        assert_eq!(history.len(), 5);
        let last = history.last().unwrap();
        assert_eq!(last.player, PlayerId::A);
        assert_eq!(
            last.action,
            Action::Move {
                worker_index: 0,
                x: 1,
                y: 0
            }
        );
        assert_eq!(last.turn, 1);
    }

    #[test]
    fn test_duplicate_gods_rejected() {
        let err = Game::with_gods(God::Pan, God::Pan).unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
        assert!(Game::with_gods(God::Mortal, God::Mortal).is_ok());
    }
}
