//! A long-lived game slot for a front end.
//!
//! `Session` holds one [`Game`] that can be reset with new gods. Every
//! mutating call returns the fresh [`GameStateView`] on success, so a caller
//! can forward the result straight to a display. Selectable-cell queries
//! return sorted lists.
//!
//! ```
//! use santorini_rules::session::Session;
//!
//! let mut session = Session::new();
//! session.reset(Some("Apollo"), Some("Atlas")).unwrap();
//! let view = session.place_worker(0, 0).unwrap();
//! assert_eq!(view.current_player, "Player B");
//! ```

use crate::core::{Action, Coord, GameConfig, GameError, Intent};
use crate::game::{Game, GameStateView};

#[derive(Clone, Debug, Default)]
pub struct Session {
    game: Game,
}

impl Session {
    /// A session with a powerless game ready for placement.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A session starting from a specific config.
    pub fn with_config(config: GameConfig) -> Result<Self, GameError> {
        Ok(Self {
            game: Game::new(config)?,
        })
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn view(&self) -> GameStateView {
        self.game.view()
    }

    /// Replace the game with a new one. On error the old game is kept.
    pub fn reset(
        &mut self,
        god_a: Option<&str>,
        god_b: Option<&str>,
    ) -> Result<GameStateView, GameError> {
        let config = GameConfig::from_names(god_a, god_b)?;
        self.game = Game::new(config)?;
        Ok(self.view())
    }

    pub fn place_worker(&mut self, x: i32, y: i32) -> Result<GameStateView, GameError> {
        self.game.place_worker(Coord::new(x, y))?;
        Ok(self.view())
    }

    pub fn move_worker(
        &mut self,
        worker_index: usize,
        x: i32,
        y: i32,
    ) -> Result<GameStateView, GameError> {
        self.game.move_worker(worker_index, Coord::new(x, y))?;
        Ok(self.view())
    }

    pub fn build(&mut self, x: i32, y: i32) -> Result<GameStateView, GameError> {
        self.game.build(Coord::new(x, y))?;
        Ok(self.view())
    }

    pub fn end_turn(&mut self) -> Result<GameStateView, GameError> {
        self.game.end_turn()?;
        Ok(self.view())
    }

    pub fn declare(&mut self, intent: Intent) -> Result<GameStateView, GameError> {
        self.game.declare(intent)?;
        Ok(self.view())
    }

    /// Apply a serialized action.
    pub fn handle(&mut self, action: &Action) -> Result<GameStateView, GameError> {
        self.game.apply(action)?;
        Ok(self.view())
    }

    pub fn selectable_move_cells(&self, worker_index: usize) -> Result<Vec<Coord>, GameError> {
        Ok(self
            .game
            .selectable_move_cells(worker_index)?
            .into_iter()
            .collect())
    }

    pub fn selectable_build_cells(&self, worker_index: usize) -> Result<Vec<Coord>, GameError> {
        Ok(self
            .game
            .selectable_build_cells(worker_index)?
            .into_iter()
            .collect())
    }
}
