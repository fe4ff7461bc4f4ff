//! Session driver: an engine plus its current state.

use super::{Command, GameEngine};
use crate::core::error::GameResult;
use crate::core::state::GameState;

/// Drives one game from creation to completion.
///
/// Owns the engine and the latest snapshot. A failed command leaves the
/// held state exactly as it was - reducers never partially mutate.
pub struct Game<E: GameEngine> {
    engine: E,
    state: GameState,
}

impl<E: GameEngine> Game<E> {
    /// Start a game with the engine's initial state.
    #[must_use]
    pub fn new(engine: E) -> Self {
        let state = engine.create();
        Self { engine, state }
    }

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The engine's definition.
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Apply one command, advancing the held state on success.
    pub fn apply(&mut self, command: &Command) -> GameResult<&GameState> {
        let next = self.engine.reduce(&self.state, command)?;
        self.state = next;
        Ok(&self.state)
    }

    /// Apply a command sequence, stopping at the first failure.
    pub fn apply_all<'a>(
        &mut self,
        commands: impl IntoIterator<Item = &'a Command>,
    ) -> GameResult<&GameState> {
        for command in commands {
            self.apply(command)?;
        }
        Ok(&self.state)
    }
}
