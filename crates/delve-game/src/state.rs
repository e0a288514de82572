//! Game-state machine and its publisher
//!
//! The director owns the externally driven state and broadcasts
//! transitions; consumers only react to them. It is held by the
//! composition root and passed by reference, never a global.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::events::{EventHub, SubscriberId};

/// The current game state. Transitions are last-write-wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Active gameplay
    InGame,
    /// Game is paused
    Paused,
    /// Main menu (title screen)
    MainMenu,
}

/// Publishes game-state transitions and run-lifecycle events.
pub struct GameDirector {
    state: GameState,
    state_changed: EventHub<GameState>,
    run_started: EventHub<()>,
}

impl GameDirector {
    pub fn new() -> Self {
        Self {
            state: GameState::MainMenu,
            state_changed: EventHub::new(),
            run_started: EventHub::new(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Commit a new state, then notify subscribers.
    pub fn set_state(&mut self, state: GameState) {
        self.state = state;
        info!(?state, "game state changed");
        self.state_changed.emit(&state);
    }

    /// Announce the start of a new run.
    pub fn start_run(&mut self) {
        info!("run started");
        self.run_started.emit(&());
    }

    pub fn on_state_changed(
        &mut self,
        callback: impl FnMut(&GameState) + 'static,
    ) -> SubscriberId {
        self.state_changed.subscribe(callback)
    }

    pub fn on_run_started(&mut self, callback: impl FnMut(&()) + 'static) -> SubscriberId {
        self.run_started.subscribe(callback)
    }

    pub fn unsubscribe_state_changed(&mut self, id: SubscriberId) -> bool {
        self.state_changed.unsubscribe(id)
    }

    pub fn unsubscribe_run_started(&mut self, id: SubscriberId) -> bool {
        self.run_started.unsubscribe(id)
    }

    pub fn state_subscribers(&self) -> usize {
        self.state_changed.len()
    }

    pub fn run_subscribers(&self) -> usize {
        self.run_started.len()
    }
}

impl Default for GameDirector {
    fn default() -> Self {
        Self::new()
    }
}
