//! Delve Game - player lifecycle and game-state logic
//!
//! Provides the player health controller, the game-state publisher, and
//! the multicast event hub that wires them together. Everything runs on
//! a single-threaded, event-driven dispatch owned by the composition
//! root; engine concerns (rendering, audio mixing, input devices) live
//! behind the traits in [`player`].

pub mod events;
pub mod player;
pub mod state;

pub use events::{EventHub, SubscriberId};
pub use player::{
    CapabilityModule, GameOverPanel, HealthDisplay, InputGate, Player, PlayerConfig, PlayerDeps,
    PlayerSlot, SceneHost,
};
pub use state::{GameDirector, GameState};
