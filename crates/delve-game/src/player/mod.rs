//! Player controller module
//!
//! Health, damage, and game-state reactions for the single player
//! instance, plus the host-environment traits it drives.

mod controller;
mod hooks;

pub use controller::{Player, PlayerConfig, PlayerDeps, PlayerSlot};
pub use hooks::{CapabilityModule, GameOverPanel, HealthDisplay, InputGate, SceneHost};
