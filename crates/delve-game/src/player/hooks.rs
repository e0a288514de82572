//! Interfaces the player controller drives on its host environment.
//!
//! The host implements these; the controller only calls them. All of
//! them are injected at attach time, never looked up dynamically.

/// A behavior unit (movement, attack, animation, inventory) whose input
/// can be gated on and off. Both calls are idempotent.
pub trait CapabilityModule {
    fn enable_input(&mut self);
    fn disable_input(&mut self);
}

/// Health bar UI. Receives the health / max-health ratio on every
/// damage application and run start.
pub trait HealthDisplay {
    fn set_filling_value(&mut self, ratio: f32);
}

/// Game-over UI panel.
pub trait GameOverPanel {
    fn show(&mut self);
}

/// Global input gate (pause control). Idempotent.
pub trait InputGate {
    fn disable_input(&mut self);
}

/// Controls the owning object's lifetime across scene transitions.
pub trait SceneHost {
    /// Keep the owning object alive across scene reloads.
    fn persist_across_scenes(&mut self);

    /// Return the owning object to the active scene so it is cleaned up
    /// on the next scene teardown instead of surviving indefinitely.
    fn move_to_active_scene(&mut self);
}
