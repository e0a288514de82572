//! Player health and lifecycle controller.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{info, warn};

use crate::events::{EventHub, SubscriberId};
use crate::state::{GameDirector, GameState};

use super::hooks::{CapabilityModule, GameOverPanel, HealthDisplay, InputGate, SceneHost};

/// Everything the player drives on its environment, injected at attach.
pub struct PlayerDeps {
    pub movement: Box<dyn CapabilityModule>,
    pub attack: Box<dyn CapabilityModule>,
    pub animation: Box<dyn CapabilityModule>,
    pub inventory: Box<dyn CapabilityModule>,
    pub health_bar: Box<dyn HealthDisplay>,
    pub game_over: Box<dyn GameOverPanel>,
    pub input_gate: Box<dyn InputGate>,
    pub scene: Box<dyn SceneHost>,
}

/// Initial player tuning.
#[derive(Debug, Clone, Copy)]
pub struct PlayerConfig {
    pub max_health: i32,
    pub invincible: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_health: 150,
            invincible: false,
        }
    }
}

/// The player: health state, capability wiring, and reactions to
/// game-state transitions. Constructed only through [`PlayerSlot`].
pub struct Player {
    max_health: i32,
    health: i32,
    invincible: bool,
    deps: PlayerDeps,
    hit_events: EventHub<()>,
    death_events: EventHub<()>,
    state_sub: Option<SubscriberId>,
    run_sub: Option<SubscriberId>,
    marked_for_destroy: bool,
}

impl Player {
    fn new(config: PlayerConfig, deps: PlayerDeps) -> Self {
        Self {
            max_health: config.max_health,
            health: config.max_health,
            invincible: config.invincible,
            deps,
            hit_events: EventHub::new(),
            death_events: EventHub::new(),
            state_sub: None,
            run_sub: None,
            marked_for_destroy: false,
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn invincible(&self) -> bool {
        self.invincible
    }

    pub fn set_invincible(&mut self, invincible: bool) {
        self.invincible = invincible;
    }

    /// Change the health cap. A full-health player stays at full health
    /// when the cap rises; a damaged player keeps its current health.
    /// Health never exceeds the cap.
    pub fn set_max_health(&mut self, max_health: i32) {
        if self.health == self.max_health {
            self.health = max_health;
        }
        self.max_health = max_health;
        self.health = self.health.min(self.max_health);
    }

    /// Subscribe to hit notifications, fired after the health mutation
    /// and UI update have committed.
    ///
    /// Callbacks run while the player is mutably borrowed: they must
    /// not call back into the player through a shared handle. Read any
    /// player state after `apply_damage` returns instead.
    pub fn on_hit(&mut self, callback: impl FnMut(&()) + 'static) -> SubscriberId {
        self.hit_events.subscribe(callback)
    }

    /// Subscribe to the death notification, fired after every death
    /// side effect has run. The same re-entrancy rule as [`Player::on_hit`]
    /// applies.
    pub fn on_death(&mut self, callback: impl FnMut(&()) + 'static) -> SubscriberId {
        self.death_events.subscribe(callback)
    }

    pub fn unsubscribe_hit(&mut self, id: SubscriberId) -> bool {
        self.hit_events.unsubscribe(id)
    }

    pub fn unsubscribe_death(&mut self, id: SubscriberId) -> bool {
        self.death_events.unsubscribe(id)
    }

    /// Apply incoming damage.
    ///
    /// Health may go negative on the killing blow; it is pushed to the
    /// UI unclamped. The death transition is terminal and its side
    /// effects run in a fixed order that external observers rely on.
    pub fn apply_damage(&mut self, amount: u32) {
        if !self.invincible {
            // Oversized hits must never wrap into a heal.
            let amount = i32::try_from(amount).unwrap_or(i32::MAX);
            self.health = self.health.saturating_sub(amount);
        }

        // UI sees the new ratio before the hit/death branch resolves.
        self.deps.health_bar.set_filling_value(self.health_ratio());

        if self.health > 0 {
            self.hit_events.emit(&());
        } else {
            self.deps.movement.disable_input();
            self.deps.attack.disable_input();
            self.deps.animation.disable_input();
            self.deps.input_gate.disable_input();
            self.deps.game_over.show();
            // The owning object no longer survives scene teardown.
            self.deps.scene.move_to_active_scene();
            self.death_events.emit(&());
        }
    }

    /// Pure UI refresh at the start of a run; no state mutation.
    pub fn on_run_started(&mut self) {
        self.deps.health_bar.set_filling_value(self.health_ratio());
    }

    /// React to an externally driven state transition.
    pub fn on_game_state_changed(&mut self, state: GameState) {
        match state {
            GameState::InGame => {
                self.deps.movement.enable_input();
                self.deps.attack.enable_input();
                self.deps.animation.enable_input();
            }
            GameState::Paused => {
                self.deps.movement.disable_input();
                self.deps.attack.disable_input();
                self.deps.animation.disable_input();
            }
            GameState::MainMenu => {
                // Teardown happens in PlayerSlot::maintain, outside the
                // director's dispatch.
                self.marked_for_destroy = true;
            }
        }
    }

    pub fn marked_for_destroy(&self) -> bool {
        self.marked_for_destroy
    }

    fn health_ratio(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }

    fn detach(&mut self, director: &mut GameDirector) {
        if let Some(id) = self.state_sub.take() {
            director.unsubscribe_state_changed(id);
        }
        if let Some(id) = self.run_sub.take() {
            director.unsubscribe_run_started(id);
        }
        info!("player detached");
    }
}

/// Composition-root slot enforcing the single-player invariant: the
/// first attach wins, later attaches are rejected before any wiring.
pub struct PlayerSlot {
    active: Option<Rc<RefCell<Player>>>,
}

impl PlayerSlot {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Wire a player into the slot: mark it persistent across scenes,
    /// set health to the cap, and subscribe it to the director's
    /// state-change and run-started events.
    ///
    /// Returns `None` if the slot is already occupied; the rejected
    /// instance performs no wiring and `deps` are dropped untouched.
    pub fn attach(
        &mut self,
        config: PlayerConfig,
        deps: PlayerDeps,
        director: &mut GameDirector,
    ) -> Option<Rc<RefCell<Player>>> {
        if self.active.is_some() {
            warn!("player already attached, rejecting second instance");
            return None;
        }

        let player = Rc::new(RefCell::new(Player::new(config, deps)));
        player.borrow_mut().deps.scene.persist_across_scenes();

        let weak = Rc::downgrade(&player);
        let state_sub = director.on_state_changed(move |state| {
            if let Some(player) = weak.upgrade() {
                player.borrow_mut().on_game_state_changed(*state);
            }
        });
        let weak = Rc::downgrade(&player);
        let run_sub = director.on_run_started(move |_| {
            if let Some(player) = weak.upgrade() {
                player.borrow_mut().on_run_started();
            }
        });

        {
            let mut wired = player.borrow_mut();
            wired.state_sub = Some(state_sub);
            wired.run_sub = Some(run_sub);
        }

        info!(max_health = config.max_health, "player attached");
        self.active = Some(Rc::clone(&player));
        Some(player)
    }

    /// Tear down the active player: unsubscribe from the director so no
    /// callback dangles into a destroyed instance, then drop it.
    pub fn detach(&mut self, director: &mut GameDirector) {
        if let Some(player) = self.active.take() {
            player.borrow_mut().detach(director);
        }
    }

    /// Finalize a destruction requested during event dispatch
    /// (MainMenu). Call once per frame after the director has
    /// dispatched.
    pub fn maintain(&mut self, director: &mut GameDirector) {
        let destroy = self
            .active
            .as_ref()
            .map_or(false, |player| player.borrow().marked_for_destroy);
        if destroy {
            self.detach(director);
        }
    }

    pub fn active(&self) -> Option<Rc<RefCell<Player>>> {
        self.active.clone()
    }
}

impl Default for PlayerSlot {
    fn default() -> Self {
        Self::new()
    }
}
