//! Delve - composition root for the dungeon-run game core.
//!
//! Wires the sound registry and the player controller to their host
//! collaborators and drives a short scripted session: run start, a few
//! hits, a pause, and a lethal blow back to the main menu.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use delve_audio::{KiraBackend, SoundDef, SoundManifest, SoundRegistry};
use delve_game::{
    CapabilityModule, GameDirector, GameOverPanel, GameState, HealthDisplay, InputGate,
    PlayerConfig, PlayerDeps, PlayerSlot, SceneHost,
};

/// Stands in for a real movement/attack/animation/inventory module.
struct LoggingCapability {
    name: &'static str,
}

impl CapabilityModule for LoggingCapability {
    fn enable_input(&mut self) {
        info!("{} input enabled", self.name);
    }

    fn disable_input(&mut self) {
        info!("{} input disabled", self.name);
    }
}

struct ConsoleHealthBar;

impl HealthDisplay for ConsoleHealthBar {
    fn set_filling_value(&mut self, ratio: f32) {
        info!(ratio, "health bar updated");
    }
}

struct ConsoleGameOver;

impl GameOverPanel for ConsoleGameOver {
    fn show(&mut self) {
        info!("game over panel shown");
    }
}

struct PauseGate;

impl InputGate for PauseGate {
    fn disable_input(&mut self) {
        info!("global input disabled");
    }
}

struct SceneLifetime;

impl SceneHost for SceneLifetime {
    fn persist_across_scenes(&mut self) {
        info!("player persists across scene reloads");
    }

    fn move_to_active_scene(&mut self) {
        info!("player returned to the active scene");
    }
}

fn build_registry() -> Result<SoundRegistry<KiraBackend>> {
    let manifest = SoundManifest::load(Path::new("assets/sounds.toml"))
        .context("failed to load sound manifest")?;

    let backend = KiraBackend::new().context("failed to initialize audio backend")?;

    let mut defs = Vec::with_capacity(manifest.sounds.len());
    for sound in &manifest.sounds {
        let clip = KiraBackend::load_clip(&sound.path)?;
        defs.push(SoundDef::new(sound.name.clone(), clip, sound.volume));
    }

    Ok(SoundRegistry::new(backend, defs)?)
}

fn player_deps() -> PlayerDeps {
    PlayerDeps {
        movement: Box::new(LoggingCapability { name: "movement" }),
        attack: Box::new(LoggingCapability { name: "attack" }),
        animation: Box::new(LoggingCapability { name: "animation" }),
        inventory: Box::new(LoggingCapability { name: "inventory" }),
        health_bar: Box::new(ConsoleHealthBar),
        game_over: Box::new(ConsoleGameOver),
        input_gate: Box::new(PauseGate),
        scene: Box::new(SceneLifetime),
    }
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    info!("Starting Delve...");

    let mut registry = build_registry()?;
    let mut director = GameDirector::new();
    let mut slot = PlayerSlot::new();

    let player = slot
        .attach(PlayerConfig::default(), player_deps(), &mut director)
        .context("player slot unexpectedly occupied")?;

    director.start_run();
    director.set_state(GameState::InGame);
    registry.play("theme");

    player.borrow_mut().apply_damage(40);
    registry.play_one_shot("player-hurt");

    director.set_state(GameState::Paused);
    director.set_state(GameState::InGame);

    player.borrow_mut().apply_damage(200);
    registry.play_one_shot("player-death");
    registry.stop("theme");

    director.set_state(GameState::MainMenu);
    slot.maintain(&mut director);

    registry.stop_all();
    registry.update();

    info!("session finished");
    Ok(())
}
