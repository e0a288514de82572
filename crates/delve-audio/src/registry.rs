use std::collections::HashSet;

use tracing::{error, info, warn};

use crate::backend::{AudioBackend, ChannelId};
use crate::error::AudioError;

/// One named sound to register: a clip handle plus its playback volume.
pub struct SoundDef<C> {
    pub name: String,
    pub clip: C,
    pub volume: f32,
}

impl<C> SoundDef<C> {
    pub fn new(name: impl Into<String>, clip: C, volume: f32) -> Self {
        Self {
            name: name.into(),
            clip,
            volume,
        }
    }
}

/// A fixed set of named sounds, each bound to one backend channel.
///
/// Name resolution is case-sensitive exact match. A miss at play/stop
/// time is reported as a diagnostic and the call becomes a no-op; it
/// never aborts the caller.
pub struct SoundRegistry<B: AudioBackend> {
    backend: B,
    channels: Vec<(String, ChannelId)>,
}

impl<B: AudioBackend> SoundRegistry<B> {
    /// Allocate one channel per definition. Duplicate names are a setup
    /// error and abort construction.
    pub fn new(backend: B, defs: Vec<SoundDef<B::Clip>>) -> Result<Self, AudioError> {
        let mut backend = backend;
        let mut seen = HashSet::new();
        let mut channels = Vec::with_capacity(defs.len());

        for def in defs {
            if !seen.insert(def.name.clone()) {
                return Err(AudioError::DuplicateSound(def.name));
            }
            let id = backend.create_channel(def.clip, def.volume)?;
            channels.push((def.name, id));
        }

        info!(sounds = channels.len(), "sound registry initialized");
        Ok(Self { backend, channels })
    }

    /// Resolve a sound name to its channel.
    pub fn find(&self, name: &str) -> Option<ChannelId> {
        self.channels
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, id)| *id)
    }

    /// Fire-and-forget playback, overlapping with anything in progress.
    pub fn play_one_shot(&mut self, name: &str) {
        let Some(id) = self.find(name) else {
            error!("couldn't find a sound named '{name}'");
            return;
        };
        if let Err(e) = self.backend.play_one_shot(id) {
            warn!("one-shot playback of '{name}' failed: {e}");
        }
    }

    /// Start the sound's dedicated channel.
    pub fn play(&mut self, name: &str) {
        let Some(id) = self.find(name) else {
            error!("couldn't find a sound named '{name}'");
            return;
        };
        if let Err(e) = self.backend.play(id) {
            warn!("playback of '{name}' failed: {e}");
        }
    }

    /// Stop the sound's dedicated channel.
    pub fn stop(&mut self, name: &str) {
        let Some(id) = self.find(name) else {
            error!("couldn't find a sound named '{name}'");
            return;
        };
        self.backend.stop(id);
    }

    /// Stop every channel unconditionally.
    pub fn stop_all(&mut self) {
        self.backend.stop_all();
    }

    /// Call each frame to let the backend clean up finished sounds.
    pub fn update(&mut self) {
        self.backend.maintain();
    }

    /// Registered sound names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.channels.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeBackend {
        commands: Vec<String>,
        channels: usize,
    }

    impl AudioBackend for FakeBackend {
        type Clip = &'static str;

        fn create_channel(&mut self, clip: &'static str, volume: f32) -> Result<ChannelId, AudioError> {
            self.commands.push(format!("create {clip}@{volume}"));
            self.channels += 1;
            Ok(ChannelId::new(self.channels - 1))
        }

        fn play(&mut self, channel: ChannelId) -> Result<(), AudioError> {
            self.commands.push(format!("play {}", channel.index()));
            Ok(())
        }

        fn play_one_shot(&mut self, channel: ChannelId) -> Result<(), AudioError> {
            self.commands.push(format!("oneshot {}", channel.index()));
            Ok(())
        }

        fn stop(&mut self, channel: ChannelId) {
            self.commands.push(format!("stop {}", channel.index()));
        }

        fn stop_all(&mut self) {
            self.commands.push("stop_all".to_string());
        }
    }

    fn registry() -> SoundRegistry<FakeBackend> {
        SoundRegistry::new(
            FakeBackend::default(),
            vec![
                SoundDef::new("jump", "jump.ogg", 0.8),
                SoundDef::new("coin", "coin.ogg", 1.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn allocates_one_channel_per_entry() {
        let registry = registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.backend().commands,
            vec!["create jump.ogg@0.8", "create coin.ogg@1"]
        );
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["jump", "coin"]);
    }

    #[test]
    fn duplicate_names_fail_setup() {
        let result = SoundRegistry::new(
            FakeBackend::default(),
            vec![
                SoundDef::new("jump", "a.ogg", 1.0),
                SoundDef::new("jump", "b.ogg", 1.0),
            ],
        );
        assert!(matches!(result, Err(AudioError::DuplicateSound(name)) if name == "jump"));
    }

    #[test]
    fn find_is_case_sensitive_exact_match() {
        let registry = registry();
        assert!(registry.find("jump").is_some());
        assert!(registry.find("Jump").is_none());
        assert!(registry.find("jum").is_none());
        assert!(registry.find("explosion").is_none());
    }

    #[test]
    fn missing_sound_is_a_no_op() {
        let mut registry = registry();
        let setup_commands = registry.backend().commands.len();

        registry.play_one_shot("explosion");
        registry.play("explosion");
        registry.stop("explosion");

        assert_eq!(registry.backend().commands.len(), setup_commands);
    }

    #[test]
    fn one_shots_overlap_on_the_same_channel() {
        let mut registry = registry();
        registry.play_one_shot("jump");
        registry.play_one_shot("jump");

        let oneshots: Vec<_> = registry
            .backend()
            .commands
            .iter()
            .filter(|c| c.starts_with("oneshot"))
            .collect();
        assert_eq!(oneshots, vec!["oneshot 0", "oneshot 0"]);
    }

    #[test]
    fn play_and_stop_drive_the_dedicated_channel() {
        let mut registry = registry();
        registry.play("coin");
        registry.stop("coin");

        let commands = &registry.backend().commands;
        assert!(commands.contains(&"play 1".to_string()));
        assert!(commands.contains(&"stop 1".to_string()));
    }

    #[test]
    fn stop_all_is_unconditional() {
        let mut registry = registry();
        // Nothing playing; stop_all still reaches the backend.
        registry.stop_all();
        assert!(registry.backend().commands.contains(&"stop_all".to_string()));
    }
}
