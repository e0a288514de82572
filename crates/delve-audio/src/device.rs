use std::path::Path;

use kira::manager::backend::DefaultBackend;
use kira::manager::{AudioManager, AudioManagerSettings};
use kira::sound::static_sound::{StaticSoundData, StaticSoundHandle, StaticSoundSettings};
use kira::sound::PlaybackState;
use kira::tween::Tween;
use tracing::info;

use crate::backend::{AudioBackend, ChannelId};
use crate::error::AudioError;

struct Channel {
    data: StaticSoundData,
    current: Option<StaticSoundHandle>,
}

/// Kira-backed audio output. Each registered channel holds its clip with
/// volume pre-applied and at most one dedicated handle; one-shots get
/// their own handles and are reaped in `maintain`.
pub struct KiraBackend {
    manager: AudioManager<DefaultBackend>,
    channels: Vec<Channel>,
    one_shots: Vec<StaticSoundHandle>,
}

impl KiraBackend {
    pub fn new() -> Result<Self, AudioError> {
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| AudioError::InitFailed(e.to_string()))?;

        info!("audio backend initialized");

        Ok(Self {
            manager,
            channels: Vec::new(),
            one_shots: Vec::new(),
        })
    }

    /// Load a clip from disk for use with `create_channel`.
    pub fn load_clip(path: &Path) -> Result<StaticSoundData, AudioError> {
        StaticSoundData::from_file(path)
            .map_err(|e| AudioError::LoadFailed(path.to_path_buf(), e.to_string()))
    }
}

impl AudioBackend for KiraBackend {
    type Clip = StaticSoundData;

    fn create_channel(&mut self, clip: StaticSoundData, volume: f32) -> Result<ChannelId, AudioError> {
        let settings = StaticSoundSettings::new().volume(volume as f64);
        self.channels.push(Channel {
            data: clip.with_settings(settings),
            current: None,
        });
        Ok(ChannelId::new(self.channels.len() - 1))
    }

    fn play(&mut self, channel: ChannelId) -> Result<(), AudioError> {
        let ch = self
            .channels
            .get_mut(channel.index())
            .ok_or_else(|| AudioError::PlaybackFailed(format!("unknown channel {}", channel.index())))?;

        // Restart if already playing.
        if let Some(mut handle) = ch.current.take() {
            handle.stop(Tween::default());
        }

        let data = ch.data.clone();
        let handle = self
            .manager
            .play(data)
            .map_err(|e| AudioError::PlaybackFailed(e.to_string()))?;
        self.channels[channel.index()].current = Some(handle);
        Ok(())
    }

    fn play_one_shot(&mut self, channel: ChannelId) -> Result<(), AudioError> {
        let data = self
            .channels
            .get(channel.index())
            .ok_or_else(|| AudioError::PlaybackFailed(format!("unknown channel {}", channel.index())))?
            .data
            .clone();

        let handle = self
            .manager
            .play(data)
            .map_err(|e| AudioError::PlaybackFailed(e.to_string()))?;
        self.one_shots.push(handle);
        Ok(())
    }

    fn stop(&mut self, channel: ChannelId) {
        if let Some(ch) = self.channels.get_mut(channel.index()) {
            if let Some(ref mut handle) = ch.current {
                handle.stop(Tween::default());
            }
            ch.current = None;
        }
    }

    fn stop_all(&mut self) {
        for ch in &mut self.channels {
            if let Some(ref mut handle) = ch.current {
                handle.stop(Tween::default());
            }
            ch.current = None;
        }
        for handle in &mut self.one_shots {
            handle.stop(Tween::default());
        }
        self.one_shots.clear();
    }

    fn maintain(&mut self) {
        self.one_shots.retain(|h| h.state() != PlaybackState::Stopped);
    }
}
