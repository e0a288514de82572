use crate::error::AudioError;

/// Identifies one backend playback channel, bound to a single clip for
/// the lifetime of the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelId(usize);

impl ChannelId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// An audio output the registry delegates playback to.
///
/// Each registered sound gets a dedicated channel at setup. `play`/`stop`
/// drive that channel exclusively; `play_one_shot` spawns an independent,
/// fire-and-forget playback of the channel's clip that may overlap with
/// anything else.
pub trait AudioBackend {
    /// Opaque audio-buffer handle understood by this backend.
    type Clip;

    /// Allocate a channel bound to `clip` at the given volume (0.0-1.0).
    fn create_channel(&mut self, clip: Self::Clip, volume: f32) -> Result<ChannelId, AudioError>;

    /// Start the channel's dedicated playback. A second `play` on an
    /// already-playing channel restarts it.
    fn play(&mut self, channel: ChannelId) -> Result<(), AudioError>;

    /// Overlapping fire-and-forget playback of the channel's clip.
    fn play_one_shot(&mut self, channel: ChannelId) -> Result<(), AudioError>;

    /// Stop the channel's dedicated playback, if any.
    fn stop(&mut self, channel: ChannelId);

    /// Stop every channel and every in-flight one-shot, regardless of
    /// individual play state.
    fn stop_all(&mut self);

    /// Per-frame cleanup hook.
    fn maintain(&mut self) {}
}
