//! Delve Audio - named sound playback using kira
//!
//! Resolves configured sound names to playback channels and issues
//! play/stop commands to the audio backend. Missing names are logged
//! and ignored so a dropped asset never takes the game down with it.

mod backend;
mod device;
mod error;
mod manifest;
mod registry;

pub use backend::{AudioBackend, ChannelId};
pub use device::KiraBackend;
pub use error::AudioError;
pub use manifest::{SoundFile, SoundManifest};
pub use registry::{SoundDef, SoundRegistry};
