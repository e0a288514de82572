//! Sound manifest loaded from TOML
//!
//! The composition root reads a manifest listing the sounds to register
//! and loads each clip from disk before handing the set to the registry.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AudioError;

/// The full list of sounds to register at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct SoundManifest {
    #[serde(default)]
    pub sounds: Vec<SoundFile>,
}

/// One manifest entry: a named clip on disk with its playback volume.
#[derive(Debug, Clone, Deserialize)]
pub struct SoundFile {
    pub name: String,
    pub path: PathBuf,
    #[serde(default = "default_volume")]
    pub volume: f32,
}

fn default_volume() -> f32 {
    1.0
}

impl SoundManifest {
    /// Parse a manifest from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, AudioError> {
        toml::from_str(text).map_err(|e| AudioError::BadManifest(e.to_string()))
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, AudioError> {
        let text = fs::read_to_string(path)
            .map_err(|e| AudioError::LoadFailed(path.to_path_buf(), e.to_string()))?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entries_with_defaulted_volume() {
        let manifest = SoundManifest::from_toml_str(
            r#"
            [[sounds]]
            name = "jump"
            path = "assets/sounds/jump.ogg"
            volume = 0.8

            [[sounds]]
            name = "coin"
            path = "assets/sounds/coin.ogg"
        "#,
        )
        .unwrap();

        assert_eq!(manifest.sounds.len(), 2);
        assert_eq!(manifest.sounds[0].volume, 0.8);
        assert_eq!(manifest.sounds[1].volume, 1.0);
        assert_eq!(manifest.sounds[1].path, PathBuf::from("assets/sounds/coin.ogg"));
    }

    #[test]
    fn empty_manifest_is_valid() {
        let manifest = SoundManifest::from_toml_str("").unwrap();
        assert!(manifest.sounds.is_empty());
    }

    #[test]
    fn rejects_malformed_manifest() {
        let result = SoundManifest::from_toml_str("sounds = 3");
        assert!(matches!(result, Err(AudioError::BadManifest(_))));
    }
}
