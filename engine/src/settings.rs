use serde::{Deserialize, Serialize};

use crate::session_rng::SessionRng;
use crate::types::Difficulty;

/// Engine-side knobs the surrounding session layer may load from a config
/// file: which tier the computer player uses and an optional fixed seed for
/// reproducing a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub difficulty: Difficulty,
    pub rng_seed: Option<u64>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            rng_seed: None,
        }
    }
}

impl EngineSettings {
    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml_ng::to_string(self).map_err(|e| format!("Failed to serialize settings: {}", e))
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize settings: {}", e))
    }

    /// Missing file falls back to defaults; an unreadable or malformed file
    /// is an error.
    pub fn load_from_file(file_path: &str) -> Result<Self, String> {
        let path = std::path::Path::new(file_path);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings file {}: {}", file_path, e))?;
        Self::from_yaml(&content)
    }

    pub fn session_rng(&self) -> SessionRng {
        match self.rng_seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = EngineSettings::default();
        assert_eq!(settings.difficulty, Difficulty::Medium);
        assert_eq!(settings.rng_seed, None);
    }

    #[test]
    fn test_yaml_round_trip() {
        let settings = EngineSettings {
            difficulty: Difficulty::Hard,
            rng_seed: Some(1234),
        };
        let yaml = settings.to_yaml().unwrap();
        assert_eq!(EngineSettings::from_yaml(&yaml).unwrap(), settings);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(EngineSettings::from_yaml("difficulty: Impossible").is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = EngineSettings::load_from_file("does-not-exist.yaml").unwrap();
        assert_eq!(settings, EngineSettings::default());
    }

    #[test]
    fn test_seeded_session_rng() {
        let settings = EngineSettings {
            difficulty: Difficulty::Easy,
            rng_seed: Some(99),
        };
        assert_eq!(settings.session_rng().seed(), 99);
    }
}
