use std::path::Path;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::game::BoardPreset;

/// Board settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Preset name: "normal" (7x6), "big" (9x7), or "small" (5x4).
    pub preset: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            preset: "normal".to_string(),
        }
    }
}

/// AI opponent settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Strategy name: "random" or "heuristic".
    pub strategy: String,
    /// Fixed RNG seed; omit to seed from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            strategy: "heuristic".to_string(),
            seed: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub ai: AiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
            ai: AiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.preset()?;
        match self.ai.strategy.as_str() {
            "random" | "heuristic" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "unknown ai.strategy '{other}' (expected 'random' or 'heuristic')"
                )));
            }
        }
        Ok(())
    }

    /// Parse the configured board preset.
    pub fn preset(&self) -> Result<BoardPreset, ConfigError> {
        BoardPreset::from_str(&self.board.preset)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.preset().unwrap(), BoardPreset::Normal);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
preset = "big"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.preset().unwrap(), BoardPreset::Big);
        // Other fields should be defaults
        assert_eq!(config.ai.strategy, "heuristic");
        assert_eq!(config.ai.seed, None);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.board.preset, "normal");
        assert_eq!(config.ai.strategy, "heuristic");
    }

    #[test]
    fn test_validation_rejects_unknown_preset() {
        let mut config = AppConfig::default();
        config.board.preset = "gigantic".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_strategy() {
        let mut config = AppConfig::default();
        config.ai.strategy = "minimax".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.board.preset, "normal");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
preset = "small"

[ai]
strategy = "random"
seed = 99
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.preset().unwrap(), BoardPreset::Small);
        assert_eq!(config.ai.strategy, "random");
        assert_eq!(config.ai.seed, Some(99));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        std::fs::write(&path, "[board]\npreset = \"gigantic\"\n").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config
            .validate()
            .expect("roundtripped config should be valid");
    }
}
