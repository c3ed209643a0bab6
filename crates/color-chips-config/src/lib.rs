use color_chips_engine::ChipOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// On-disk configuration.
///
/// ```toml
/// [chips.chipStyle]
/// border-radius = "0"
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub chips: ChipOptions,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/color-chips");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_chips_engine::{ChipStyles, StyleMap};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/color-chips/config.toml"));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_style_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            r#"
[chips.wrapperStyle]
margin-right = "4px"

[chips.chipStyle]
border-radius = "0"
width = "12px"
"#,
        );

        let config = Config::load_from_path(&path).unwrap().unwrap();

        assert_eq!(
            config.chips.wrapper_style,
            StyleMap::new().with("margin-right", "4px")
        );
        assert_eq!(config.chips.chip_style.get("border-radius"), Some("0"));
        assert_eq!(config.chips.chip_style.get("width"), Some("12px"));

        let styles = ChipStyles::resolve(&config.chips);
        assert!(styles.chip.contains("width:12px"));
        assert!(styles.chip.contains("border-radius:0"));
        assert!(styles.wrapper.contains("margin-right:4px"));
    }

    #[test]
    fn test_snake_case_keys_accepted() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            r#"
[chips.chip_style]
height = "8px"
"#,
        );

        let config = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(config.chips.chip_style.get("height"), Some("8px"));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "");

        let config = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(config.chips, ChipOptions::default());
    }

    #[test]
    fn test_non_string_value_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            r#"
[chips.chipStyle]
width = 10
"#,
        );

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            chips: ChipOptions::default().with_chip_style("border-radius", "0"),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original.chips, deserialized.chips);
    }
}
