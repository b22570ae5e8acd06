//! Main KhojConfig and conversion methods.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::environment::EnvironmentConfig;

use super::environment::EnvironmentSection;
use super::error::ConfigLoadError;
use super::render::RenderSection;

/// Full VastuKhoj configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct KhojConfig {
    /// Environment generation settings
    #[serde(default)]
    pub environment: EnvironmentSection,

    /// Frame rendering settings
    #[serde(default)]
    pub render: RenderSection,
}

impl KhojConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Convert to EnvironmentConfig
    pub fn to_environment_config(&self) -> EnvironmentConfig {
        EnvironmentConfig {
            size: self.environment.size,
            collectibles: self.environment.collectibles,
            obstacles: self.environment.obstacles,
            max_attempts: self.environment.max_attempts,
            seed: self.environment.seed,
        }
    }

    /// Pause between rendered frames
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.render.frame_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KhojConfig::default();
        assert_eq!(config.environment.size, 5);
        assert_eq!(config.environment.collectibles, 3);
        assert_eq!(config.environment.obstacles, 5);
        assert_eq!(config.render.frame_delay_ms, 500);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "environment:\n  size: 7\n  seed: 42\nrender:\n  enabled: false\n";
        let config = KhojConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.environment.size, 7);
        assert_eq!(config.environment.seed, Some(42));
        assert_eq!(config.environment.collectibles, 3);
        assert_eq!(config.environment.max_attempts, 1000);
        assert!(!config.render.enabled);
        assert!(config.render.show_final);
        assert_eq!(config.render.frame_delay_ms, 500);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = KhojConfig::from_yaml("{}").unwrap();
        assert_eq!(config.environment.size, 5);
        assert!(config.render.enabled);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = KhojConfig::default();
        let yaml = config.to_yaml().unwrap();
        let parsed = KhojConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.environment.size, config.environment.size);
        assert_eq!(parsed.render.frame_delay_ms, config.render.frame_delay_ms);
    }

    #[test]
    fn test_parse_error() {
        let err = KhojConfig::from_yaml("environment: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = KhojConfig::load(Path::new("does/not/exist.yaml")).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Io(_)));
    }

    #[test]
    fn test_to_environment_config() {
        let mut config = KhojConfig::default();
        config.environment.obstacles = 2;
        config.environment.seed = Some(7);
        let env = config.to_environment_config();
        assert_eq!(env.size, 5);
        assert_eq!(env.obstacles, 2);
        assert_eq!(env.seed, Some(7));
        assert_eq!(config.frame_delay(), Duration::from_millis(500));
    }
}
