use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine::Difficulty;
use crate::error::ConfigError;

/// Engine configuration, loadable from TOML.
///
/// ```toml
/// difficulty = "medium"
/// node_budget = 500000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Skill level used when the caller does not override it
    pub difficulty: Difficulty,
    /// Optional cap on nodes per search; `None` searches without limit
    pub node_budget: Option<u64>,
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values.
    ///
    /// A given difficulty token replaces the configured level (unknown
    /// tokens mean Easy); a given budget replaces the configured one.
    pub fn with_overrides(
        mut self,
        difficulty: Option<&str>,
        node_budget: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(token) = difficulty {
            self.difficulty = Difficulty::from_token(token);
        }
        if node_budget.is_some() {
            self.node_budget = node_budget;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node_budget == Some(0) {
            return Err(ConfigError::Validation(
                "node_budget must be > 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.node_budget, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let config = EngineConfig::from_toml("difficulty = \"hard\"\nnode_budget = 1000\n").unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.node_budget, Some(1000));
    }

    #[test]
    fn test_parse_partial_config() {
        let config = EngineConfig::from_toml("difficulty = \"medium\"").unwrap();
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.node_budget, None);

        let config = EngineConfig::from_toml("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_unknown_difficulty_in_config_is_easy() {
        let config = EngineConfig::from_toml("difficulty = \"grandmaster\"").unwrap();
        assert_eq!(config.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_numeric_difficulty_codes() {
        let config = EngineConfig::from_toml("difficulty = 2\nnode_budget = 300").unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.node_budget, Some(300));

        let config = EngineConfig::from_toml("difficulty = 1").unwrap();
        assert_eq!(config.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_out_of_range_code_is_easy() {
        let config = EngineConfig::from_toml("difficulty = 7\nnode_budget = 300").unwrap();
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.node_budget, Some(300));
    }

    #[test]
    fn test_overrides_replace_config_values() {
        let base = EngineConfig::from_toml("difficulty = \"medium\"\nnode_budget = 1000").unwrap();

        let merged = base.clone().with_overrides(Some("hard"), Some(50)).unwrap();
        assert_eq!(merged.difficulty, Difficulty::Hard);
        assert_eq!(merged.node_budget, Some(50));

        let merged = base.clone().with_overrides(None, None).unwrap();
        assert_eq!(merged, base);

        let merged = base.with_overrides(Some("bogus"), None).unwrap();
        assert_eq!(merged.difficulty, Difficulty::Easy);
        assert_eq!(merged.node_budget, Some(1000));
    }

    #[test]
    fn test_overrides_on_missing_file() {
        let config = EngineConfig::load_or_default(Path::new("/nonexistent/othello.toml"))
            .unwrap()
            .with_overrides(Some("2"), None)
            .unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.node_budget, None);
    }

    #[test]
    fn test_zero_budget_override_rejected() {
        let err = EngineConfig::default()
            .with_overrides(None, Some(0))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_zero_budget_rejected() {
        let err = EngineConfig::from_toml("node_budget = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_bad_toml_rejected() {
        let err = EngineConfig::from_toml("difficulty = ").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config =
            EngineConfig::load_or_default(Path::new("/nonexistent/othello.toml")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_unreadable_file_is_error() {
        let err = EngineConfig::load(Path::new("/nonexistent/othello.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
