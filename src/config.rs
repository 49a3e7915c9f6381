use std::path::Path;

use crate::ai::{SearchConfig, MAX_DEPTH};
use crate::error::ConfigError;
use crate::session::SessionConfig;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub session: SessionConfig,
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

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth == 0 || self.search.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "search.depth must be in 1..={MAX_DEPTH}"
            )));
        }
        if self.session.games == 0 {
            return Err(ConfigError::Validation(
                "session.games must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Render the defaults as TOML, for seeding a config file.
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&AppConfig::default())
            .map_err(|e| ConfigError::Validation(format!("cannot serialize defaults: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Algorithm;
    use crate::game::Side;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.search.algorithm, Algorithm::AlphaBeta);
        assert_eq!(config.search.depth, 5);
        assert_eq!(config.session.games, 10);
        assert_eq!(config.session.seed, None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[search]
algorithm = "expectiminimax-pruned"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.algorithm, Algorithm::ExpectiminimaxPruned);
        // Other fields should be defaults
        assert_eq!(config.search.depth, 5);
        assert_eq!(config.search.side, Side::A);
        assert!(config.session.engine_first);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = AppConfig::default();
        config.search.depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_deep_search() {
        let mut config = AppConfig::default();
        config.search.depth = MAX_DEPTH + 1;
        assert!(config.validate().is_err());
        config.search.depth = MAX_DEPTH;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_games() {
        let mut config = AppConfig::default();
        config.session.games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_algorithm_is_a_parse_error() {
        let result: Result<AppConfig, _> = toml::from_str("[search]\nalgorithm = \"mcts\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c4-search.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[search]
depth = 3
side = "b"

[session]
games = 4
seed = 7
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.search.depth, 3);
        assert_eq!(config.search.side, Side::B);
        assert_eq!(config.session.games, 4);
        assert_eq!(config.session.seed, Some(7));
        // Others are defaults
        assert_eq!(config.search.algorithm, Algorithm::AlphaBeta);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[session]\ngames = 0\n").unwrap();
        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = AppConfig::load(Path::new("nonexistent_config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
