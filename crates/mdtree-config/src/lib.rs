use serde::Deserialize;
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

/// Settings read from `config.toml`. Every key is optional.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Document to parse when no path is given on the command line.
    pub input: Option<PathBuf>,
    /// Refuse inputs larger than this many bytes.
    pub max_input_bytes: Option<u64>,
    /// Print the tree outline after the diagnostics.
    pub dump_tree: bool,
    /// Log filter used when `RUST_LOG` is not set, e.g. `debug`.
    pub log_level: Option<String>,
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

        let mut config = Self::parse(&content).map_err(|source| ConfigError::ConfigParseError {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        // Expand shell variables and tilde in the input path
        config.input = config
            .input
            .map(|input| Self::expand_path(&input).unwrap_or(input));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/mdtree");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    fn write_config(temp_dir: &TempDir, content: &str) -> PathBuf {
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, content).unwrap();
        config_file
    }

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/mdtree/config.toml"));
    }

    #[test]
    fn test_parse_all_keys() {
        let config = Config::parse(
            r#"
input = "/docs/readme.md"
max_input_bytes = 1048576
dump_tree = true
log_level = "debug"
"#,
        )
        .unwrap();

        assert_eq!(
            config,
            Config {
                input: Some(PathBuf::from("/docs/readme.md")),
                max_input_bytes: Some(1_048_576),
                dump_tree: true,
                log_level: Some("debug".to_string()),
            }
        );
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.dump_tree);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(Config::parse("notes_path = \"/tmp\"").is_err());
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("MDTREE_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$MDTREE_TEST_VAR/doc.md");
        let expanded = Config::expand_path(&path);

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/doc.md")));

        unsafe {
            env::remove_var("MDTREE_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_relative_path() {
        let path = PathBuf::from("relative/doc.md");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_expands_input() {
        unsafe {
            env::set_var("MDTREE_DOCS", "/custom/docs");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = write_config(&temp_dir, "input = \"$MDTREE_DOCS/test.md\"\n");

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(config.input, Some(PathBuf::from("/custom/docs/test.md")));

        unsafe {
            env::remove_var("MDTREE_DOCS");
        }
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = write_config(&temp_dir, "dump_tree = \"yes\"\n");

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(
            err.to_string()
                .starts_with(&format!("Failed to parse config file at {}", config_file.display()))
        );
    }

    #[test]
    fn test_load_unreadable_path() {
        let temp_dir = TempDir::new().unwrap();

        // A directory exists but cannot be read as a file
        let err = Config::load_from_path(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigReadError { .. }));
    }
}
