//! TOML config for the standalone harness.
//!
//! All fields carry serde defaults so partial files work out of the box.
//! Loading never logs: main decides what to report once the subscriber
//! is installed.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use lathe_common::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default tracing filter directive when no CLI override is given.
    pub log_level: String,
    /// Whether to issue the startup `getState` pull.
    pub pull_state_on_start: bool,
    /// Tab to select after startup, wire-form id (e.g. "preview").
    pub start_tab: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "lathe=info".into(),
            pull_state_on_start: true,
            start_tab: None,
        }
    }
}

/// Platform default: `<config_dir>/lathe/shell.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("lathe").join("shell.toml"))
}

/// Load config from a specific TOML file path.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load from the override path if given, otherwise from the platform
/// default. A missing default file just means defaults; a missing
/// override path is an error the user should hear about.
pub fn load(override_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match override_path {
        Some(path) => load_from_path(path),
        None => {
            let path = default_config_path()?;
            if !path.exists() {
                return Ok(AppConfig::default());
            }
            load_from_path(&path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn partial_file_fills_defaults() {
        let file = write_config("start_tab = \"preview\"\n");
        let config = load_from_path(file.path()).unwrap();
        assert_eq!(config.start_tab.as_deref(), Some("preview"));
        assert_eq!(config.log_level, "lathe=info");
        assert!(config.pull_state_on_start);
    }

    #[test]
    fn full_file_round_trips() {
        let file = write_config(
            "log_level = \"lathe=debug\"\npull_state_on_start = false\nstart_tab = \"device\"\n",
        );
        let config = load_from_path(file.path()).unwrap();
        assert_eq!(config.log_level, "lathe=debug");
        assert!(!config.pull_state_on_start);
        assert_eq!(config.start_tab.as_deref(), Some("device"));
    }

    #[test]
    fn garbage_toml_is_a_parse_error() {
        let file = write_config("log_level = [not toml");
        let err = load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn missing_override_path_is_an_error() {
        let err = load(Some(Path::new("/nonexistent/shell.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
