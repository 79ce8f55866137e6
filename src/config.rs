//!
//! Handles application configuration: the signature pattern and the
//! directory driver settings.
//! Configuration is loaded from a `config.toml` file when one exists.

use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::constants::{APP_NAME, CONFIG_FILE_NAME};
use crate::driver::DriverOptions;
use crate::error::{Result, SigScanError};
use crate::pattern::SignaturePattern;

/// Main application configuration structure.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    /// Shape of the resolver signatures to look for.
    #[serde(default)]
    pub pattern: SignaturePattern,
    /// Which files the `rewrite` command touches.
    #[serde(default)]
    pub driver: DriverOptions,
}

/// Returns the default path to the configuration file.
pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| SigScanError::Config("Could not find config directory".to_string()))?
        .join(APP_NAME);
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

/// Gets the configuration path: the override if given, else the default XDG location.
///
/// The CLI fills the override from `--config` or, failing that, from
/// `SIGSCAN_CONFIG_PATH`, so an explicit flag always wins.
pub fn get_config_path_or_default(override_path: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        log::debug!("Using override config path: {}", path.display());
        return Ok(path.clone());
    }
    get_config_path()
}

/// Loads the application configuration from a specified path or the default location.
///
/// A missing file yields the default configuration; nothing is written.
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(override_path: Option<&PathBuf>) -> Result<AppConfig> {
    let config_file_path = get_config_path_or_default(override_path)?;

    if !config_file_path.exists() {
        log::debug!(
            "Config file not found at '{}'. Using defaults.",
            config_file_path.display()
        );
        return Ok(AppConfig::default());
    }

    log::info!("Loading config from '{}'", config_file_path.display());
    let config_content = fs::read_to_string(&config_file_path).map_err(|source| SigScanError::FileRead {
        path: config_file_path.clone(),
        source,
    })?;

    parse_config(&config_content).map_err(|e| {
        log::error!(
            "Failed to parse config file at '{}': {}. Ensure it is valid TOML.",
            config_file_path.display(),
            e
        );
        e
    })
}

/// Parses configuration TOML.
pub fn parse_config(content: &str) -> Result<AppConfig> {
    toml::from_str(content).map_err(|e| SigScanError::Config(format!("Failed to parse configuration file: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::CaptureClass;
    use tempfile::tempdir;

    #[test]
    fn test_empty_config_is_default() {
        let config = parse_config("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.pattern.receiver_prefix, "func (r *Resolver) ");
        assert_eq!(config.driver.suffix, ".resolvers.go");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config(
            r#"
[pattern]
capture_class = "narrow"

[driver]
exclude = ["schema.resolvers.go"]
recursive = true
"#,
        )
        .unwrap();
        assert_eq!(config.pattern.capture_class, CaptureClass::Narrow);
        assert_eq!(config.pattern.leading_param, "ctx context.Context");
        assert_eq!(config.driver.exclude, vec!["schema.resolvers.go".to_string()]);
        assert!(config.driver.recursive);
        assert_eq!(config.driver.suffix, ".resolvers.go");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let err = parse_config("[pattern]\ncapture_class = \"everything\"").unwrap_err();
        assert!(matches!(err, SigScanError::Config(_)));
    }

    #[test]
    fn test_load_from_override_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[pattern]\nreceiver_prefix = \"func (r *queryResolver) \"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.pattern.receiver_prefix, "func (r *queryResolver) ");
    }

    #[test]
    fn test_override_path_wins_over_env() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flag.toml");
        std::env::set_var(crate::constants::CONFIG_PATH_ENV_VAR, dir.path().join("env.toml"));
        let resolved = get_config_path_or_default(Some(&path));
        std::env::remove_var(crate::constants::CONFIG_PATH_ENV_VAR);
        assert_eq!(resolved.unwrap(), path);
    }

    #[test]
    fn test_load_missing_override_is_default() {
        let dir = tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
