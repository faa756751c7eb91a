// src/config.rs

//! Configuration loading utilities.

use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::Config;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "data/config.toml";

/// Load configuration for a run.
///
/// An explicitly given file must load. Without one, the default path is
/// tried and defaults are used when it is missing or unreadable.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path).map_err(|e| {
            AppError::config(format!("Failed to load config from {}: {e}", path.display()))
        }),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                Ok(Config::load_or_default(default_path))
            } else {
                log::debug!("No config at {DEFAULT_CONFIG_PATH}; using defaults");
                Ok(Config::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");
        assert!(load_config(Some(&missing)).is_err());
    }

    #[test]
    fn test_explicit_broken_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[loader\nbroken").unwrap();
        assert!(matches!(load_config(Some(&path)), Err(AppError::Config(_))));
    }

    #[test]
    fn test_explicit_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[render]\nasset_base = \"img\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.render.asset_base, "img");
    }
}
