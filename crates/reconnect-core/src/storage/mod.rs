mod config;
pub mod database;
pub mod migrations;

pub use config::{Config, DisplayConfig, LogConfig, OutputFormat, StorageConfig};
pub use database::{ContactDb, StoreStats};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the data directory, creating it if needed.
///
/// `RECONNECT_DATA_DIR` wins when set. Otherwise `~/.config/reconnect/`, or
/// `~/.config/reconnect-dev/` when `RECONNECT_ENV=dev`.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = resolve_data_dir();
    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DataDir {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}

/// Where [`data_dir`] points, without creating anything.
pub fn resolve_data_dir() -> PathBuf {
    match std::env::var_os("RECONNECT_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("RECONNECT_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("reconnect-dev")
            } else {
                base_dir.join("reconnect")
            }
        }
    }
}
