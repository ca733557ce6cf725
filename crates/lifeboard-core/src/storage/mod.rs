//! Everything that touches the filesystem: configuration and snapshot loading.
//!
//! The engine modules never call into here.

mod config;
pub mod snapshot;

pub use config::{Config, DataConfig, ProgressConfig, MAX_WINDOW_LENGTH};
pub use snapshot::{find_commitment, load_commitments, parse_commitments, replace_commitment};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the lifeboard config directory, creating it if needed.
///
/// `LIFEBOARD_HOME` overrides the location. Otherwise the directory is
/// `~/.config/lifeboard[-dev]/`, with `LIFEBOARD_ENV=dev` selecting the
/// development one.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("LIFEBOARD_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("LIFEBOARD_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("lifeboard-dev")
            } else {
                base_dir.join("lifeboard")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
