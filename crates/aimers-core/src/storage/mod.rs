mod config;
pub mod database;
mod store;

pub use config::{Config, GoalsConfig, PlannerConfig, TimerConfig};
pub use database::Database;
pub use store::{keys, KeyValue, StateStore};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns the data directory, creating it if needed.
///
/// `AIMERS_DATA_DIR` overrides the location outright. Otherwise this is
/// `~/.config/aimers[-dev]/`, with `AIMERS_ENV=dev` selecting the
/// development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("AIMERS_DATA_DIR") {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("AIMERS_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("aimers-dev")
            } else {
                base_dir.join("aimers")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
