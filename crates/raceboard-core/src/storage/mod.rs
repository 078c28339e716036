mod config;
pub mod database;
pub mod memory;
mod persistence;

pub use config::{Config, DisplayConfig, FeedbackConfig};
pub use database::Database;
pub use memory::MemoryStore;
pub use persistence::{Persistence, SESSION_KEY, TEAMS_KEY};

use std::path::PathBuf;

use crate::error::{CoreError, StorageError};

/// Abstract key-value store the board mirrors its state into.
///
/// Values are opaque strings (JSON in practice). `remove_all` must apply
/// all-or-nothing.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_all(&self, keys: &[&str]) -> Result<(), StorageError>;
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove_all(&self, keys: &[&str]) -> Result<(), StorageError> {
        (**self).remove_all(keys)
    }
}

/// Returns the data directory.
///
/// `RACEBOARD_DATA_DIR` wins if set. Otherwise `~/.config/raceboard[-dev]/`
/// based on `RACEBOARD_ENV` (set `RACEBOARD_ENV=dev` for a development
/// data directory).
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, CoreError> {
    let dir = match std::env::var_os("RACEBOARD_DATA_DIR") {
        Some(explicit) if !explicit.is_empty() => PathBuf::from(explicit),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("RACEBOARD_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("raceboard-dev")
            } else {
                base_dir.join("raceboard")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
