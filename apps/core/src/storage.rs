//! Local snapshot storage, the demo apps' stand-in for browser local storage.
//!
//! One JSON file per fixed key under a configurable directory. Reads never
//! fail: a missing file or a blob that no longer deserializes is treated as
//! "no prior state" and logged, matching how the UI falls back to blank
//! defaults. There is no versioning or migration for these snapshots.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;

/// Key for the last search's result list.
pub const KEY_SEARCH_RESULTS: &str = "searchResults";
/// Key for the last search's parameters.
pub const KEY_SEARCH_PARAMS: &str = "searchParams";
/// Key for the pending booking awaiting payment.
pub const KEY_BOOKING_DATA: &str = "bookingData";

#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Opens (creating if needed) the snapshot directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(LocalStore { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Reads and deserializes the blob stored under `key`.
    /// Absence and malformed content both read as `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = fs::read_to_string(self.path_for(key)).ok()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("discarding malformed snapshot '{key}': {e}");
                None
            }
        }
    }

    /// Serializes `value` under `key`, replacing any prior blob.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let raw = serde_json::to_string(value)?;
        fs::write(self.path_for(key), raw)?;
        Ok(())
    }

    /// Removes the blob under `key`. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) {
        let _ = fs::remove_file(self.path_for(key));
    }
}
