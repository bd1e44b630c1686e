use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every knob has a default so the demo runs with no `.env` at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the JSON snapshots (the local-storage stand-in).
    pub storage_dir: PathBuf,
    /// Fixed artificial latency for the simulated search call.
    pub search_delay: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let storage_dir = std::env::var("STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".journeyman"));

        let delay_ms = std::env::var("SEARCH_DELAY_MS")
            .unwrap_or_else(|_| "500".to_string())
            .parse::<u64>()
            .context("SEARCH_DELAY_MS must be a whole number of milliseconds")?;

        Ok(Config {
            storage_dir,
            search_delay: Duration::from_millis(delay_ms),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
