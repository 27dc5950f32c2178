//! Configuration types.

use std::path::PathBuf;
use std::time::Duration;

/// Agent configuration.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Directory holding the three JSON documents.
    pub data_dir: PathBuf,
    /// Cosmetic per-email delay during bulk processing.
    pub pacing_delay: Duration,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            pacing_delay: Duration::from_millis(100),
        }
    }
}

impl AgentConfig {
    /// Build configuration from environment variables, with defaults.
    ///
    /// - `INBOX_PILOT_DATA_DIR` — data directory (default `./data`)
    /// - `INBOX_PILOT_PACING_MS` — per-email delay in ms (default 100)
    pub fn from_env() -> Self {
        let data_dir = std::env::var("INBOX_PILOT_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        let pacing_ms: u64 = std::env::var("INBOX_PILOT_PACING_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            data_dir,
            pacing_delay: Duration::from_millis(pacing_ms),
        }
    }
}
