//! Log configuration from environment variables

use std::path::PathBuf;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "passkey_wallet=info,warn";

/// Log file name prefix inside the log directory
pub const LOG_FILE_NAME: &str = "wallet.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level filter (e.g., "passkey_wallet=debug,info")
    pub log_level: String,
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_FILTER.to_string(),
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(std::env::var("RUST_LOG").ok(), std::env::var("WALLET_LOG_DIR").ok())
    }

    fn from_vars(log_level: Option<String>, log_dir: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: log_level
                .filter(|level| !level.trim().is_empty())
                .unwrap_or(defaults.log_level),
            log_dir: log_dir.map(PathBuf::from).unwrap_or(defaults.log_dir),
        }
    }

    /// Full path of today's log file prefix
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
