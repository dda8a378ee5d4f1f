//! # Logging Infrastructure
//!
//! File-based structured logging for the wallet. Stdout belongs to the
//! console driver, so every log line goes to `logs/wallet.log` (daily
//! rotation) instead.
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at startup, before the runtime spawns anything
//! passkey_wallet::debug::init();
//!
//! tracing::info!(account_id = "pk_1", "Account connected");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `passkey_wallet=debug,info`)
//! - `WALLET_LOG_DIR`: Log directory (default: `logs`)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init as init_logger;

/// Initialize logging and the panic hook.
pub fn init() {
    init_logger();
}
