//! # Common Error Types
//!
//! Consolidated error handling for the wallet core.
//!
//! This module provides a centralized error type [`AppError`] that covers every
//! failure a collaborator (passkey bridge, chain client, faucet) can report, plus
//! local validation and configuration problems.
//!
//! ## Error Categories
//!
//! - **Creation**: passkey registration rejected or aborted
//! - **Connection**: connecting to an unknown or unavailable account
//! - **Query**: balance and handle lookups (network issues, bad responses)
//! - **Submission**: transaction signing or broadcast failures
//! - **Validation**: local guards (hidden create affordance, invalid draft)
//! - **Config**: invalid environment configuration
//!
//! ## Propagation
//!
//! No error is fatal. Creation/connection failures leave the session in
//! [`Page::Auth`](crate::app::Page::Auth); a failed balance poll keeps the last
//! known balance; a submission failure keeps the draft intact in Compose.
//! The transfer validator never raises: its verdict is a plain boolean.

use thiserror::Error;

/// Wallet-wide error type.
///
/// Each variant carries a human-readable message for display. The type is
/// `Clone` so results can travel inside [`AppEvent`](crate::app::AppEvent)s.
///
/// # Example
///
/// ```rust
/// use passkey_wallet::core::error::AppError;
///
/// let err = AppError::Submission("insufficient funds for fee".to_string());
/// assert_eq!(err.to_string(), "Submission error: insufficient funds for fee");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Passkey account creation failed (user cancelled the prompt, bridge rejected it).
    #[error("Creation error: {0}")]
    Creation(String),

    /// Connecting to an account failed (unknown id, bridge unavailable).
    #[error("Connection error: {0}")]
    Connection(String),

    /// Balance or handle query failed.
    ///
    /// During polling this is treated as "unknown" for one tick.
    #[error("Query error: {0}")]
    Query(String),

    /// Transaction signing or broadcast failed.
    #[error("Submission error: {0}")]
    Submission(String),

    /// A local guard rejected the action.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid configuration value.
    #[error("Config error: {0}")]
    Config(String),
}

impl AppError {
    /// Message without the category prefix, for inline display next to a form.
    pub fn message(&self) -> &str {
        match self {
            AppError::Creation(msg)
            | AppError::Connection(msg)
            | AppError::Query(msg)
            | AppError::Submission(msg)
            | AppError::Validation(msg)
            | AppError::Config(msg) => msg,
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
