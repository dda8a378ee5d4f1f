//! # Core Abstractions
//!
//! Error types, configuration and collaborator traits shared by every layer of
//! the wallet.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`config`]**: Environment-driven configuration (`WalletConfig`)
//! - **[`service`]**: Collaborator traits for dependency injection
//!   (`PasskeyService`, `TransactionService`, `ResolverService`, `FaucetService`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use passkey_wallet::core::service::Services;
//!
//! // In production: the HTTP bridge client implements every contract
//! let services = Services::from_client(Arc::new(ApiClient::new(&config)?));
//!
//! // In tests: in-memory mocks
//! let services = mock::MockWallet::new().services();
//! ```

pub mod config;
pub mod error;
pub mod service;

#[cfg(test)]
pub(crate) mod mock;

pub use config::WalletConfig;
pub use error::{AppError, Result};
pub use service::{FaucetService, PasskeyService, ResolverService, Services, TransactionService};
