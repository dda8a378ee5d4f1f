//! # Passkey Wallet - Library Root
//!
//! Client core of a passkey-secured wallet for a test network: every account
//! is an on-chain vault bound to a device passkey. The library owns the
//! session lifecycle, the account directory, faucet funding, transfer
//! composition with debounced handle resolution, and submission. Keys,
//! signing and chain access belong to the collaborators behind
//! [`core::service`].
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              passkey-wallet (this crate)               │
//! ├────────────────────────────────────────────────────────┤
//! │  Tokio          - Async runtime                        │
//! │  async-channel  - Task result events                   │
//! │  parking_lot    - Shared state lock                    │
//! │  Reqwest        - Bridge / resolver HTTP client        │
//! │  rust_decimal   - Exact amount parsing                 │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ HTTP                         │ HTTP
//!          ▼                              ▼
//! ┌─────────────────────┐      ┌─────────────────────────┐
//! │ Passkey/chain bridge│      │   Handle resolver       │
//! └─────────────────────┘      └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: single owner of state, page state machines, background tasks
//!   - `session`: Auth -> Faucet -> Wallet page machine
//!   - `directory`: account list and the create/select flow
//!   - `flow`: Home -> Compose -> Result sub-flow with transfer drafts
//!   - `tasks`: balance poller and debounced handle resolver
//! - **core**: errors, configuration, collaborator traits
//! - **services**: reqwest implementation of the collaborators
//! - **debug**: file logging
//! - **utils**: constants, amount formatting, transfer validation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use passkey_wallet::{App, Services, WalletConfig};
//! use passkey_wallet::services::api::ApiClient;
//!
//! # async fn run() -> passkey_wallet::Result<()> {
//! let config = WalletConfig::from_env()?;
//! let services = Services::from_client(Arc::new(ApiClient::new(&config)?));
//! let mut app = App::new(services, config);
//!
//! app.process_next_event().await; // accounts loaded
//! app.handle_create_account()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! Tests live next to the code in `#[cfg(test)]` modules and run against
//! in-memory collaborators with a paused Tokio clock:
//!
//! ```bash
//! cargo test -p passkey-wallet
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod utils;

pub use app::{App, AppEvent, AppState, Page};
pub use core::{AppError, Result, Services, WalletConfig};
