//! # Bridge API Client Module
//!
//! HTTP client for the passkey/chain bridge and the handle resolver.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and documentation
//! ├── client.rs       - ApiClient struct, response helpers, trait impls
//! ├── passkey.rs      - Accounts, connect/disconnect, balance, base asset
//! ├── transaction.rs  - Transfer submission
//! ├── resolver.rs     - Handle lookup
//! └── faucet.rs       - Test funds
//! ```

pub mod client;
pub mod faucet;
pub mod passkey;
pub mod resolver;
pub mod transaction;

pub use client::ApiClient;
