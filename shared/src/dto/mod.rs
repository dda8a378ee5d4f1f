//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the wallet's collaborators: the passkey
//! bridge (accounts, vault balance, faucet, transaction broadcast) and the
//! handle resolution service.
//!
//! ## Module Organization
//!
//! - [`account`] - Passkey accounts, connection requests and vault balances
//! - [`transaction`] - Transfer requests, submission responses and handle lookups
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior), except
//!   [`transaction::AssetTransfer`] which is camelCase (`assetId`) to match the
//!   signer's transfer shape
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Amounts**: Integers in the asset's smallest unit, never floats
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/passkeys
//! Content-Type: application/json
//!
//! { "label": "Account 2" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "id": "pk_7f1c",
//!   "label": "Account 2",
//!   "address": "0x5d3f...9a01"
//! }
//! ```

pub mod account;
pub mod transaction;

pub use account::*;
pub use transaction::*;

use serde::{Deserialize, Serialize};

/// Error body returned by collaborator endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
