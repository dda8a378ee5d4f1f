//! # Shared Wallet Types
//!
//! This library defines the contract between the wallet core and its
//! collaborators (passkey bridge, chain client, handle resolver).
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for collaborator communication
//!   - **[`dto::account`]**: Passkey accounts and vault balances
//!   - **[`dto::transaction`]**: Transfer requests and handle lookups
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format vault addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with the default display widths
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::TransferRequest;
//! use shared::utils::truncate_address;
//!
//! let request: TransferRequest = serde_json::from_str(
//!     r#"{"name":"send","assets":[{"assetId":"0x00","amount":1,"to":"0x0123456789abcdef"}]}"#,
//! ).unwrap();
//!
//! assert_eq!(request.assets[0].amount, 1);
//! assert_eq!(truncate_address(&request.assets[0].to), "0x01234567...cdef");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
