use serde::{Deserialize, Serialize};

use crate::utils::truncate_address;

/// A passkey-bound on-chain vault.
///
/// Created by the identity collaborator on passkey registration and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Account {
    /// Opaque identifier assigned by the identity collaborator
    pub id: String,
    /// Display name (e.g. "Account 1")
    pub label: String,
    /// Vault address derived from the passkey
    pub address: String,
}

impl Account {
    /// Label and truncated address, as shown in the quick-select list.
    ///
    /// ```rust
    /// use shared::dto::Account;
    ///
    /// let account = Account {
    ///     id: "pk_1".to_string(),
    ///     label: "Account 1".to_string(),
    ///     address: "0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef".to_string(),
    /// };
    /// assert_eq!(account.display_name(), "Account 1 - 0x01234567...cdef");
    /// ```
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.label, truncate_address(&self.address))
    }
}

/// Create account request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateAccountRequest {
    pub label: String,
}

/// Connect request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectRequest {
    pub account_id: String,
}

/// Vault balance of the connected account, in the base asset's smallest unit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalanceResponse {
    pub address: String,
    pub amount: u64,
}

/// Base asset of the connected vault's network
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BaseAssetResponse {
    pub asset_id: String,
}

/// Faucet funding request for a vault address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaucetRequest {
    pub address: String,
}
