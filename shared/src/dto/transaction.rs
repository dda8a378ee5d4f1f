use serde::{Deserialize, Serialize};

/// One asset movement inside a transfer request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssetTransfer {
    pub asset_id: String,
    /// Amount in the asset's smallest unit
    pub amount: u64,
    /// Recipient vault address
    pub to: String,
}

/// Transfer request handed to the passkey signer for signing and broadcast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransferRequest {
    /// Request name shown in the passkey prompt
    pub name: String,
    pub assets: Vec<AssetTransfer>,
}

/// Broadcast transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionResponse {
    pub id: String,
}

/// Handle lookup result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolverResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
