//! # Transaction Endpoints

use shared::dto::{TransactionResponse, TransferRequest};

use super::client::{network_error, read_json, ApiClient};
use crate::core::error::{AppError, Result};

/// Hand a transfer to the bridge for passkey signing and broadcast.
#[tracing::instrument(skip(client, request), fields(name = %request.name, assets = request.assets.len()))]
pub async fn send_transaction(client: &ApiClient, request: TransferRequest) -> Result<TransactionResponse> {
    let start = std::time::Instant::now();

    let response = client
        .client
        .post(client.api_endpoint("/api/transactions"))
        .json(&request)
        .send()
        .await
        .map_err(network_error(AppError::Submission))?;

    let result = read_json::<TransactionResponse>(response, AppError::Submission).await;
    if let Ok(tx) = &result {
        tracing::info!(
            transaction_id = %tx.id,
            duration_ms = start.elapsed().as_millis() as u64,
            "Transaction broadcast"
        );
    }
    result
}
