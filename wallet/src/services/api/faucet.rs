//! # Faucet Endpoints

use shared::dto::FaucetRequest;

use super::client::{check_status, network_error, ApiClient};
use crate::core::error::{AppError, Result};

/// Ask the test network faucet to fund `address`.
pub async fn request_funds(client: &ApiClient, address: &str) -> Result<()> {
    let request = FaucetRequest {
        address: address.to_string(),
    };

    let response = client
        .client
        .post(client.api_endpoint("/api/faucet"))
        .json(&request)
        .send()
        .await
        .map_err(network_error(AppError::Query))?;

    check_status(response, AppError::Query).await?;
    Ok(())
}
