//! # Passkey Endpoints
//!
//! Account listing and registration, vault connection and balance queries.

use shared::dto::{Account, BalanceResponse, BaseAssetResponse, ConnectRequest, CreateAccountRequest};

use super::client::{check_status, network_error, read_json, ApiClient};
use crate::core::error::{AppError, Result};

/// List passkey accounts registered on this device.
pub async fn my_passkeys(client: &ApiClient) -> Result<Vec<Account>> {
    let response = client
        .client
        .get(client.api_endpoint("/api/passkeys"))
        .send()
        .await
        .map_err(network_error(AppError::Query))?;

    read_json(response, AppError::Query).await
}

/// Register a new passkey account. The bridge drives the platform prompt.
#[tracing::instrument(skip(client))]
pub async fn create_account(client: &ApiClient, label: &str) -> Result<Account> {
    tracing::info!("Registering passkey");
    let start = std::time::Instant::now();

    let request = CreateAccountRequest {
        label: label.to_string(),
    };

    let response = client
        .client
        .post(client.api_endpoint("/api/passkeys"))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Passkey registration network error");
            AppError::Creation(format!("Network error: {}", e))
        })?;

    let result = read_json::<Account>(response, AppError::Creation).await;
    match &result {
        Ok(account) => tracing::info!(
            account_id = %account.id,
            duration_ms = start.elapsed().as_millis() as u64,
            "Passkey registered"
        ),
        Err(e) => tracing::warn!(error = %e, "Passkey registration failed"),
    }
    result
}

/// Connect the vault of an existing account.
#[tracing::instrument(skip(client))]
pub async fn connect(client: &ApiClient, account_id: &str) -> Result<()> {
    let request = ConnectRequest {
        account_id: account_id.to_string(),
    };

    let response = client
        .client
        .post(client.api_endpoint("/api/connect"))
        .json(&request)
        .send()
        .await
        .map_err(network_error(AppError::Connection))?;

    check_status(response, AppError::Connection).await?;
    Ok(())
}

pub async fn disconnect(client: &ApiClient) -> Result<()> {
    let response = client
        .client
        .post(client.api_endpoint("/api/disconnect"))
        .send()
        .await
        .map_err(network_error(AppError::Connection))?;

    check_status(response, AppError::Connection).await?;
    Ok(())
}

/// Base asset balance of the connected vault, in smallest units.
pub async fn get_balance(client: &ApiClient) -> Result<u64> {
    let response = client
        .client
        .get(client.api_endpoint("/api/balance"))
        .send()
        .await
        .map_err(network_error(AppError::Query))?;

    let balance: BalanceResponse = read_json(response, AppError::Query).await?;
    tracing::trace!(address = %balance.address, amount = balance.amount, "Balance fetched");
    Ok(balance.amount)
}

pub async fn base_asset_id(client: &ApiClient) -> Result<String> {
    let response = client
        .client
        .get(client.api_endpoint("/api/base-asset"))
        .send()
        .await
        .map_err(network_error(AppError::Query))?;

    let asset: BaseAssetResponse = read_json(response, AppError::Query).await?;
    Ok(asset.asset_id)
}
