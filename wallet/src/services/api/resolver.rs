//! # Handle Resolver Endpoints

use reqwest::StatusCode;
use shared::dto::ResolverResponse;

use super::client::{network_error, read_json, ApiClient};
use crate::core::error::{AppError, Result};

/// Resolve a handle to a vault address on `network_id`.
///
/// A 404 or an empty `address` is a miss, not an error.
pub async fn resolve(client: &ApiClient, handle: &str, network_id: u64) -> Result<Option<String>> {
    let url = client.resolver_endpoint(&format!("/api/resolve/{}", handle));

    let response = client
        .client
        .get(&url)
        .query(&[("network", network_id)])
        .send()
        .await
        .map_err(network_error(AppError::Query))?;

    if response.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }

    let body: ResolverResponse = read_json(response, AppError::Query).await?;
    Ok(body.address.filter(|address| !address.is_empty()))
}
