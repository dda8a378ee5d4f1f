//! # API Client
//!
//! Main HTTP client for bridge and resolver communication.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::dto::{Account, ErrorResponse, TransactionResponse, TransferRequest};

use crate::core::config::WalletConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::{FaucetService, PasskeyService, ResolverService, TransactionService};

/// HTTP client implementing every collaborator contract.
///
/// Wrap it in an `Arc` and hand it to [`Services::from_client`](crate::core::service::Services::from_client).
pub struct ApiClient {
    pub(crate) client: Client,
    api_url: String,
    resolver_url: String,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// Requests time out after `config.http_timeout` so a stalled bridge
    /// surfaces as an error instead of a hung task.
    pub fn new(config: &WalletConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            resolver_url: config.resolver_url.trim_end_matches('/').to_string(),
        })
    }

    /// Bridge URL for `path` (which starts with `/`)
    pub(crate) fn api_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Resolver URL for `path` (which starts with `/`)
    pub(crate) fn resolver_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolver_url, path)
    }
}

/// Decode a successful JSON body, or turn an error status into `into_error`.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: Response,
    into_error: fn(String) -> AppError,
) -> Result<T> {
    let response = check_status(response, into_error).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| into_error(format!("Failed to parse response: {}", e)))
}

/// Pass successful responses through; extract the bridge's error message otherwise.
pub(crate) async fn check_status(response: Response, into_error: fn(String) -> AppError) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(into_error(error_message(status.as_u16(), &body)))
}

/// Prefer the `{"error": ...}` body; fall back to the status code.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(error) => error.error,
        Err(_) => format!("Request failed with status {}", status),
    }
}

pub(crate) fn network_error(into_error: fn(String) -> AppError) -> impl Fn(reqwest::Error) -> AppError {
    move |e| into_error(format!("Network error: {}", e))
}

#[async_trait]
impl PasskeyService for ApiClient {
    async fn my_passkeys(&self) -> Result<Vec<Account>> {
        crate::services::api::passkey::my_passkeys(self).await
    }

    async fn create_account(&self, label: &str) -> Result<Account> {
        crate::services::api::passkey::create_account(self, label).await
    }

    async fn connect(&self, account_id: &str) -> Result<()> {
        crate::services::api::passkey::connect(self, account_id).await
    }

    async fn disconnect(&self) -> Result<()> {
        crate::services::api::passkey::disconnect(self).await
    }

    async fn get_balance(&self) -> Result<u64> {
        crate::services::api::passkey::get_balance(self).await
    }

    async fn base_asset_id(&self) -> Result<String> {
        crate::services::api::passkey::base_asset_id(self).await
    }
}

#[async_trait]
impl TransactionService for ApiClient {
    async fn send_transaction(&self, request: TransferRequest) -> Result<TransactionResponse> {
        crate::services::api::transaction::send_transaction(self, request).await
    }
}

#[async_trait]
impl ResolverService for ApiClient {
    async fn resolve(&self, handle: &str, network_id: u64) -> Result<Option<String>> {
        crate::services::api::resolver::resolve(self, handle, network_id).await
    }
}

#[async_trait]
impl FaucetService for ApiClient {
    async fn request_funds(&self, address: &str) -> Result<()> {
        crate::services::api::faucet::request_funds(self, address).await
    }
}
