//! # Service Traits
//!
//! Collaborator contracts consumed by the wallet core. Production
//! implementations live in [`crate::services::api`]; tests use in-memory mocks.

use std::sync::Arc;

use async_trait::async_trait;
use shared::dto::{Account, TransactionResponse, TransferRequest};

use crate::core::error::Result;

/// Passkey / identity collaborator.
///
/// Owns account records and keys; exposes the connected vault.
#[async_trait]
pub trait PasskeyService: Send + Sync {
    /// Accounts registered on this device, in registration order
    async fn my_passkeys(&self) -> Result<Vec<Account>>;

    /// Register a new passkey account (fails with `AppError::Creation`)
    async fn create_account(&self, label: &str) -> Result<Account>;

    /// Connect the vault of an existing account (fails with `AppError::Connection`)
    async fn connect(&self, account_id: &str) -> Result<()>;

    /// Drop the connected vault
    async fn disconnect(&self) -> Result<()>;

    /// Base asset balance of the connected vault, in smallest units (fails with `AppError::Query`)
    async fn get_balance(&self) -> Result<u64>;

    /// Base asset id of the vault's network
    async fn base_asset_id(&self) -> Result<String>;
}

/// Transaction submission collaborator.
#[async_trait]
pub trait TransactionService: Send + Sync {
    /// Sign and broadcast a transfer (fails with `AppError::Submission`)
    async fn send_transaction(&self, request: TransferRequest) -> Result<TransactionResponse>;
}

/// Handle resolution collaborator.
#[async_trait]
pub trait ResolverService: Send + Sync {
    /// Resolve a handle on a network. `Ok(None)` is a miss.
    async fn resolve(&self, handle: &str, network_id: u64) -> Result<Option<String>>;
}

/// Faucet collaborator.
#[async_trait]
pub trait FaucetService: Send + Sync {
    /// Request test funds for an address. Success is observed through the balance poll.
    async fn request_funds(&self, address: &str) -> Result<()>;
}

/// Cloneable bundle of collaborators handed to background tasks.
#[derive(Clone)]
pub struct Services {
    pub passkey: Arc<dyn PasskeyService>,
    pub transactions: Arc<dyn TransactionService>,
    pub resolver: Arc<dyn ResolverService>,
    pub faucet: Arc<dyn FaucetService>,
}

impl Services {
    /// Bundle a single client that implements every collaborator contract.
    pub fn from_client<C>(client: Arc<C>) -> Self
    where
        C: PasskeyService + TransactionService + ResolverService + FaucetService + 'static,
    {
        Self {
            passkey: client.clone(),
            transactions: client.clone(),
            resolver: client.clone(),
            faucet: client,
        }
    }
}
