//! # Application Events
//!
//! Event types for async task communication between background tasks and the
//! single owner of [`AppState`](crate::app::AppState).

use shared::dto::Account;
use uuid::Uuid;

use crate::core::error::AppError;

/// Account connected and its balance queried
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedAccount {
    pub account: Account,
    pub balance: u64,
}

/// Async task results sent to the owner
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Passkey accounts listed
    PasskeysLoaded(Result<Vec<Account>, AppError>),
    /// Create-or-select finished (collaborator call + first balance query)
    AccountConnected(Result<ConnectedAccount, AppError>),
    /// Balance poll tick for an account
    BalanceUpdated {
        account_id: String,
        result: Result<u64, AppError>,
    },
    /// Handle lookup finished (address is `None` on miss or lookup error)
    HandleResolved {
        draft_id: Uuid,
        generation: u64,
        handle: String,
        address: Option<String>,
    },
    /// Faucet request acknowledged or failed
    FaucetRequested(Result<(), AppError>),
    /// Transfer submission finished (transaction id on success)
    TransferSubmitted {
        draft_id: Uuid,
        amount: u64,
        recipient: String,
        result: Result<String, AppError>,
    },
    /// Passkey collaborator acknowledged a disconnect
    Disconnected(Result<(), AppError>),
}
