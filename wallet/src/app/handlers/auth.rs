//! # Authentication Handlers
//!
//! Handlers for the Auth page: listing, creating and selecting passkey accounts.

use crate::app::directory::AuthStep;
use crate::app::events::{AppEvent, ConnectedAccount};
use crate::app::session::Page;
use crate::app::state::AppState;
use crate::core::error::{AppError, Result};
use crate::core::service::PasskeyService;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

/// Reload the account list from the passkey collaborator
pub(crate) fn spawn_refresh_accounts(passkey: Arc<dyn PasskeyService>, event_tx: Sender<AppEvent>) {
    tokio::spawn(async move {
        let result = passkey.my_passkeys().await;
        let _ = event_tx.send(AppEvent::PasskeysLoaded(result)).await;
    });
}

/// Handle accounts refresh
///
/// Internal handler function - use [`crate::app::App::handle_refresh_accounts`] instead.
pub(crate) fn handle_refresh_accounts(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let passkey = state.read().services.passkey.clone();
    spawn_refresh_accounts(passkey, event_tx);
}

/// Handle create account click
///
/// Registers a passkey labelled "Account N+1", connects it, then queries
/// the vault balance. Rejected while another create/select is in flight or when the
/// directory is full.
///
/// Internal handler function - use [`crate::app::App::handle_create_account`] instead.
pub(crate) fn handle_create_account(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) -> Result<()> {
    let (label, passkey) = {
        let mut state = state.write();
        if state.session.page() != Page::Auth {
            debug!(page = ?state.session.page(), "Create ignored outside Auth");
            return Ok(());
        }
        let label = state.auth.begin_create()?;
        (label, state.services.passkey.clone())
    };

    info!(label = %label, "Creating passkey account");

    tokio::spawn(async move {
        let result = async {
            let account = passkey.create_account(&label).await?;
            passkey.connect(&account.id).await?;
            let balance = passkey.get_balance().await?;
            Ok::<_, AppError>(ConnectedAccount { account, balance })
        }
        .await;
        let _ = event_tx.send(AppEvent::AccountConnected(result)).await;
    });

    Ok(())
}

/// Handle quick-select of an existing account
///
/// Internal handler function - use [`crate::app::App::handle_select_account`] instead.
pub(crate) fn handle_select_account(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    account_id: String,
) -> Result<()> {
    let (account, passkey) = {
        let mut state = state.write();
        if state.session.page() != Page::Auth {
            debug!(page = ?state.session.page(), "Select ignored outside Auth");
            return Ok(());
        }
        let account = state.auth.begin_select(&account_id)?;
        (account, state.services.passkey.clone())
    };

    info!(account_id = %account.id, "Connecting passkey account");

    tokio::spawn(async move {
        let result = async {
            passkey.connect(&account.id).await?;
            let balance = passkey.get_balance().await?;
            Ok::<_, AppError>(ConnectedAccount { account, balance })
        }
        .await;
        let _ = event_tx.send(AppEvent::AccountConnected(result)).await;
    });

    Ok(())
}

/// Switch the Auth page between landing, connect and create
///
/// Internal handler function - use [`crate::app::App::handle_auth_step`] instead.
pub(crate) fn handle_auth_step(state: Arc<RwLock<AppState>>, step: AuthStep) {
    let mut state = state.write();
    state.auth.set_step(step);
    state.auth.error = None;
}
