//! # Wallet Handlers
//!
//! Handlers for the Wallet page: composing, submitting and leaving transfers,
//! and disconnecting.

use crate::app::events::AppEvent;
use crate::app::handlers::auth::spawn_refresh_accounts;
use crate::app::session::Page;
use crate::app::state::AppState;
use crate::app::tasks::ResolveAction;
use crate::core::error::{AppError, Result};
use crate::utils::constants::TRANSFER_REQUEST_NAME;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::{AssetTransfer, TransferRequest};
use std::sync::Arc;
use tracing::{debug, info, warn};

fn ensure_wallet_page(state: &AppState) -> Result<()> {
    if state.session.page() != Page::Wallet {
        return Err(AppError::Validation("Wallet is not connected".to_string()));
    }
    Ok(())
}

fn no_draft() -> AppError {
    AppError::Validation("No transfer in progress".to_string())
}

/// Handle Send click (Home -> Compose)
///
/// Internal handler function - use [`crate::app::App::handle_open_compose`] instead.
pub(crate) fn handle_open_compose(state: Arc<RwLock<AppState>>) -> Result<()> {
    let mut state = state.write();
    ensure_wallet_page(&state)?;

    let balance = state.session.balance();
    let resolver = state.new_resolver();
    state.wallet.open_compose(balance, resolver)
}

/// Handle a change of the recipient field
///
/// Clears any previous resolution and, for handle-shaped input, schedules a
/// debounced lookup. Re-entering the same text is a no-op.
///
/// Internal handler function - use [`crate::app::App::handle_recipient_input`] instead.
pub(crate) fn handle_recipient_input(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    input: String,
) -> Result<()> {
    let mut guard = state.write();
    let state = &mut *guard;
    let service = state.services.resolver.clone();
    let draft = state.wallet.draft_mut().ok_or_else(no_draft)?;

    if draft.is_submitting() {
        return Err(AppError::Validation("Transfer is being submitted".to_string()));
    }
    if !draft.set_recipient(&input) {
        return Ok(());
    }

    let draft_id = draft.id();
    match draft.resolver.resolve(&input, draft_id, service, event_tx) {
        ResolveAction::Scheduled { generation } => {
            debug!(handle = %input, generation, "Handle lookup scheduled");
        }
        ResolveAction::Cleared => {}
    }
    Ok(())
}

/// Handle a change of the amount field
///
/// Internal handler function - use [`crate::app::App::handle_amount_input`] instead.
pub(crate) fn handle_amount_input(state: Arc<RwLock<AppState>>, amount: String) -> Result<()> {
    let mut state = state.write();
    let draft = state.wallet.draft_mut().ok_or_else(no_draft)?;
    if draft.is_submitting() {
        return Err(AppError::Validation("Transfer is being submitted".to_string()));
    }
    draft.set_amount(&amount);
    Ok(())
}

/// Handle the recipient field's clear affordance
///
/// Internal handler function - use [`crate::app::App::handle_clear_recipient`] instead.
pub(crate) fn handle_clear_recipient(state: Arc<RwLock<AppState>>) -> Result<()> {
    let mut state = state.write();
    let draft = state.wallet.draft_mut().ok_or_else(no_draft)?;
    if draft.is_submitting() {
        return Err(AppError::Validation("Transfer is being submitted".to_string()));
    }
    draft.clear_recipient();
    Ok(())
}

/// Handle Submit click
///
/// Re-validates the draft against the current balance, claims the single
/// submission slot and dispatches the transfer to the transaction collaborator.
///
/// Internal handler function - use [`crate::app::App::handle_submit_transfer`] instead.
pub(crate) fn handle_submit_transfer(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) -> Result<()> {
    let (ticket, services) = {
        let mut state = state.write();
        ensure_wallet_page(&state)?;

        let balance = state.session.balance().unwrap_or(0);
        let decimals = state.config.asset_decimals;
        let ticket = state.wallet.begin_submit(balance, decimals)?;
        (ticket, state.services.clone())
    };

    info!(
        draft_id = %ticket.draft_id,
        amount = ticket.amount,
        recipient = %ticket.recipient,
        "Submitting transfer"
    );

    tokio::spawn(async move {
        let result = async {
            let asset_id = services
                .passkey
                .base_asset_id()
                .await
                .map_err(|e| AppError::Submission(e.message().to_string()))?;

            let request = TransferRequest {
                name: TRANSFER_REQUEST_NAME.to_string(),
                assets: vec![AssetTransfer {
                    asset_id,
                    amount: ticket.amount,
                    to: ticket.recipient.clone(),
                }],
            };
            services.transactions.send_transaction(request).await.map(|response| response.id)
        }
        .await;

        if let Err(e) = &result {
            warn!(draft_id = %ticket.draft_id, error = %e, "Transfer submission failed");
        }

        let _ = event_tx
            .send(AppEvent::TransferSubmitted {
                draft_id: ticket.draft_id,
                amount: ticket.amount,
                recipient: ticket.recipient,
                result,
            })
            .await;
    });

    Ok(())
}

/// Handle Cancel click (Compose -> Home)
///
/// Internal handler function - use [`crate::app::App::handle_cancel_compose`] instead.
pub(crate) fn handle_cancel_compose(state: Arc<RwLock<AppState>>) -> Result<()> {
    let mut state = state.write();
    state.wallet.cancel_compose()
}

/// Handle Back click (Result -> Home)
///
/// Internal handler function - use [`crate::app::App::handle_back`] instead.
pub(crate) fn handle_back(state: Arc<RwLock<AppState>>) -> Result<()> {
    let mut state = state.write();
    state.wallet.back()
}

/// Open the last transaction in the system browser
///
/// Internal handler function - use [`crate::app::App::handle_view_in_explorer`] instead.
pub(crate) fn handle_view_in_explorer(state: Arc<RwLock<AppState>>) -> Result<String> {
    let url = state
        .read()
        .explorer_url()
        .ok_or_else(|| AppError::Validation("No transaction to show".to_string()))?;

    info!(url = %url, "Opening transaction in explorer");
    if let Err(e) = open::that(&url) {
        warn!(url = %url, error = %e, "Failed to open browser");
    }
    Ok(url)
}

/// Handle disconnect click (Wallet -> Auth)
///
/// Local state is reset immediately; the collaborator is told afterwards and
/// the account list is reloaded.
///
/// Internal handler function - use [`crate::app::App::handle_disconnect`] instead.
pub(crate) fn handle_disconnect(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) -> Result<()> {
    let passkey = {
        let mut state = state.write();
        let Some(transition) = state.session.disconnect() else {
            debug!(page = ?state.session.page(), "Disconnect ignored outside Wallet");
            return Ok(());
        };

        info!(from = ?transition.from, "Disconnecting");
        state.poller.stop();
        state.wallet.reset();
        state.faucet = Default::default();
        state.balance_error = None;
        state.auth.reset();
        state.services.passkey.clone()
    };

    tokio::spawn(async move {
        let result = passkey.disconnect().await;
        let _ = event_tx.send(AppEvent::Disconnected(result)).await;
        spawn_refresh_accounts(passkey, event_tx);
    });

    Ok(())
}
