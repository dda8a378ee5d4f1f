//! # Faucet Handlers

use crate::app::events::AppEvent;
use crate::app::session::Page;
use crate::app::state::AppState;
use crate::core::error::{AppError, Result};
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

/// Handle "Get funds" click
///
/// Success is observed through the balance poll, not the request itself.
/// Repeated clicks while a request is outstanding are ignored.
///
/// Internal handler function - use [`crate::app::App::handle_request_funds`] instead.
pub(crate) fn handle_request_funds(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) -> Result<()> {
    let (address, faucet) = {
        let mut state = state.write();
        if state.session.page() != Page::Faucet {
            return Err(AppError::Validation("Faucet is only available before the first deposit".to_string()));
        }
        if state.faucet.funding {
            debug!("Funding already requested");
            return Ok(());
        }
        let address = state
            .session
            .current_account()
            .map(|account| account.address.clone())
            .ok_or_else(|| AppError::Connection("No connected account".to_string()))?;

        state.faucet.funding = true;
        state.faucet.error = None;
        (address, state.services.faucet.clone())
    };

    info!(address = %address, "Requesting faucet funds");

    tokio::spawn(async move {
        let result = faucet.request_funds(&address).await;
        let _ = event_tx.send(AppEvent::FaucetRequested(result)).await;
    });

    Ok(())
}
