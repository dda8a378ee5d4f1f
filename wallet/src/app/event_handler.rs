//! # Event Handler
//!
//! Applies async task results to application state.
//!
//! Every result is checked against the state it was started for before it is
//! applied: balance ticks must carry the connected account's id, handle
//! lookups must match the live draft, generation and recipient text, and
//! submission results must match the live draft. Anything else is dropped.

use shared::dto::Account;
use uuid::Uuid;

use crate::app::events::{AppEvent, ConnectedAccount};
use crate::app::flow::TransferOutcome;
use crate::app::handlers::auth::spawn_refresh_accounts;
use crate::app::session::{Page, PageTransition};
use crate::app::state::AppState;
use crate::app::App;
use crate::core::error::AppError;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle async event results
    ///
    /// Acquires the write lock per event, never across an await.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::PasskeysLoaded(result) => {
                self.handle_passkeys_loaded(result);
            }
            AppEvent::AccountConnected(result) => {
                self.handle_account_connected(result);
            }
            AppEvent::BalanceUpdated { account_id, result } => {
                self.handle_balance_updated(account_id, result);
            }
            AppEvent::HandleResolved {
                draft_id,
                generation,
                handle,
                address,
            } => {
                self.handle_handle_resolved(draft_id, generation, handle, address);
            }
            AppEvent::FaucetRequested(result) => {
                self.handle_faucet_requested(result);
            }
            AppEvent::TransferSubmitted {
                draft_id,
                amount,
                recipient,
                result,
            } => {
                self.handle_transfer_submitted(draft_id, amount, recipient, result);
            }
            AppEvent::Disconnected(result) => {
                if let Err(e) = result {
                    tracing::warn!(error = %e, "Passkey disconnect failed");
                }
            }
        }
    }
}

impl App {
    fn handle_passkeys_loaded(&mut self, result: Result<Vec<Account>, AppError>) {
        let mut state = self.state.write();
        match result {
            Ok(accounts) => {
                tracing::info!(count = accounts.len(), "Passkey accounts loaded");
                state.auth.set_accounts(accounts);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load passkey accounts");
                state.auth.error = Some(e.message().to_string());
            }
        }
    }

    fn handle_account_connected(&mut self, result: Result<ConnectedAccount, AppError>) {
        tracing::info!(event = "AccountConnected", success = result.is_ok(), "Processing connect result");

        let mut state = self.state.write();
        match result {
            Ok(ConnectedAccount { account, balance }) => {
                state.auth.record(&account);
                state.auth.finish(None);

                let account_id = account.id.clone();
                match state.session.connect(account, balance) {
                    Some(transition) => {
                        tracing::info!(account_id = %account_id, balance, to = ?transition.to, "Account connected");
                        self.apply_transition(&mut state, transition);
                    }
                    None => {
                        tracing::debug!(account_id = %account_id, page = ?state.session.page(), "Connect ignored outside Auth");
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Account connect failed - staying in Auth");
                state.auth.finish(Some(e.message().to_string()));

                // a create may have registered the passkey before the balance query failed
                spawn_refresh_accounts(state.services.passkey.clone(), self.event_tx.clone());
            }
        }
    }

    fn handle_balance_updated(&mut self, account_id: String, result: Result<u64, AppError>) {
        let mut state = self.state.write();
        if state.session.current_account_id() != Some(account_id.as_str()) {
            tracing::debug!(account_id = %account_id, "Dropping balance for a stale account");
            return;
        }

        match result {
            Ok(balance) => {
                state.balance_error = None;
                if let Some(transition) = state.session.apply_balance(balance) {
                    tracing::info!(balance, from = ?transition.from, to = ?transition.to, "Vault funded");
                    self.apply_transition(&mut state, transition);
                }
            }
            Err(e) => {
                state.balance_error = Some(e.message().to_string());
            }
        }
    }

    fn handle_handle_resolved(&mut self, draft_id: Uuid, generation: u64, handle: String, address: Option<String>) {
        let mut state = self.state.write();
        match state.wallet.draft_mut() {
            Some(draft) if draft.id() == draft_id => {
                if draft.apply_resolution(generation, &handle, address) {
                    tracing::debug!(
                        handle = %handle,
                        resolved = draft.resolved_address().is_some(),
                        "Handle resolution applied"
                    );
                }
            }
            _ => {
                tracing::debug!(draft_id = %draft_id, handle = %handle, "Dropping resolution for a discarded draft");
            }
        }
    }

    fn handle_faucet_requested(&mut self, result: Result<(), AppError>) {
        let mut state = self.state.write();
        if state.session.page() != Page::Faucet {
            return;
        }

        match result {
            Ok(()) => tracing::info!("Faucet request accepted - waiting for balance"),
            Err(e) => {
                tracing::warn!(error = %e, "Faucet request failed");
                state.faucet.funding = false;
                state.faucet.error = Some(e.message().to_string());
            }
        }
    }

    fn handle_transfer_submitted(
        &mut self,
        draft_id: Uuid,
        amount: u64,
        recipient: String,
        result: Result<String, AppError>,
    ) {
        let mut state = self.state.write();
        let applied = match result {
            Ok(transaction_id) => {
                tracing::info!(transaction_id = %transaction_id, amount, "Transfer submitted");
                state
                    .wallet
                    .submit_succeeded(draft_id, TransferOutcome::success(transaction_id, amount, recipient))
            }
            Err(e) => state
                .wallet
                .submit_failed(draft_id, TransferOutcome::failed(e.message().to_string(), amount, recipient)),
        };

        if !applied {
            tracing::debug!(draft_id = %draft_id, "Dropping submission result for a discarded draft");
        }
    }

    /// Side effects of a page change: the poller runs exactly while a vault is
    /// connected, and page-local state starts fresh on entry.
    fn apply_transition(&self, state: &mut AppState, transition: PageTransition) {
        match (transition.from, transition.to) {
            (Page::Auth, Page::Faucet | Page::Wallet) => {
                state.faucet = Default::default();
                state.wallet.reset();
                state.balance_error = None;

                if let Some(account_id) = state.session.current_account_id().map(str::to_string) {
                    let interval = state.config.poll_interval;
                    let passkey = state.services.passkey.clone();
                    state.poller.start(account_id, interval, passkey, self.event_tx.clone());
                }
            }
            (Page::Faucet, Page::Wallet) => {
                state.faucet = Default::default();
                state.wallet.reset();
            }
            (_, Page::Auth) => {
                state.poller.stop();
            }
            _ => {}
        }
    }
}
