//! # Application Orchestrator
//!
//! The [`App`] struct is the single owner of wallet state. It coordinates user
//! actions, background tasks and the state machines that decide what the user
//! sees.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  App (owner)                                                │
//! │  - handle_*()          user actions, validated under lock   │
//! │  - on_tick()           drains pending task results          │
//! │  - process_next_event() awaits the next task result         │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  Session, AccountDirectory, FaucetState, WalletFlow  │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │  Tokio tasks                                                │
//! │  - connect / create + first balance query                   │
//! │  - BalancePoller (Faucet and Wallet pages)                  │
//! │  - HandleResolver lookups (debounced, one per draft)        │
//! │  - transfer submission, faucet request, disconnect          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tasks never touch state directly. Each result travels back as an
//! [`AppEvent`] and is checked for staleness before it is applied, so a
//! superseded lookup, a poll for a disconnected account or the outcome of a
//! discarded draft cannot change anything.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use passkey_wallet::app::App;
//! use passkey_wallet::core::{Services, WalletConfig};
//!
//! # async fn run(services: Services) {
//! let mut app = App::new(services, WalletConfig::default());
//!
//! loop {
//!     app.process_next_event().await;
//!
//!     let state = app.state.read();
//!     println!("{}", state.session.page().title());
//!     drop(state);
//! }
//! # }
//! ```
//!
//! ## Related Modules
//!
//! - [`session`]: top-level page state machine
//! - [`directory`]: account list and create/select flow
//! - [`flow`]: Wallet page sub-flow and transfer drafts
//! - [`tasks`]: balance poller and handle resolver
//! - [`events`]: task result events

pub mod directory;
pub mod events;
pub mod flow;
pub mod session;
pub mod state;
pub mod tasks;

mod event_handler;
mod handlers;

pub use directory::{AccountDirectory, AuthStep, PendingAuth};
pub use events::{AppEvent, ConnectedAccount};
pub use flow::{TransferDraft, TransferOutcome, TransferStatus, WalletFlow, WalletStep};
pub use session::{Page, PageTransition, Session};
pub use state::{AppState, FaucetState};

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::core::config::WalletConfig;
use crate::core::error::Result;
use crate::core::service::Services;
use event_handler::AppEventHandler;

/// Owner of wallet state and the event channel.
pub struct App {
    /// Shared application state.
    ///
    /// Hold locks briefly; never across an `.await`.
    pub state: Arc<RwLock<AppState>>,

    /// Receiver for async task results.
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into every spawned task.
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create the application in the Auth page and start loading accounts.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(services: Services, config: WalletConfig) -> Self {
        let (event_tx, event_rx) = unbounded();
        let state = Arc::new(RwLock::new(AppState::new(services, config)));

        handlers::auth::handle_refresh_accounts(state.clone(), event_tx.clone());

        Self {
            state,
            event_rx,
            event_tx,
        }
    }

    /// Apply every task result that is already waiting. Never blocks.
    ///
    /// Returns the number of events processed.
    pub fn on_tick(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            processed += 1;
        }

        if processed > 0 {
            tracing::trace!(events = processed, "Processed pending events");
        }
        processed
    }

    /// Wait for the next task result and apply it.
    ///
    /// Returns `false` once the channel is closed.
    pub async fn process_next_event(&mut self) -> bool {
        match self.event_rx.recv().await {
            Ok(event) => {
                self.handle_event(event);
                true
            }
            Err(_) => false,
        }
    }

    /// Apply a single task result
    pub fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    pub fn event_tx(&self) -> Sender<AppEvent> {
        self.event_tx.clone()
    }

    // ========== Auth ==========

    pub fn handle_refresh_accounts(&mut self) {
        handlers::auth::handle_refresh_accounts(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_auth_step(&mut self, step: AuthStep) {
        handlers::auth::handle_auth_step(self.state.clone(), step);
    }

    pub fn handle_create_account(&mut self) -> Result<()> {
        handlers::auth::handle_create_account(self.state.clone(), self.event_tx.clone())
    }

    pub fn handle_select_account(&mut self, account_id: String) -> Result<()> {
        handlers::auth::handle_select_account(self.state.clone(), self.event_tx.clone(), account_id)
    }

    // ========== Faucet ==========

    pub fn handle_request_funds(&mut self) -> Result<()> {
        handlers::faucet::handle_request_funds(self.state.clone(), self.event_tx.clone())
    }

    // ========== Wallet ==========

    pub fn handle_open_compose(&mut self) -> Result<()> {
        handlers::wallet::handle_open_compose(self.state.clone())
    }

    pub fn handle_recipient_input(&mut self, input: String) -> Result<()> {
        handlers::wallet::handle_recipient_input(self.state.clone(), self.event_tx.clone(), input)
    }

    pub fn handle_amount_input(&mut self, amount: String) -> Result<()> {
        handlers::wallet::handle_amount_input(self.state.clone(), amount)
    }

    pub fn handle_clear_recipient(&mut self) -> Result<()> {
        handlers::wallet::handle_clear_recipient(self.state.clone())
    }

    pub fn handle_submit_transfer(&mut self) -> Result<()> {
        handlers::wallet::handle_submit_transfer(self.state.clone(), self.event_tx.clone())
    }

    pub fn handle_cancel_compose(&mut self) -> Result<()> {
        handlers::wallet::handle_cancel_compose(self.state.clone())
    }

    pub fn handle_back(&mut self) -> Result<()> {
        handlers::wallet::handle_back(self.state.clone())
    }

    /// Open the last transaction in the browser; returns the URL
    pub fn handle_view_in_explorer(&mut self) -> Result<String> {
        handlers::wallet::handle_view_in_explorer(self.state.clone())
    }

    pub fn handle_disconnect(&mut self) -> Result<()> {
        handlers::wallet::handle_disconnect(self.state.clone(), self.event_tx.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::core::mock::MockWallet;
    use crate::utils::constants::{DEFAULT_EXPLORER_URL, TRANSFER_REQUEST_NAME};
    use std::time::Duration;
    use tokio::time::Instant;
    use uuid::Uuid;

    const ONE: u64 = 1_000_000_000;
    const ADDR: &str = "0x7175b2d6a01ee3c4e5e2b7a3f3c1d9e8b7a6c5d4e3f2a1b0c9d8e7f6a5b4d5a1";
    const BOB: &str = "0xb0b0000000000000000000000000000000000000000000000000000000000b0b";

    /// Process events until `check` holds; fails after 30s of (virtual) time
    async fn wait_until(app: &mut App, check: impl Fn(&AppState) -> bool) {
        let reached = tokio::time::timeout(Duration::from_secs(30), async {
            loop {
                if check(&app.state.read()) {
                    break;
                }
                app.process_next_event().await;
            }
        })
        .await;
        assert!(reached.is_ok(), "condition not reached");
    }

    /// Let spawned tasks run for `duration`, then drain their events
    async fn settle(app: &mut App, duration: Duration) {
        tokio::time::sleep(duration).await;
        app.on_tick();
    }

    async fn loaded(mock: &Arc<MockWallet>) -> App {
        let mut app = App::new(mock.services(), WalletConfig::default());
        settle(&mut app, Duration::from_millis(1)).await;
        app
    }

    async fn connected(mock: &Arc<MockWallet>) -> App {
        let mut app = loaded(mock).await;
        app.handle_select_account("pk_1".to_string()).unwrap();
        wait_until(&mut app, |s| s.session.page() != Page::Auth).await;
        app
    }

    async fn composing(mock: &Arc<MockWallet>) -> App {
        let mut app = connected(mock).await;
        app.handle_open_compose().unwrap();
        app
    }

    fn page(app: &App) -> Page {
        app.state.read().session.page()
    }

    fn resolved(app: &App) -> Option<String> {
        let state = app.state.read();
        state
            .wallet
            .draft()
            .and_then(|draft| draft.resolved_address().map(str::to_string))
    }

    // ========== Session ==========

    #[tokio::test(start_paused = true)]
    async fn test_accounts_loaded_on_start() {
        let mock = MockWallet::new().with_accounts(2);
        let app = loaded(&mock).await;

        let state = app.state.read();
        assert_eq!(state.session.page(), Page::Auth);
        assert_eq!(state.auth.list().len(), 2);
        assert_eq!(state.auth.step(), AuthStep::Landing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_with_zero_balance_lands_in_faucet() {
        let mock = MockWallet::new().with_accounts(1).with_balances(&[0]);
        let app = connected(&mock).await;

        let state = app.state.read();
        assert_eq!(state.session.page(), Page::Faucet);
        assert_eq!(state.session.current_account_id(), Some("pk_1"));
        assert_eq!(state.poller.account_id(), Some("pk_1"));
        assert!(!state.auth.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_with_positive_balance_lands_in_wallet() {
        let mock = MockWallet::new().with_balances(&[5]);
        let mut app = loaded(&mock).await;
        assert_eq!(app.state.read().auth.step(), AuthStep::Create);

        app.handle_create_account().unwrap();
        wait_until(&mut app, |s| s.session.page() == Page::Wallet).await;

        let state = app.state.read();
        assert_eq!(state.session.balance(), Some(5));
        assert_eq!(state.session.current_account().map(|a| a.label.as_str()), Some("Account 1"));
        assert_eq!(state.auth.list().len(), 1);
        assert_eq!(state.wallet.step(), WalletStep::Home);
        assert_eq!(mock.connect_calls(), 1);
        assert_eq!(mock.connected().as_deref(), Some("pk_1"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_connect_failure_stays_in_auth() {
        let mock = MockWallet::new().with_balances(&[5]).failing_connect("vault locked");
        let mut app = loaded(&mock).await;

        app.handle_create_account().unwrap();
        wait_until(&mut app, |s| s.auth.error.is_some()).await;

        // the registered passkey shows up after the refresh
        wait_until(&mut app, |s| s.auth.list().len() == 1).await;

        let state = app.state.read();
        assert_eq!(state.session.page(), Page::Auth);
        assert_eq!(state.auth.error.as_deref(), Some("vault locked"));
        assert!(!state.auth.is_busy());
        assert_eq!(mock.connect_calls(), 1);
        assert_eq!(mock.balance_queries(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_create_stays_in_auth() {
        let mock = MockWallet::new().failing_create("prompt dismissed");
        let mut app = loaded(&mock).await;

        app.handle_create_account().unwrap();
        wait_until(&mut app, |s| s.auth.error.is_some()).await;

        let state = app.state.read();
        assert_eq!(state.session.page(), Page::Auth);
        assert!(!state.auth.is_busy());
        assert!(!state.poller.is_running());
        assert_eq!(state.auth.error.as_deref(), Some("prompt dismissed"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_select_stays_in_auth() {
        let mock = MockWallet::new().with_accounts(1).failing_connect("vault locked");
        let mut app = loaded(&mock).await;

        app.handle_select_account("pk_1".to_string()).unwrap();
        wait_until(&mut app, |s| s.auth.error.is_some()).await;

        let state = app.state.read();
        assert_eq!(state.session.page(), Page::Auth);
        assert!(!state.auth.is_busy());
        assert_eq!(mock.balance_queries(), 0);

        // a retry is allowed once the slot is released
        drop(state);
        assert!(app.handle_select_account("pk_1".to_string()).is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_balance_failure_after_connect_stays_in_auth() {
        let mock = MockWallet::new().with_accounts(1).with_balance_error("node unreachable");
        let mut app = loaded(&mock).await;

        app.handle_select_account("pk_1".to_string()).unwrap();
        wait_until(&mut app, |s| s.auth.error.is_some()).await;

        let state = app.state.read();
        assert_eq!(state.session.page(), Page::Auth);
        assert_eq!(state.session.balance(), None);
        assert_eq!(state.auth.error.as_deref(), Some("node unreachable"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_faucet_moves_to_wallet_on_third_poll() {
        let mock = MockWallet::new().with_accounts(1).with_balances(&[0, 0, 0, 3]);
        let mut app = connected(&mock).await;
        assert_eq!(page(&app), Page::Faucet);

        let started = Instant::now();
        wait_until(&mut app, |s| s.session.page() == Page::Wallet).await;

        assert!(started.elapsed() >= Duration::from_secs(3));
        assert_eq!(mock.balance_queries(), 4);
        assert_eq!(app.state.read().session.balance(), Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_ignored_outside_auth() {
        let mock = MockWallet::new().with_accounts(2).with_balances(&[5]);
        let mut app = connected(&mock).await;

        assert!(app.handle_select_account("pk_2".to_string()).is_ok());
        settle(&mut app, Duration::from_millis(10)).await;

        let state = app.state.read();
        assert_eq!(state.session.page(), Page::Wallet);
        assert_eq!(state.session.current_account_id(), Some("pk_1"));
        assert!(!state.auth.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_rejected_when_directory_full() {
        let mock = MockWallet::new().with_accounts(4);
        let mut app = loaded(&mock).await;

        assert!(!app.state.read().auth.can_create());
        assert!(matches!(app.handle_create_account(), Err(AppError::Validation(_))));
        assert_eq!(app.state.read().auth.quick_select().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_and_select_are_mutually_exclusive() {
        let mock = MockWallet::new().with_accounts(2);
        let mut app = loaded(&mock).await;

        app.handle_create_account().unwrap();
        assert!(app.handle_select_account("pk_1".to_string()).is_err());

        wait_until(&mut app, |s| s.session.page() != Page::Auth).await;
        assert_eq!(app.state.read().session.current_account_id(), Some("pk_3"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_balance_tick_dropped() {
        let mock = MockWallet::new().with_accounts(1).with_balances(&[0]);
        let mut app = connected(&mock).await;

        app.handle_event(AppEvent::BalanceUpdated {
            account_id: "pk_9".to_string(),
            result: Ok(5),
        });

        let state = app.state.read();
        assert_eq!(state.session.page(), Page::Faucet);
        assert_eq!(state.session.balance(), Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_failure_keeps_last_balance() {
        let mock = MockWallet::new()
            .with_accounts(1)
            .with_balances(&[7 * ONE])
            .with_balance_error("timeout");
        let mut app = connected(&mock).await;

        wait_until(&mut app, |s| s.balance_error.is_some()).await;
        assert_eq!(app.state.read().session.balance(), Some(7 * ONE));
        assert_eq!(page(&app), Page::Wallet);

        mock.set_balance(8 * ONE);
        wait_until(&mut app, |s| s.balance_error.is_none()).await;
        assert_eq!(app.state.read().session.balance(), Some(8 * ONE));
    }

    // ========== Faucet ==========

    #[tokio::test(start_paused = true)]
    async fn test_faucet_request_sets_funding_until_funded() {
        let mock = MockWallet::new().with_accounts(1).with_balances(&[0]);
        let mut app = connected(&mock).await;

        app.handle_request_funds().unwrap();
        assert!(app.state.read().faucet.funding);
        assert!(app.handle_request_funds().is_ok());

        settle(&mut app, Duration::from_millis(10)).await;
        assert_eq!(mock.faucet_calls(), 1);
        assert!(app.state.read().faucet.funding);

        mock.set_balance(ONE);
        wait_until(&mut app, |s| s.session.page() == Page::Wallet).await;
        assert!(!app.state.read().faucet.funding);
    }

    // ========== Handle resolution ==========

    #[tokio::test(start_paused = true)]
    async fn test_lookup_runs_once_for_last_input() {
        let mock = MockWallet::new()
            .with_accounts(1)
            .with_balances(&[10 * ONE])
            .with_handle("alice", ADDR);
        let mut app = composing(&mock).await;

        for input in ["al", "ali", "alic", "alice"] {
            app.handle_recipient_input(input.to_string()).unwrap();
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        wait_until(&mut app, |s| {
            s.wallet.draft().is_some_and(|d| d.resolved_address().is_some())
        })
        .await;

        assert_eq!(mock.resolve_calls(), vec!["alice".to_string()]);
        assert_eq!(resolved(&app).as_deref(), Some(ADDR));
        assert!(!app.state.read().wallet.draft().unwrap().recipient_focused());
    }

    #[tokio::test(start_paused = true)]
    async fn test_inflight_lookup_superseded() {
        let mock = MockWallet::new()
            .with_accounts(1)
            .with_balances(&[10 * ONE])
            .with_handle("alice", ADDR)
            .with_handle("bob", BOB)
            .with_resolve_delay(Duration::from_secs(1));
        let mut app = composing(&mock).await;

        app.handle_recipient_input("alice".to_string()).unwrap();
        tokio::time::sleep(Duration::from_millis(600)).await;
        app.handle_recipient_input("bob".to_string()).unwrap();

        wait_until(&mut app, |s| {
            s.wallet.draft().is_some_and(|d| d.resolved_address().is_some())
        })
        .await;
        settle(&mut app, Duration::from_secs(2)).await;

        assert_eq!(mock.resolve_calls(), vec!["alice".to_string(), "bob".to_string()]);
        assert_eq!(resolved(&app).as_deref(), Some(BOB));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_resolution_event_dropped() {
        let mock = MockWallet::new().with_accounts(1).with_balances(&[10 * ONE]);
        let mut app = composing(&mock).await;
        app.handle_recipient_input("carol".to_string()).unwrap();

        let draft_id = app.state.read().wallet.draft().unwrap().id();
        app.handle_event(AppEvent::HandleResolved {
            draft_id,
            generation: 0,
            handle: "dave".to_string(),
            address: Some(ADDR.to_string()),
        });
        app.handle_event(AppEvent::HandleResolved {
            draft_id: Uuid::new_v4(),
            generation: 1,
            handle: "carol".to_string(),
            address: Some(ADDR.to_string()),
        });

        assert_eq!(resolved(&app), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_address_input_skips_lookup() {
        let mock = MockWallet::new().with_accounts(1).with_balances(&[10 * ONE]);
        let mut app = composing(&mock).await;

        app.handle_recipient_input(ADDR.to_string()).unwrap();
        app.handle_amount_input("3".to_string()).unwrap();
        settle(&mut app, Duration::from_secs(1)).await;

        assert!(mock.resolve_calls().is_empty());
        assert!(app.state.read().draft_is_valid());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unresolved_handle_is_invalid() {
        let mock = MockWallet::new().with_accounts(1).with_balances(&[10 * ONE]);
        let mut app = composing(&mock).await;

        app.handle_recipient_input("nobody".to_string()).unwrap();
        app.handle_amount_input("1".to_string()).unwrap();
        settle(&mut app, Duration::from_secs(1)).await;

        let state = app.state.read();
        assert_eq!(mock.resolve_calls(), vec!["nobody".to_string()]);
        assert!(!state.draft_is_valid());
        assert_eq!(state.draft_error().as_deref(), Some("Invalid recipient address"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_and_reenter_recipient() {
        let mock = MockWallet::new()
            .with_accounts(1)
            .with_balances(&[10 * ONE])
            .with_handle("alice", ADDR);
        let mut app = composing(&mock).await;

        app.handle_recipient_input("alice".to_string()).unwrap();
        settle(&mut app, Duration::from_secs(1)).await;
        assert_eq!(resolved(&app).as_deref(), Some(ADDR));

        // unchanged text keeps the resolution and does not look up again
        app.handle_recipient_input("alice".to_string()).unwrap();
        settle(&mut app, Duration::from_secs(1)).await;
        assert_eq!(resolved(&app).as_deref(), Some(ADDR));
        assert_eq!(mock.resolve_calls().len(), 1);

        app.handle_clear_recipient().unwrap();
        let state = app.state.read();
        let draft = state.wallet.draft().unwrap();
        assert_eq!(draft.raw_recipient(), "");
        assert_eq!(draft.resolved_address(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_aborts_pending_lookup() {
        let mock = MockWallet::new()
            .with_accounts(1)
            .with_balances(&[10 * ONE])
            .with_handle("alice", ADDR);
        let mut app = composing(&mock).await;

        app.handle_recipient_input("alice".to_string()).unwrap();
        app.handle_cancel_compose().unwrap();
        settle(&mut app, Duration::from_secs(1)).await;

        assert!(mock.resolve_calls().is_empty());
        let state = app.state.read();
        assert_eq!(state.wallet.step(), WalletStep::Home);
        assert!(state.wallet.draft().is_none());
    }

    // ========== Transfers ==========

    #[tokio::test(start_paused = true)]
    async fn test_send_flow_end_to_end() {
        let mock = MockWallet::new().with_accounts(1).with_balances(&[10 * ONE]);
        let mut app = composing(&mock).await;

        app.handle_recipient_input(ADDR.to_string()).unwrap();
        app.handle_amount_input("3".to_string()).unwrap();
        app.handle_submit_transfer().unwrap();
        wait_until(&mut app, |s| s.wallet.step() == WalletStep::Result).await;

        let submissions = mock.submissions();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].name, TRANSFER_REQUEST_NAME);
        assert_eq!(submissions[0].assets.len(), 1);
        assert_eq!(submissions[0].assets[0].amount, 3 * ONE);
        assert_eq!(submissions[0].assets[0].to, ADDR);

        {
            let state = app.state.read();
            let outcome = state.wallet.outcome().unwrap();
            assert_eq!(outcome.status, TransferStatus::Success);
            assert_eq!(outcome.amount, 3 * ONE);
            let url = state.explorer_url().unwrap();
            assert!(url.starts_with(&format!("{}tx/0x", DEFAULT_EXPLORER_URL)));
        }

        app.handle_back().unwrap();
        let state = app.state.read();
        assert_eq!(state.wallet.step(), WalletStep::Home);
        assert!(state.wallet.outcome().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolved_handle_is_sent_as_address() {
        let mock = MockWallet::new()
            .with_accounts(1)
            .with_balances(&[10 * ONE])
            .with_handle("bob", BOB);
        let mut app = composing(&mock).await;

        app.handle_recipient_input("bob".to_string()).unwrap();
        app.handle_amount_input("1.5".to_string()).unwrap();
        settle(&mut app, Duration::from_secs(1)).await;
        app.handle_submit_transfer().unwrap();
        wait_until(&mut app, |s| s.wallet.step() == WalletStep::Result).await;

        let submissions = mock.submissions();
        assert_eq!(submissions[0].assets[0].to, BOB);
        assert_eq!(submissions[0].assets[0].amount, 1_500_000_000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submit_rejected_while_pending() {
        let mock = MockWallet::new()
            .with_accounts(1)
            .with_balances(&[10 * ONE])
            .with_submit_delay(Duration::from_secs(1));
        let mut app = composing(&mock).await;

        app.handle_recipient_input(ADDR.to_string()).unwrap();
        app.handle_amount_input("3".to_string()).unwrap();
        app.handle_submit_transfer().unwrap();

        assert!(app.handle_submit_transfer().is_err());
        assert!(app.handle_cancel_compose().is_err());
        assert!(app.handle_amount_input("4".to_string()).is_err());

        wait_until(&mut app, |s| s.wallet.step() == WalletStep::Result).await;
        assert_eq!(mock.submissions().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_failure_keeps_draft() {
        let mock = MockWallet::new()
            .with_accounts(1)
            .with_balances(&[10 * ONE])
            .failing_submit("fee too low");
        let mut app = composing(&mock).await;

        app.handle_recipient_input(ADDR.to_string()).unwrap();
        app.handle_amount_input("3".to_string()).unwrap();
        app.handle_submit_transfer().unwrap();
        wait_until(&mut app, |s| {
            s.wallet.draft().is_some_and(|d| d.last_failure.is_some())
        })
        .await;

        let state = app.state.read();
        let draft = state.wallet.draft().unwrap();
        assert_eq!(state.wallet.step(), WalletStep::Compose);
        assert_eq!(draft.amount_text(), "3");
        assert!(!draft.is_submitting());
        let failure = draft.last_failure.as_ref().unwrap();
        assert_eq!(failure.status, TransferStatus::Failed);
        assert_eq!(failure.failure_reason.as_deref(), Some("fee too low"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_balance_drop_invalidates_draft() {
        let mock = MockWallet::new().with_accounts(1).with_balances(&[10 * ONE]);
        let mut app = composing(&mock).await;

        app.handle_recipient_input(ADDR.to_string()).unwrap();
        app.handle_amount_input("5".to_string()).unwrap();
        assert!(app.state.read().draft_is_valid());

        mock.set_balance(2 * ONE);
        wait_until(&mut app, |s| s.session.balance() == Some(2 * ONE)).await;

        assert!(!app.state.read().draft_is_valid());
        assert!(matches!(app.handle_submit_transfer(), Err(AppError::Validation(_))));
        assert!(mock.submissions().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_disabled_at_zero_balance() {
        let mock = MockWallet::new().with_accounts(1).with_balances(&[5]);
        let mut app = connected(&mock).await;

        mock.set_balance(0);
        wait_until(&mut app, |s| s.session.balance() == Some(0)).await;

        assert_eq!(page(&app), Page::Wallet);
        assert!(!app.state.read().can_send());
        assert!(app.handle_open_compose().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_submission_result_dropped() {
        let mock = MockWallet::new().with_accounts(1).with_balances(&[10 * ONE]);
        let mut app = composing(&mock).await;

        app.handle_event(AppEvent::TransferSubmitted {
            draft_id: Uuid::new_v4(),
            amount: ONE,
            recipient: ADDR.to_string(),
            result: Ok("0xtx".to_string()),
        });

        assert_eq!(app.state.read().wallet.step(), WalletStep::Compose);
    }

    // ========== Disconnect ==========

    #[tokio::test(start_paused = true)]
    async fn test_disconnect_returns_to_auth() {
        let mock = MockWallet::new().with_accounts(1).with_balances(&[10 * ONE]);
        let mut app = composing(&mock).await;

        app.handle_disconnect().unwrap();
        {
            let state = app.state.read();
            assert_eq!(state.session.page(), Page::Auth);
            assert!(!state.session.is_connected());
            assert!(!state.poller.is_running());
            assert!(state.wallet.draft().is_none());
        }

        settle(&mut app, Duration::from_millis(10)).await;
        let queries = mock.balance_queries();
        settle(&mut app, Duration::from_secs(5)).await;

        assert_eq!(mock.disconnect_calls(), 1);
        assert_eq!(mock.balance_queries(), queries);
        assert_eq!(app.state.read().auth.list().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disconnect_ignored_in_faucet() {
        let mock = MockWallet::new().with_accounts(1).with_balances(&[0]);
        let mut app = connected(&mock).await;

        app.handle_disconnect().unwrap();
        settle(&mut app, Duration::from_millis(10)).await;

        assert_eq!(page(&app), Page::Faucet);
        assert_eq!(mock.disconnect_calls(), 0);
    }
}
