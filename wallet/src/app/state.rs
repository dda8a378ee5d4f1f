//! # Application State Types
//!
//! Everything the wallet owns between events: the session, the Auth page's
//! account directory, the faucet flag, the Wallet page's transfer flow and the
//! balance poller. Collaborators and configuration ride along so handlers can
//! spawn tasks from a single lock.

use crate::app::directory::AccountDirectory;
use crate::app::flow::WalletFlow;
use crate::app::session::Session;
use crate::app::tasks::{BalancePoller, HandleResolver};
use crate::core::config::WalletConfig;
use crate::core::service::Services;

/// Faucet page state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaucetState {
    /// A funding request was sent; cleared when the page is left or the request fails
    pub funding: bool,
    pub error: Option<String>,
}

impl FaucetState {
    /// Button label
    pub fn label(&self) -> &'static str {
        if self.funding {
            "Funding..."
        } else {
            "Get funds"
        }
    }
}

/// Main application state
pub struct AppState {
    pub session: Session,
    pub auth: AccountDirectory,
    pub faucet: FaucetState,
    pub wallet: WalletFlow,
    pub poller: BalancePoller,
    /// Last balance poll failure; cleared by the next successful poll
    pub balance_error: Option<String>,
    pub services: Services,
    pub config: WalletConfig,
}

impl AppState {
    pub fn new(services: Services, config: WalletConfig) -> Self {
        Self {
            session: Session::new(),
            auth: AccountDirectory::new(),
            faucet: FaucetState::default(),
            wallet: WalletFlow::new(),
            poller: BalancePoller::new(),
            balance_error: None,
            services,
            config,
        }
    }

    /// Fresh resolver for a new transfer draft
    pub(crate) fn new_resolver(&self) -> HandleResolver {
        HandleResolver::new(self.config.resolve_debounce, self.config.network_id)
    }

    /// Whether the Send action is enabled
    pub fn can_send(&self) -> bool {
        self.session.balance().unwrap_or(0) > 0
    }

    /// Whether the current draft passes validation against the current balance
    pub fn draft_is_valid(&self) -> bool {
        let balance = self.session.balance().unwrap_or(0);
        self.wallet
            .draft()
            .is_some_and(|draft| draft.is_valid(balance, self.config.asset_decimals))
    }

    /// First failing validation message of the current draft
    pub fn draft_error(&self) -> Option<String> {
        let balance = self.session.balance().unwrap_or(0);
        self.wallet
            .draft()
            .and_then(|draft| draft.validate(balance, self.config.asset_decimals).error)
    }

    /// Explorer page of the last successful transfer
    pub fn explorer_url(&self) -> Option<String> {
        self.wallet
            .outcome()
            .and_then(|outcome| outcome.explorer_url(&self.config.explorer_url))
    }
}
