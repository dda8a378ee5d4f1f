//! # Session State Machine
//!
//! Governs which top-level page is shown.
//!
//! ```text
//!            connect, balance == 0            poll observes balance > 0
//!   Auth ───────────────────────────▶ Faucet ───────────────────────────▶ Wallet
//!     │                                                                     │
//!     └──────────────── connect, balance > 0 ──────────────────────────────▶│
//!     ◀──────────────────────────────── disconnect ─────────────────────────┘
//! ```
//!
//! No other transitions exist: connecting from Faucet or Wallet, or
//! disconnecting from Auth or Faucet, is a no-op.

use shared::dto::Account;

/// Top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Account create / select
    #[default]
    Auth,
    /// Connected with an empty vault; waiting for funds
    Faucet,
    /// Connected with a funded vault
    Wallet,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Auth => "Passkey Account",
            Page::Faucet => "Start adding tokens",
            Page::Wallet => "Wallet",
        }
    }
}

/// A page change performed by [`Session`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTransition {
    pub from: Page,
    pub to: Page,
}

/// The active connection.
///
/// Invariants: `page == Wallet` or `page == Faucet` implies an account is set;
/// Faucet is only entered with a zero balance and Wallet only with a positive one.
#[derive(Debug, Clone, Default)]
pub struct Session {
    account: Option<Account>,
    page: Page,
    balance: Option<u64>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn current_account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn current_account_id(&self) -> Option<&str> {
        self.account.as_ref().map(|account| account.id.as_str())
    }

    /// Last successfully queried balance
    pub fn balance(&self) -> Option<u64> {
        self.balance
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    /// Apply a successful connect-or-create with its first balance.
    ///
    /// Only valid from `Auth`; returns `None` (no-op) otherwise.
    pub fn connect(&mut self, account: Account, balance: u64) -> Option<PageTransition> {
        if self.page != Page::Auth {
            return None;
        }

        let to = if balance > 0 { Page::Wallet } else { Page::Faucet };
        self.account = Some(account);
        self.balance = Some(balance);
        Some(self.move_to(to))
    }

    /// Apply a balance poll result.
    ///
    /// Faucet moves to Wallet once the balance is positive. A Wallet whose
    /// balance drops to zero stays in Wallet (there is no Wallet -> Faucet edge).
    pub fn apply_balance(&mut self, balance: u64) -> Option<PageTransition> {
        if self.page == Page::Auth {
            return None;
        }

        self.balance = Some(balance);
        if self.page == Page::Faucet && balance > 0 {
            return Some(self.move_to(Page::Wallet));
        }
        None
    }

    /// Explicit disconnect. Only valid from `Wallet`.
    pub fn disconnect(&mut self) -> Option<PageTransition> {
        if self.page != Page::Wallet {
            return None;
        }

        self.account = None;
        self.balance = None;
        Some(self.move_to(Page::Auth))
    }

    fn move_to(&mut self, to: Page) -> PageTransition {
        let transition = PageTransition { from: self.page, to };
        self.page = to;
        transition
    }
}
