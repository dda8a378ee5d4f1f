//! # Account Directory
//!
//! Known passkey accounts for this device and the create/select flow of the
//! Auth page. Order is the collaborator's registration order; nothing is
//! reordered locally.

use shared::dto::Account;

use crate::core::error::{AppError, Result};
use crate::utils::constants::MAX_QUICK_SELECT_ACCOUNTS;

/// Auth page sub-step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStep {
    /// Choose between selecting an existing account and creating one
    #[default]
    Landing,
    /// Quick-select list
    Connect,
    /// Create a new account
    Create,
}

/// The single in-flight create/select operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAuth {
    Creating { label: String },
    Selecting { account_id: String },
}

#[derive(Debug, Clone, Default)]
pub struct AccountDirectory {
    accounts: Vec<Account>,
    step: AuthStep,
    pending: Option<PendingAuth>,
    /// Last surfaced create/connect failure
    pub error: Option<String>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// All known accounts, in registration order
    pub fn list(&self) -> &[Account] {
        &self.accounts
    }

    /// Accounts offered for quick connect
    pub fn quick_select(&self) -> &[Account] {
        let len = self.accounts.len().min(MAX_QUICK_SELECT_ACCOUNTS);
        &self.accounts[..len]
    }

    /// Whether the create affordance is shown
    pub fn can_create(&self) -> bool {
        self.accounts.len() < MAX_QUICK_SELECT_ACCOUNTS
    }

    /// Label for the next created account
    pub fn next_label(&self) -> String {
        format!("Account {}", self.accounts.len() + 1)
    }

    pub fn find(&self, account_id: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == account_id)
    }

    /// Replace the list with the collaborator's view
    pub fn set_accounts(&mut self, accounts: Vec<Account>) {
        self.accounts = accounts;
    }

    /// Append a freshly created account unless already listed
    pub fn record(&mut self, account: &Account) {
        if self.find(&account.id).is_none() {
            self.accounts.push(account.clone());
        }
    }

    /// Effective step: with no accounts the Auth page always offers Create
    pub fn step(&self) -> AuthStep {
        if self.accounts.is_empty() {
            AuthStep::Create
        } else {
            self.step
        }
    }

    pub fn set_step(&mut self, step: AuthStep) {
        self.step = step;
    }

    pub fn pending(&self) -> Option<&PendingAuth> {
        self.pending.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Claim the in-flight slot for a create. Returns the label to register.
    pub fn begin_create(&mut self) -> Result<String> {
        self.ensure_idle()?;
        if !self.can_create() {
            return Err(AppError::Validation(format!(
                "At most {} accounts can be created from this device",
                MAX_QUICK_SELECT_ACCOUNTS
            )));
        }

        let label = self.next_label();
        self.pending = Some(PendingAuth::Creating { label: label.clone() });
        self.error = None;
        Ok(label)
    }

    /// Claim the in-flight slot for a select. Returns the selected account.
    pub fn begin_select(&mut self, account_id: &str) -> Result<Account> {
        self.ensure_idle()?;
        let account = self
            .find(account_id)
            .cloned()
            .ok_or_else(|| AppError::Connection(format!("Unknown account: {}", account_id)))?;

        self.pending = Some(PendingAuth::Selecting {
            account_id: account_id.to_string(),
        });
        self.error = None;
        Ok(account)
    }

    /// Release the in-flight slot
    pub fn finish(&mut self, error: Option<String>) {
        self.pending = None;
        self.error = error;
    }

    /// Back to the landing step after a disconnect
    pub fn reset(&mut self) {
        self.step = AuthStep::Landing;
        self.pending = None;
        self.error = None;
    }

    fn ensure_idle(&self) -> Result<()> {
        match &self.pending {
            Some(PendingAuth::Creating { .. }) => {
                Err(AppError::Validation("Account creation already in progress".to_string()))
            }
            Some(PendingAuth::Selecting { .. }) => {
                Err(AppError::Validation("Account connection already in progress".to_string()))
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accounts(n: usize) -> Vec<Account> {
        (1..=n)
            .map(|i| Account {
                id: format!("pk_{}", i),
                label: format!("Account {}", i),
                address: format!("0x{:064x}", i),
            })
            .collect()
    }

    #[test]
    fn test_empty_directory_offers_create() {
        let directory = AccountDirectory::new();
        assert_eq!(directory.step(), AuthStep::Create);
        assert!(directory.can_create());
        assert_eq!(directory.next_label(), "Account 1");
    }

    #[test]
    fn test_quick_select_caps_at_four_and_keeps_order() {
        let mut directory = AccountDirectory::new();
        directory.set_accounts(accounts(6));

        let ids: Vec<&str> = directory.quick_select().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["pk_1", "pk_2", "pk_3", "pk_4"]);
        assert_eq!(directory.list().len(), 6);
        assert!(!directory.can_create());
    }

    #[test]
    fn test_create_hidden_when_full() {
        let mut directory = AccountDirectory::new();
        directory.set_accounts(accounts(4));

        assert!(matches!(directory.begin_create(), Err(AppError::Validation(_))));
        assert!(!directory.is_busy());
    }

    #[test]
    fn test_create_and_select_are_mutually_exclusive() {
        let mut directory = AccountDirectory::new();
        directory.set_accounts(accounts(2));

        assert_eq!(directory.begin_create().unwrap(), "Account 3");
        assert!(directory.begin_select("pk_1").is_err());
        assert!(directory.begin_create().is_err());

        directory.finish(None);
        assert_eq!(directory.begin_select("pk_1").unwrap().id, "pk_1");
        assert_eq!(
            directory.pending(),
            Some(&PendingAuth::Selecting { account_id: "pk_1".to_string() })
        );
    }

    #[test]
    fn test_select_unknown_account() {
        let mut directory = AccountDirectory::new();
        directory.set_accounts(accounts(1));

        assert!(matches!(directory.begin_select("pk_9"), Err(AppError::Connection(_))));
        assert!(!directory.is_busy());
    }

    #[test]
    fn test_record_appends_once() {
        let mut directory = AccountDirectory::new();
        let created = accounts(1).remove(0);

        directory.record(&created);
        directory.record(&created);
        assert_eq!(directory.list().len(), 1);
    }
}
