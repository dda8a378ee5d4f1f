//! In-memory collaborators for tests.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::dto::{Account, TransactionResponse, TransferRequest};

use crate::core::error::{AppError, Result};
use crate::core::service::{FaucetService, PasskeyService, ResolverService, Services, TransactionService};

/// Scriptable stand-in for the passkey bridge, chain client, resolver and faucet.
///
/// Registering a passkey does not connect it; balance queries fail until
/// `connect` has succeeded. Balance results are served from a queue; once it
/// drains the last value keeps being returned.
#[derive(Default)]
pub(crate) struct MockWallet {
    accounts: Mutex<Vec<Account>>,
    connected: Mutex<Option<String>>,
    balances: Mutex<VecDeque<Result<u64>>>,
    last_balance: Mutex<Option<Result<u64>>>,
    handles: Mutex<HashMap<String, String>>,
    resolve_delay: Mutex<Duration>,
    submit_delay: Mutex<Duration>,
    create_error: Mutex<Option<AppError>>,
    connect_error: Mutex<Option<AppError>>,
    submit_error: Mutex<Option<AppError>>,
    submitted: Mutex<Vec<TransferRequest>>,
    resolved: Mutex<Vec<String>>,
    balance_queries: AtomicUsize,
    faucet_calls: AtomicUsize,
    connect_calls: AtomicUsize,
    disconnect_calls: AtomicUsize,
}

impl MockWallet {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn services(self: &Arc<Self>) -> Services {
        Services::from_client(self.clone())
    }

    pub fn with_accounts(self: Arc<Self>, count: usize) -> Arc<Self> {
        {
            let mut accounts = self.accounts.lock();
            for n in accounts.len() + 1..=accounts.len() + count {
                accounts.push(mock_account(n, &format!("Account {}", n)));
            }
        }
        self
    }

    /// Start with `account_id`'s vault already connected
    pub fn connected_as(self: Arc<Self>, account_id: &str) -> Arc<Self> {
        *self.connected.lock() = Some(account_id.to_string());
        self
    }

    pub fn with_balances(self: Arc<Self>, balances: &[u64]) -> Arc<Self> {
        self.balances.lock().extend(balances.iter().map(|b| Ok(*b)));
        self
    }

    pub fn with_balance_error(self: Arc<Self>, message: &str) -> Arc<Self> {
        self.push_balance(Err(AppError::Query(message.to_string())));
        self
    }

    pub fn with_handle(self: Arc<Self>, handle: &str, address: &str) -> Arc<Self> {
        self.handles.lock().insert(handle.to_string(), address.to_string());
        self
    }

    pub fn with_resolve_delay(self: Arc<Self>, delay: Duration) -> Arc<Self> {
        *self.resolve_delay.lock() = delay;
        self
    }

    pub fn with_submit_delay(self: Arc<Self>, delay: Duration) -> Arc<Self> {
        *self.submit_delay.lock() = delay;
        self
    }

    pub fn failing_create(self: Arc<Self>, message: &str) -> Arc<Self> {
        *self.create_error.lock() = Some(AppError::Creation(message.to_string()));
        self
    }

    pub fn failing_connect(self: Arc<Self>, message: &str) -> Arc<Self> {
        *self.connect_error.lock() = Some(AppError::Connection(message.to_string()));
        self
    }

    pub fn failing_submit(self: Arc<Self>, message: &str) -> Arc<Self> {
        *self.submit_error.lock() = Some(AppError::Submission(message.to_string()));
        self
    }

    /// Queue one more balance result
    pub fn push_balance(&self, result: Result<u64>) {
        self.balances.lock().push_back(result);
    }

    /// Drop queued results and serve `balance` from now on
    pub fn set_balance(&self, balance: u64) {
        self.balances.lock().clear();
        *self.last_balance.lock() = Some(Ok(balance));
    }

    pub fn balance_queries(&self) -> usize {
        self.balance_queries.load(Ordering::SeqCst)
    }

    pub fn resolve_calls(&self) -> Vec<String> {
        self.resolved.lock().clone()
    }

    pub fn submissions(&self) -> Vec<TransferRequest> {
        self.submitted.lock().clone()
    }

    pub fn faucet_calls(&self) -> usize {
        self.faucet_calls.load(Ordering::SeqCst)
    }

    pub fn connect_calls(&self) -> usize {
        self.connect_calls.load(Ordering::SeqCst)
    }

    /// Account id of the currently connected vault
    pub fn connected(&self) -> Option<String> {
        self.connected.lock().clone()
    }

    pub fn disconnect_calls(&self) -> usize {
        self.disconnect_calls.load(Ordering::SeqCst)
    }
}

pub(crate) fn mock_account(n: usize, label: &str) -> Account {
    Account {
        id: format!("pk_{}", n),
        label: label.to_string(),
        address: format!("0x{:064x}", n),
    }
}

#[async_trait]
impl PasskeyService for MockWallet {
    async fn my_passkeys(&self) -> Result<Vec<Account>> {
        Ok(self.accounts.lock().clone())
    }

    async fn create_account(&self, label: &str) -> Result<Account> {
        if let Some(e) = self.create_error.lock().clone() {
            return Err(e);
        }

        let account = {
            let mut accounts = self.accounts.lock();
            let account = mock_account(accounts.len() + 1, label);
            accounts.push(account.clone());
            account
        };
        Ok(account)
    }

    async fn connect(&self, account_id: &str) -> Result<()> {
        self.connect_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = self.connect_error.lock().clone() {
            return Err(e);
        }
        if !self.accounts.lock().iter().any(|a| a.id == account_id) {
            return Err(AppError::Connection(format!("No passkey for {}", account_id)));
        }

        *self.connected.lock() = Some(account_id.to_string());
        Ok(())
    }

    async fn disconnect(&self) -> Result<()> {
        self.disconnect_calls.fetch_add(1, Ordering::SeqCst);
        *self.connected.lock() = None;
        Ok(())
    }

    async fn get_balance(&self) -> Result<u64> {
        self.balance_queries.fetch_add(1, Ordering::SeqCst);
        if self.connected.lock().is_none() {
            return Err(AppError::Query("No vault connected".to_string()));
        }

        let next = self.balances.lock().pop_front();
        let mut last = self.last_balance.lock();
        match next {
            Some(result) => {
                *last = Some(result.clone());
                result
            }
            None => last.clone().unwrap_or(Ok(0)),
        }
    }

    async fn base_asset_id(&self) -> Result<String> {
        Ok(format!("0x{:064x}", 0))
    }
}

#[async_trait]
impl TransactionService for MockWallet {
    async fn send_transaction(&self, request: TransferRequest) -> Result<TransactionResponse> {
        let delay = *self.submit_delay.lock();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        if let Some(e) = self.submit_error.lock().clone() {
            return Err(e);
        }

        let id = {
            let mut submitted = self.submitted.lock();
            submitted.push(request);
            format!("0x{:064x}", 0xabc0 + submitted.len())
        };
        Ok(TransactionResponse { id })
    }
}

#[async_trait]
impl ResolverService for MockWallet {
    async fn resolve(&self, handle: &str, _network_id: u64) -> Result<Option<String>> {
        self.resolved.lock().push(handle.to_string());

        let delay = *self.resolve_delay.lock();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        Ok(self.handles.lock().get(handle).cloned())
    }
}

#[async_trait]
impl FaucetService for MockWallet {
    async fn request_funds(&self, _address: &str) -> Result<()> {
        self.faucet_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
