//! # Balance Polling
//!
//! Recurring balance query for the connected vault. Runs while the session is
//! in Faucet or Wallet; each tick is delivered as [`AppEvent::BalanceUpdated`]
//! tagged with the account id it was started for.

use std::sync::Arc;
use std::time::Duration;

use async_channel::Sender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::core::service::PasskeyService;

/// Handle to the single balance polling task.
///
/// Dropping the poller stops the task.
#[derive(Debug, Default)]
pub struct BalancePoller {
    handle: Option<JoinHandle<()>>,
    account_id: Option<String>,
}

impl BalancePoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start polling for `account_id`, replacing any running poller.
    ///
    /// The first tick fires one `interval` after start; the connect flow has
    /// already queried the balance once.
    pub fn start(
        &mut self,
        account_id: String,
        interval: Duration,
        passkey: Arc<dyn PasskeyService>,
        event_tx: Sender<AppEvent>,
    ) {
        self.stop();

        info!(account_id = %account_id, interval_ms = interval.as_millis() as u64, "Starting balance poller");

        let tagged_id = account_id.clone();
        self.handle = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let result = passkey.get_balance().await;
                if let Err(e) = &result {
                    warn!(account_id = %tagged_id, error = %e, "Balance poll failed - keeping last known balance");
                }

                let event = AppEvent::BalanceUpdated {
                    account_id: tagged_id.clone(),
                    result,
                };
                if event_tx.send(event).await.is_err() {
                    debug!("Event channel closed - stopping balance poller");
                    break;
                }
            }
        }));
        self.account_id = Some(account_id);
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!(account_id = ?self.account_id, "Stopped balance poller");
        }
        self.account_id = None;
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }
}

impl Drop for BalancePoller {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mock::MockWallet;

    #[tokio::test(start_paused = true)]
    async fn test_poller_ticks_every_interval() {
        let mock = MockWallet::new().connected_as("pk_1").with_balances(&[1, 2, 3]);
        let (tx, rx) = async_channel::unbounded();
        let mut poller = BalancePoller::new();

        poller.start("pk_1".to_string(), Duration::from_secs(1), mock.clone(), tx);
        assert!(poller.is_running());
        assert_eq!(poller.account_id(), Some("pk_1"));

        let mut seen = Vec::new();
        for _ in 0..3 {
            match rx.recv().await.unwrap() {
                AppEvent::BalanceUpdated { account_id, result } => {
                    assert_eq!(account_id, "pk_1");
                    seen.push(result.unwrap());
                }
                other => panic!("unexpected event: {:?}", other),
            }
        }
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_ticks() {
        let mock = MockWallet::new().connected_as("pk_1").with_balances(&[1]);
        let (tx, rx) = async_channel::unbounded();
        let mut poller = BalancePoller::new();

        poller.start("pk_1".to_string(), Duration::from_secs(1), mock.clone(), tx);
        poller.stop();
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert!(!poller.is_running());
        assert!(rx.try_recv().is_err());
        assert_eq!(mock.balance_queries(), 0);
    }
}
