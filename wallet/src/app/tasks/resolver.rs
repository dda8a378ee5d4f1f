//! # Handle Resolution
//!
//! Debounced, cancellable lookups that turn a typed handle into a vault address.
//!
//! [`Debouncer`] is a single-slot cancellable timer: scheduling aborts the
//! previous task and bumps a generation counter, so the completion of a
//! superseded lookup is a no-op twice over (the task is aborted, and its
//! generation no longer matches if it raced the abort).

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_channel::Sender;
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

use crate::app::events::AppEvent;
use crate::core::service::ResolverService;
use crate::utils::validation::{classify_recipient, RecipientInput};

/// Single-slot cancellable timer.
///
/// Dropping the debouncer aborts the pending task.
#[derive(Debug, Default)]
pub struct Debouncer {
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `make_task(generation)` after `delay`, replacing any pending task.
    ///
    /// Returns the generation assigned to the new task.
    pub fn schedule<F, Fut>(&mut self, delay: Duration, make_task: F) -> u64
    where
        F: FnOnce(u64) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let generation = self.generation;
        let task = make_task(generation);

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));

        generation
    }

    /// Abort the pending task (if any) and invalidate its generation.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.generation += 1;
    }

    /// Whether `generation` belongs to the task that is still pending.
    pub fn is_current(&self, generation: u64) -> bool {
        self.pending.is_some() && generation == self.generation
    }

    /// Mark the pending task as finished. Returns `false` for stale generations.
    pub fn complete(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.pending = None;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

/// What [`HandleResolver::resolve`] did with an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveAction {
    /// Input is empty, an address literal or not a handle; nothing looked up
    Cleared,
    /// Lookup scheduled after the quiet period
    Scheduled { generation: u64 },
}

/// Debounced handle lookup for one transfer draft.
#[derive(Debug)]
pub struct HandleResolver {
    debouncer: Debouncer,
    quiet_period: Duration,
    network_id: u64,
}

impl HandleResolver {
    pub fn new(quiet_period: Duration, network_id: u64) -> Self {
        Self {
            debouncer: Debouncer::new(),
            quiet_period,
            network_id,
        }
    }

    /// Schedule a lookup for `input` if it is a handle candidate.
    ///
    /// Any pending lookup for an earlier input is abandoned. The result is
    /// delivered as [`AppEvent::HandleResolved`]; lookup errors are a miss.
    pub fn resolve(
        &mut self,
        input: &str,
        draft_id: Uuid,
        service: Arc<dyn ResolverService>,
        event_tx: Sender<AppEvent>,
    ) -> ResolveAction {
        let handle = match classify_recipient(input) {
            RecipientInput::Handle(handle) => handle,
            _ => {
                self.debouncer.cancel();
                return ResolveAction::Cleared;
            }
        };

        let network_id = self.network_id;
        let generation = self.debouncer.schedule(self.quiet_period, move |generation| async move {
            let address = match service.resolve(&handle, network_id).await {
                Ok(address) => address,
                Err(e) => {
                    debug!(handle = %handle, error = %e, "Handle lookup failed - treating as miss");
                    None
                }
            };

            debug!(
                handle = %handle,
                generation = generation,
                resolved = address.is_some(),
                "Handle lookup finished"
            );

            let _ = event_tx
                .send(AppEvent::HandleResolved {
                    draft_id,
                    generation,
                    handle,
                    address,
                })
                .await;
        });

        ResolveAction::Scheduled { generation }
    }

    /// Accept a lookup completion. `false` means it was superseded.
    pub fn accept(&mut self, generation: u64) -> bool {
        self.debouncer.complete(generation)
    }

    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}
