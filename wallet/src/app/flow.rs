//! # Wallet Flow
//!
//! Sub-flow of the Wallet page: `Home -> Compose -> Result -> Home`.
//!
//! The flow owns the in-progress [`TransferDraft`] and the last
//! [`TransferOutcome`]. Leaving Compose drops the draft, which aborts any
//! pending handle lookup with it. Submission is single-slot: at most one
//! outstanding submit per draft.

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::app::tasks::HandleResolver;
use crate::core::error::{AppError, Result};
use crate::utils::format::parse_amount;
use crate::utils::validation::{validate_transfer, ValidationResult};

/// Wallet page sub-step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalletStep {
    #[default]
    Home,
    Compose,
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferStatus {
    Success,
    Failed,
}

/// Result of a submitted transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOutcome {
    pub transaction_id: Option<String>,
    pub status: TransferStatus,
    pub failure_reason: Option<String>,
    /// Amount in smallest units
    pub amount: u64,
    pub recipient: String,
    pub submitted_at: DateTime<Utc>,
}

impl TransferOutcome {
    pub fn success(transaction_id: String, amount: u64, recipient: String) -> Self {
        Self {
            transaction_id: Some(transaction_id),
            status: TransferStatus::Success,
            failure_reason: None,
            amount,
            recipient,
            submitted_at: Utc::now(),
        }
    }

    pub fn failed(reason: String, amount: u64, recipient: String) -> Self {
        Self {
            transaction_id: None,
            status: TransferStatus::Failed,
            failure_reason: Some(reason),
            amount,
            recipient,
            submitted_at: Utc::now(),
        }
    }

    /// Explorer page of the transaction, e.g. `https://app-testnet.fuel.network/tx/0xabc`
    pub fn explorer_url(&self, explorer_base: &str) -> Option<String> {
        self.transaction_id
            .as_ref()
            .map(|id| format!("{}tx/{}", explorer_base, id))
    }
}

/// In-progress compose state.
///
/// Validity is derived on demand, never stored.
#[derive(Debug)]
pub struct TransferDraft {
    id: Uuid,
    raw_recipient: String,
    resolved_address: Option<String>,
    amount_text: String,
    recipient_focused: bool,
    submitting: bool,
    /// Last failed submission of this draft
    pub last_failure: Option<TransferOutcome>,
    pub(crate) resolver: HandleResolver,
}

impl TransferDraft {
    pub fn new(resolver: HandleResolver) -> Self {
        Self {
            id: Uuid::new_v4(),
            raw_recipient: String::new(),
            resolved_address: None,
            amount_text: String::new(),
            recipient_focused: false,
            submitting: false,
            last_failure: None,
            resolver,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn raw_recipient(&self) -> &str {
        &self.raw_recipient
    }

    pub fn resolved_address(&self) -> Option<&str> {
        self.resolved_address.as_deref()
    }

    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    pub fn recipient_focused(&self) -> bool {
        self.recipient_focused
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Resolved address if present, else the raw input
    pub fn effective_recipient(&self) -> &str {
        self.resolved_address.as_deref().unwrap_or(&self.raw_recipient)
    }

    /// Replace the recipient text. Returns `false` when unchanged.
    ///
    /// Any change drops the previous resolution.
    pub fn set_recipient(&mut self, input: &str) -> bool {
        if self.raw_recipient == input {
            return false;
        }
        self.raw_recipient = input.to_string();
        self.resolved_address = None;
        self.recipient_focused = true;
        true
    }

    pub fn set_amount(&mut self, text: &str) {
        self.amount_text = text.to_string();
    }

    /// Clear the recipient field, its resolution and any pending lookup
    pub fn clear_recipient(&mut self) {
        self.raw_recipient.clear();
        self.resolved_address = None;
        self.resolver.cancel();
    }

    /// Apply a lookup result for `handle`. Returns `false` when stale.
    pub fn apply_resolution(&mut self, generation: u64, handle: &str, address: Option<String>) -> bool {
        if !self.resolver.accept(generation) || self.raw_recipient != handle {
            debug!(draft_id = %self.id, handle = %handle, generation, "Dropping stale handle resolution");
            return false;
        }

        if address.is_some() {
            self.recipient_focused = false;
        }
        self.resolved_address = address;
        true
    }

    pub fn validate(&self, balance: u64, decimals: u32) -> ValidationResult {
        validate_transfer(&self.amount_text, balance, self.effective_recipient(), decimals)
    }

    pub fn is_valid(&self, balance: u64, decimals: u32) -> bool {
        self.validate(balance, decimals).is_valid
    }
}

/// Everything needed to dispatch one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub draft_id: Uuid,
    pub amount: u64,
    pub recipient: String,
}

#[derive(Debug, Default)]
pub struct WalletFlow {
    step: WalletStep,
    draft: Option<TransferDraft>,
    outcome: Option<TransferOutcome>,
}

impl WalletFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WalletStep {
        self.step
    }

    pub fn draft(&self) -> Option<&TransferDraft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut TransferDraft> {
        self.draft.as_mut()
    }

    pub fn outcome(&self) -> Option<&TransferOutcome> {
        self.outcome.as_ref()
    }

    /// Home -> Compose, only with a positive balance
    pub fn open_compose(&mut self, balance: Option<u64>, resolver: HandleResolver) -> Result<()> {
        if self.step != WalletStep::Home {
            return Err(AppError::Validation("Send is only available from Home".to_string()));
        }
        if balance.unwrap_or(0) == 0 {
            return Err(AppError::Validation("No balance available to send".to_string()));
        }

        self.draft = Some(TransferDraft::new(resolver));
        self.step = WalletStep::Compose;
        Ok(())
    }

    /// Compose -> Home, discarding the draft. Rejected while a submission is pending.
    pub fn cancel_compose(&mut self) -> Result<()> {
        if self.step != WalletStep::Compose {
            return Err(AppError::Validation("Nothing to cancel".to_string()));
        }
        if self.draft.as_ref().is_some_and(|draft| draft.submitting) {
            return Err(AppError::Validation("Transfer is being submitted".to_string()));
        }

        self.draft = None;
        self.step = WalletStep::Home;
        Ok(())
    }

    /// Claim the submission slot for the current draft.
    ///
    /// Re-validates against `balance` so a draft that was valid against a
    /// stale balance is rejected here.
    pub fn begin_submit(&mut self, balance: u64, decimals: u32) -> Result<SubmitTicket> {
        let draft = match (self.step, self.draft.as_mut()) {
            (WalletStep::Compose, Some(draft)) => draft,
            _ => return Err(AppError::Validation("No transfer to submit".to_string())),
        };

        if draft.submitting {
            return Err(AppError::Validation("Transfer already being submitted".to_string()));
        }

        let verdict = draft.validate(balance, decimals);
        if !verdict.is_valid {
            return Err(AppError::Validation(
                verdict.error.unwrap_or_else(|| "Invalid transfer".to_string()),
            ));
        }

        let amount = parse_amount(&draft.amount_text, decimals)
            .ok_or_else(|| AppError::Validation("Invalid amount".to_string()))?;

        draft.submitting = true;
        draft.last_failure = None;
        Ok(SubmitTicket {
            draft_id: draft.id,
            amount,
            recipient: draft.effective_recipient().to_string(),
        })
    }

    /// Compose -> Result on success. Returns `false` if the draft is gone.
    pub fn submit_succeeded(&mut self, draft_id: Uuid, outcome: TransferOutcome) -> bool {
        if !self.owns_draft(draft_id) {
            return false;
        }
        self.draft = None;
        self.outcome = Some(outcome);
        self.step = WalletStep::Result;
        true
    }

    /// Stay in Compose with the draft intact. Returns `false` if the draft is gone.
    pub fn submit_failed(&mut self, draft_id: Uuid, outcome: TransferOutcome) -> bool {
        match self.draft.as_mut() {
            Some(draft) if draft.id == draft_id && self.step == WalletStep::Compose => {
                draft.submitting = false;
                draft.last_failure = Some(outcome);
                true
            }
            _ => false,
        }
    }

    /// Result -> Home, discarding the outcome
    pub fn back(&mut self) -> Result<()> {
        if self.step != WalletStep::Result {
            return Err(AppError::Validation("No transfer result to leave".to_string()));
        }
        self.outcome = None;
        self.step = WalletStep::Home;
        Ok(())
    }

    /// Drop draft and outcome (disconnect or re-entry)
    pub fn reset(&mut self) {
        self.draft = None;
        self.outcome = None;
        self.step = WalletStep::Home;
    }

    fn owns_draft(&self, draft_id: Uuid) -> bool {
        self.step == WalletStep::Compose && self.draft.as_ref().is_some_and(|draft| draft.id == draft_id)
    }
}
