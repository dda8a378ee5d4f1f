//! Validation utilities for transfer drafts and recipient input

use crate::utils::constants::{ADDRESS_HEX_LEN, ADDRESS_PREFIX};
use crate::utils::format::parse_amount;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Classification of whatever the user typed into the recipient field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipientInput {
    /// Nothing typed
    Empty,
    /// Starts with the literal address prefix; validated as an address, never looked up
    Address,
    /// Syntactically valid handle, eligible for lookup
    Handle(String),
    /// Neither an address candidate nor a valid handle
    Invalid,
}

/// Classify recipient input for the handle resolver.
pub fn classify_recipient(input: &str) -> RecipientInput {
    if input.is_empty() {
        RecipientInput::Empty
    } else if input.starts_with(ADDRESS_PREFIX) {
        RecipientInput::Address
    } else if is_valid_handle(input) {
        RecipientInput::Handle(input.to_string())
    } else {
        RecipientInput::Invalid
    }
}

/// Handle syntax: optional leading `@`, then 3-32 of `[A-Za-z0-9_.-]`.
pub fn is_valid_handle(input: &str) -> bool {
    let name = input.strip_prefix('@').unwrap_or(input);

    (3..=32).contains(&name.len())
        && !name.starts_with(ADDRESS_PREFIX)
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
}

/// Well-formed b256 address: `0x` followed by exactly 64 hex digits.
pub fn is_b256_address(address: &str) -> bool {
    match address.strip_prefix(ADDRESS_PREFIX) {
        Some(hex_part) => {
            hex_part.len() == ADDRESS_HEX_LEN
                && hex::decode(hex_part).map(|bytes| bytes.len() == 32).unwrap_or(false)
        }
        None => false,
    }
}

/// Validate a transfer draft, reporting the first failing condition.
///
/// Conditions, in order: amount parses, amount > 0, balance > 0,
/// amount <= balance, recipient is a b256 address. `recipient` is the
/// resolved address when one exists, otherwise the raw input.
pub fn validate_transfer(amount_text: &str, balance: u64, recipient: &str, decimals: u32) -> ValidationResult {
    if amount_text.trim().is_empty() {
        return ValidationResult::err("Amount is required");
    }

    let amount = match parse_amount(amount_text, decimals) {
        Some(amount) => amount,
        None => return ValidationResult::err("Invalid amount"),
    };

    if amount == 0 {
        return ValidationResult::err("Amount must be greater than zero");
    }

    if balance == 0 {
        return ValidationResult::err("No balance available");
    }

    if amount > balance {
        return ValidationResult::err("Insufficient balance");
    }

    if !is_b256_address(recipient) {
        return ValidationResult::err("Invalid recipient address");
    }

    ValidationResult::ok()
}

/// Boolean verdict of [`validate_transfer`].
pub fn is_valid_transfer(amount_text: &str, balance: u64, recipient: &str, decimals: u32) -> bool {
    validate_transfer(amount_text, balance, recipient, decimals).is_valid
}
