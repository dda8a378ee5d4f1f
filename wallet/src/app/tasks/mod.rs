//! # Async Tasks
//!
//! Long-lived background tasks owned by the application state: the balance
//! poller and debounced handle resolution.

pub mod balance;
pub mod resolver;

pub use balance::BalancePoller;
pub use resolver::{Debouncer, HandleResolver, ResolveAction};
