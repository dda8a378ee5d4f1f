//! # Action Handlers
//!
//! User action handlers organized by page. Each validates against the current
//! state under a short write lock, then spawns the collaborator call; results
//! come back as [`AppEvent`](crate::app::AppEvent)s.

pub mod auth;
pub mod faucet;
pub mod wallet;
