//! # Services Module
//!
//! Production collaborators for the wallet core.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 wallet core                  │
//! │  PasskeyService  TransactionService          │
//! │  ResolverService FaucetService               │
//! └──────────────────────┬───────────────────────┘
//!                        │ implemented by ApiClient
//!                        ▼
//! ┌──────────────────────────┐   ┌───────────────────────┐
//! │  Passkey / chain bridge  │   │  Handle resolver      │
//! │  /api/passkeys           │   │  /api/resolve/{name}  │
//! │  /api/connect            │   └───────────────────────┘
//! │  /api/balance            │
//! │  /api/transactions       │
//! │  /api/faucet             │
//! └──────────────────────────┘
//! ```
//!
//! The bridge owns keys and signing; the wallet core only ever sees account
//! records, balances and transaction ids.

pub mod api;
