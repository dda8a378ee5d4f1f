//! Application constants

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3001";
pub const DEFAULT_EXPLORER_URL: &str = "https://app-testnet.fuel.network/";

/// Network id passed to the handle resolver (testnet)
pub const DEFAULT_NETWORK_ID: u64 = 9889;

/// Decimals of the base asset
pub const BASE_ASSET_DECIMALS: u32 = 9;

/// Quick-select list size; the create affordance is hidden once it is full
pub const MAX_QUICK_SELECT_ACCOUNTS: usize = 4;

/// Name attached to every transfer request
pub const TRANSFER_REQUEST_NAME: &str = "sendTransaction-by-passkey-dapp";

/// Literal address prefix; inputs starting with it are never looked up as handles
pub const ADDRESS_PREFIX: &str = "0x";

/// Hex digits in a b256 address (after the prefix)
pub const ADDRESS_HEX_LEN: usize = 64;

// Timing
pub const BALANCE_POLL_INTERVAL_MS: u64 = 1000;
pub const RESOLVE_QUIET_PERIOD_MS: u64 = 400;
pub const HTTP_TIMEOUT_SECS: u64 = 10;
