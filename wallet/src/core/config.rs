//! Wallet configuration from environment variables

use std::env;
use std::time::Duration;

use crate::core::error::{AppError, Result};
use crate::utils::constants;

/// Runtime configuration for the wallet core and its HTTP collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletConfig {
    /// Passkey / chain bridge base URL
    pub api_url: String,
    /// Handle resolution service base URL
    pub resolver_url: String,
    /// Network id passed to the handle resolver
    pub network_id: u64,
    /// Block explorer base URL (ends with `/`)
    pub explorer_url: String,
    /// Decimals of the base asset
    pub asset_decimals: u32,
    /// Balance poll interval while in Faucet or Wallet
    pub poll_interval: Duration,
    /// Quiet period before a handle lookup fires
    pub resolve_debounce: Duration,
    /// HTTP request timeout
    pub http_timeout: Duration,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            api_url: constants::DEFAULT_API_URL.to_string(),
            resolver_url: constants::DEFAULT_API_URL.to_string(),
            network_id: constants::DEFAULT_NETWORK_ID,
            explorer_url: constants::DEFAULT_EXPLORER_URL.to_string(),
            asset_decimals: constants::BASE_ASSET_DECIMALS,
            poll_interval: Duration::from_millis(constants::BALANCE_POLL_INTERVAL_MS),
            resolve_debounce: Duration::from_millis(constants::RESOLVE_QUIET_PERIOD_MS),
            http_timeout: Duration::from_secs(constants::HTTP_TIMEOUT_SECS),
        }
    }
}

impl WalletConfig {
    /// Load configuration from the environment (and `.env`, if present).
    ///
    /// Unset variables fall back to [`WalletConfig::default`]; set but
    /// unparsable values are an error.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let defaults = Self::default();
        let api_url = env::var("WALLET_API_URL").unwrap_or(defaults.api_url);
        let resolver_url = env::var("WALLET_RESOLVER_URL").unwrap_or_else(|_| api_url.clone());
        let mut explorer_url = env::var("WALLET_EXPLORER_URL").unwrap_or(defaults.explorer_url);
        if !explorer_url.ends_with('/') {
            explorer_url.push('/');
        }

        let config = Self {
            api_url,
            resolver_url,
            network_id: parse_var("WALLET_NETWORK_ID", defaults.network_id)?,
            explorer_url,
            asset_decimals: parse_var("WALLET_ASSET_DECIMALS", defaults.asset_decimals)?,
            poll_interval: Duration::from_millis(parse_var(
                "WALLET_POLL_INTERVAL_MS",
                constants::BALANCE_POLL_INTERVAL_MS,
            )?),
            resolve_debounce: Duration::from_millis(parse_var(
                "WALLET_RESOLVE_DEBOUNCE_MS",
                constants::RESOLVE_QUIET_PERIOD_MS,
            )?),
            http_timeout: Duration::from_secs(parse_var(
                "WALLET_HTTP_TIMEOUT_SECS",
                constants::HTTP_TIMEOUT_SECS,
            )?),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("WALLET_API_URL", &self.api_url),
            ("WALLET_RESOLVER_URL", &self.resolver_url),
            ("WALLET_EXPLORER_URL", &self.explorer_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AppError::Config(format!("{} must be an http(s) URL, got {:?}", name, url)));
            }
        }

        if self.asset_decimals > 18 {
            return Err(AppError::Config("WALLET_ASSET_DECIMALS must be at most 18".to_string()));
        }

        if self.poll_interval.is_zero() || self.resolve_debounce.is_zero() || self.http_timeout.is_zero() {
            return Err(AppError::Config("Intervals and timeouts must be greater than zero".to_string()));
        }

        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} must be a valid number, got {:?}", name, raw))),
        Err(_) => Ok(default),
    }
}
