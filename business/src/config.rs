//! Runtime configuration for the console.

use lendboard_states::State;
use serde::Deserialize;
use std::env::vars;
use ustr::Ustr;

/// Hosted endpoint serving the user dataset as a JSON array.
const DEFAULT_USERS_ENDPOINT: &str = "https://lendsqr-users.free.beeceptor.com/";

/// Milliseconds the dashboard shows its landing splash before the first
/// render of the cards and table.
const DEFAULT_LANDING_DELAY_MS: u64 = 1000;

/// Temporary shape for environment overrides; every field is optional so a
/// bare environment falls back to defaults.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    lendboard_users_endpoint: Option<String>,
    lendboard_landing_delay_ms: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub users_endpoint: String,
    pub landing_delay_ms: u64,
}

impl AppConfig {
    /// Config pointed at an explicit endpoint, with the landing splash
    /// disabled. Used by tests against a local mock server.
    pub fn new(users_endpoint: String) -> Self {
        Self {
            users_endpoint,
            landing_delay_ms: 0,
        }
    }

    /// Read `LENDBOARD_*` overrides from the environment, falling back to
    /// defaults for anything unset or unreadable.
    pub fn from_env() -> Self {
        let raw: RawConfig = match serde_env::from_iter(vars()) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("ignoring unreadable environment overrides: {err}");
                RawConfig::default()
            }
        };
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Self {
        let RawConfig {
            lendboard_users_endpoint,
            lendboard_landing_delay_ms,
        } = raw;
        Self {
            users_endpoint: lendboard_users_endpoint
                .unwrap_or_else(|| DEFAULT_USERS_ENDPOINT.to_owned()),
            landing_delay_ms: lendboard_landing_delay_ms.unwrap_or(DEFAULT_LANDING_DELAY_MS),
        }
    }

    pub fn users_url(&self) -> Ustr {
        Ustr::from(&self.users_endpoint)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_raw(RawConfig::default())
    }
}

impl State for AppConfig {}
