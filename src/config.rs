//! Bridge connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::color::ColorConverter;
use crate::errors::Error;
use crate::history::MessageHistory;
use crate::types::GammaMode;

/// Settings for talking to one bridge.
///
/// Only `host` and `username` are required when loading from JSON; the rest
/// fall back to their defaults.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use hue_lights_rs::{BridgeConfig, GammaMode};
///
/// let config = BridgeConfig::from_json(r#"{
///     "host": "192.168.1.2",
///     "username": "newdeveloper",
///     "gamma": "legacy"
/// }"#).unwrap();
///
/// assert_eq!(config.base_url(), "http://192.168.1.2/api/newdeveloper");
/// assert_eq!(config.throttle(), Duration::from_millis(100));
/// assert_eq!(config.gamma, GammaMode::Legacy);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BridgeConfig {
    /// Bridge address, with an optional `:port`.
    pub host: String,
    /// Whitelisted user created during pairing.
    pub username: String,
    #[serde(default)]
    pub https: bool,
    /// Minimum spacing between write requests, in milliseconds.
    #[serde(default = "default_throttle_ms")]
    pub throttle_ms: u64,
    /// Per-request timeout, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Gamma curve used by the color helpers.
    #[serde(default)]
    pub gamma: GammaMode,
    /// Number of entries kept in the message history.
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

fn default_throttle_ms() -> u64 {
    BridgeConfig::DEFAULT_THROTTLE_MS
}

fn default_timeout_ms() -> u64 {
    BridgeConfig::DEFAULT_TIMEOUT_MS
}

fn default_history_size() -> usize {
    MessageHistory::DEFAULT_MAX_ENTRIES
}

impl BridgeConfig {
    /// The bridge drops commands sent faster than roughly ten per second.
    pub const DEFAULT_THROTTLE_MS: u64 = 100;
    pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

    pub fn new(host: &str, username: &str) -> Self {
        Self {
            host: host.to_string(),
            username: username.to_string(),
            https: false,
            throttle_ms: Self::DEFAULT_THROTTLE_MS,
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
            gamma: GammaMode::default(),
            history_size: MessageHistory::DEFAULT_MAX_ENTRIES,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(Error::JsonLoad)
    }

    pub fn with_gamma(mut self, gamma: GammaMode) -> Self {
        self.gamma = gamma;
        self
    }

    pub fn with_throttle(mut self, throttle: Duration) -> Self {
        self.throttle_ms = u64::try_from(throttle.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn converter(&self) -> ColorConverter {
        ColorConverter::new(self.gamma)
    }

    /// `http[s]://<host>/api/<username>`
    pub fn base_url(&self) -> String {
        let scheme = if self.https { "https" } else { "http" };
        format!("{scheme}://{}/api/{}", self.host, self.username)
    }
}
