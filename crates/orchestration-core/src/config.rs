//! Client configuration management
//!
//! Sources, lowest precedence first:
//! - ~/.config/orchestration/config.yaml (or an explicit `--config` path)
//! - OS_ORCHESTRATION_URL, OS_AUTH_TOKEN, OS_ORCHESTRATION_TIMEOUT
//! - command-line flags, applied by the binary

use crate::paths::Paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_ENDPOINT: &str = "OS_ORCHESTRATION_URL";
pub const ENV_TOKEN: &str = "OS_AUTH_TOKEN";
pub const ENV_TIMEOUT: &str = "OS_ORCHESTRATION_TIMEOUT";

/// Connection settings for the orchestration service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Orchestration endpoint, including any tenant path
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Pre-issued auth token sent as X-Auth-Token
    #[serde(default)]
    pub token: Option<String>,

    /// Request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Paths::new().config_file())
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read client config from {:?}", path))?;
            let config: Self = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse client config from {:?}", path))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Overlay values from the process environment
    pub fn with_env(self) -> Result<Self> {
        self.with_vars(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary variable lookup
    pub fn with_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|v| !v.is_empty()) {
            self.endpoint = Some(endpoint);
        }
        if let Some(token) = lookup(ENV_TOKEN).filter(|v| !v.is_empty()) {
            self.token = Some(token);
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT).filter(|v| !v.is_empty()) {
            self.timeout_secs = timeout
                .parse()
                .with_context(|| format!("{} must be a number of seconds, got {:?}", ENV_TIMEOUT, timeout))?;
        }
        Ok(self)
    }

    /// Overlay values given on the command line
    pub fn with_overrides(
        mut self,
        endpoint: Option<String>,
        token: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Self {
        if endpoint.is_some() {
            self.endpoint = endpoint;
        }
        if token.is_some() {
            self.token = token;
        }
        if let Some(timeout_secs) = timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        self
    }
}
