use std::{collections::HashMap, time::Duration};

use crate::error::ConfigError;
use crate::providers::{Adapter, BUILTIN};

/// Credentials and endpoint for one provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub disabled: bool,
}

/// Everything the service reads from its environment, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// `None` leaves the HTTP client's own defaults in charge.
    pub provider_timeout: Option<Duration>,
    pub providers: HashMap<&'static str, ProviderSettings>,
}

impl Default for Config {
    fn default() -> Self {
        Self { port: 8080, provider_timeout: None, providers: HashMap::new() }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, so tests never touch process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_empty(lookup("PORT")) {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid { key: "PORT".into(), value: v })?,
            None => 8080,
        };
        // A zero timeout would fail every provider call before it starts.
        let provider_timeout = match non_empty(lookup("PROVIDER_TIMEOUT_SECS")) {
            Some(v) => match v.parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => return Err(ConfigError::Invalid { key: "PROVIDER_TIMEOUT_SECS".into(), value: v }),
            },
            None => None,
        };
        let disabled: Vec<String> = non_empty(lookup("DISABLED_PROVIDERS"))
            .map(|v| v.split(',').map(|s| s.trim().to_ascii_lowercase()).filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();

        let providers = BUILTIN
            .iter()
            .map(|adapter: &Adapter| {
                let settings = ProviderSettings {
                    api_key: non_empty(lookup(adapter.credential_env)),
                    base_url: non_empty(lookup(adapter.base_env)),
                    disabled: disabled.iter().any(|d| d == adapter.id),
                };
                (adapter.id, settings)
            })
            .collect();

        Ok(Self { port, provider_timeout, providers })
    }

    pub fn with_provider(mut self, id: &'static str, api_key: impl Into<String>) -> Self {
        self.providers.entry(id).or_default().api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, id: &'static str, base_url: impl Into<String>) -> Self {
        self.providers.entry(id).or_default().base_url = Some(base_url.into());
        self
    }

    pub fn settings(&self, id: &str) -> Option<&ProviderSettings> {
        self.providers.get(id)
    }
}

/// Masks a secret for logging, keeping only a short prefix.
pub fn mask(secret: &str) -> String {
    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}***")
}
