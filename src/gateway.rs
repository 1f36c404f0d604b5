use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::config::{mask, Config};
use crate::error::ConfigError;
use crate::normalize::{looks_like_document, normalize};
use crate::providers::{Adapter, AuthScheme, BUILTIN};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")] Http(String),
    #[error("status={status} body={body}")] Status { status: u16, body: String },
    #[error("decode error: {0}")] Decode(String),
    #[error("no generated text at the expected response path")] MissingField,
    #[error("response did not contain an HTML document")] Unusable,
}

/// An adapter together with the settings that decide whether and where it is called.
#[derive(Debug, Clone)]
pub struct ConfiguredAdapter {
    pub adapter: Adapter,
    pub api_key: Option<String>,
    pub base_url: String,
    pub disabled: bool,
}

impl ConfiguredAdapter {
    pub fn new(adapter: Adapter, api_key: Option<String>) -> Self {
        Self { adapter, api_key, base_url: adapter.base_url.to_string(), disabled: false }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn is_eligible(&self) -> bool {
        !self.disabled && self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.adapter.path)
    }
}

/// One failed provider call, kept for logs and response metadata.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Attempt {
    pub provider: String,
    pub error: String,
}

#[derive(Debug, Clone)]
pub enum GatewayOutcome {
    Succeeded { provider: String, text: String },
    /// Nothing usable came back; `attempts` lists providers that were tried and failed.
    Exhausted { attempts: Vec<Attempt> },
}

pub struct Gateway {
    client: Client,
    adapters: Vec<ConfiguredAdapter>,
}

fn preview(text: &str) -> String {
    if text.chars().count() > 200 {
        let head: String = text.chars().take(200).collect();
        format!("{}...[{} chars total]", head, text.len())
    } else {
        text.to_string()
    }
}

impl Gateway {
    pub fn new(client: Client, adapters: Vec<ConfiguredAdapter>) -> Self {
        Self { client, adapters }
    }

    /// Builds the built-in adapter list, applying credentials and overrides from `config`.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.provider_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ConfigError::Client(e.to_string()))?;

        let adapters = BUILTIN
            .iter()
            .map(|adapter| {
                let settings = config.settings(adapter.id).cloned().unwrap_or_default();
                let mut slot = ConfiguredAdapter::new(*adapter, settings.api_key);
                if let Some(base) = settings.base_url {
                    slot = slot.with_base_url(base);
                }
                slot.disabled = settings.disabled;
                slot
            })
            .collect();
        Ok(Self::new(client, adapters))
    }

    /// Ids of the providers that would be tried, in order.
    pub fn active_providers(&self) -> Vec<&'static str> {
        self.adapters.iter().filter(|a| a.is_eligible()).map(|a| a.adapter.id).collect()
    }

    /// Tries each eligible adapter once, in order, and returns the first usable page.
    pub async fn generate(&self, prompt: &str) -> GatewayOutcome {
        let mut attempts = Vec::new();
        for slot in &self.adapters {
            let name = slot.adapter.name;
            let key = match (&slot.api_key, slot.disabled) {
                (Some(key), false) => key,
                (_, true) => {
                    debug!("⏭️ {} disabled by configuration", name);
                    continue;
                }
                (None, false) => {
                    debug!("⏭️ {} has no credential ({})", name, slot.adapter.credential_env);
                    continue;
                }
            };

            info!("🚀 Trying {} (key {})", name, mask(key));
            match self.call(slot, key, prompt).await {
                Ok(text) => {
                    info!("✅ {} produced {} chars of HTML", name, text.len());
                    return GatewayOutcome::Succeeded { provider: name.to_string(), text };
                }
                Err(e) => {
                    error!("❌ {} failed: {}", name, e);
                    info!("🔄 {} failed, trying next provider...", name);
                    attempts.push(Attempt { provider: name.to_string(), error: e.to_string() });
                }
            }
        }
        warn!("⚠️ No provider succeeded ({} attempted)", attempts.len());
        GatewayOutcome::Exhausted { attempts }
    }

    async fn call(&self, slot: &ConfiguredAdapter, key: &str, prompt: &str) -> Result<String, ProviderError> {
        let adapter = &slot.adapter;
        let endpoint = slot.endpoint();
        let body = (adapter.build_body)(prompt);

        let mut request = self.client.post(&endpoint).json(&body);
        request = match adapter.auth {
            AuthScheme::Bearer => request.bearer_auth(key),
            AuthScheme::Token => request.header(reqwest::header::AUTHORIZATION, format!("Token {key}")),
            AuthScheme::QueryKey(param) => request.query(&[(param, key)]),
        };
        for (name, value) in adapter.extra_headers {
            request = request.header(*name, *value);
        }

        debug!("🔗 POST {}", endpoint);
        // Errors may carry the request URL, which holds the key for query-string auth.
        let response = request.send().await.map_err(|e| ProviderError::Http(e.without_url().to_string()))?;

        let status = response.status();
        info!("📥 {} response status: {}", adapter.name, status);
        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::Http(e.without_url().to_string()))?;

        if !status.is_success() {
            return Err(ProviderError::Status { status: status.as_u16(), body: preview(&response_text) });
        }
        debug!("📥 Raw {} response: {}", adapter.name, preview(&response_text));

        let parsed: Value = serde_json::from_str(&response_text)
            .map_err(|e| ProviderError::Decode(e.to_string()))?;
        let raw = (adapter.extract)(&parsed).ok_or(ProviderError::MissingField)?;

        let html = normalize(&raw);
        if !looks_like_document(&html) {
            return Err(ProviderError::Unusable);
        }
        Ok(html)
    }
}
