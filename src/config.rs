// src/config.rs
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use axum::http::HeaderValue;
use thiserror::Error;

use crate::services::gemini::{GEMINI_API_BASE, GeminiConfig};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://sage-frontend-mwiy.vercel.app";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is required but not set. Add it to the environment or a .env file")]
    Missing(&'static str),

    #[error("{key} has an invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Process-wide settings, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub allowed_origin: HeaderValue,
    pub bind_addr: SocketAddr,
    pub provider_timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("allowed_origin", &self.allowed_origin)
            .field("bind_addr", &self.bind_addr)
            .field("provider_timeout", &self.provider_timeout)
            .finish()
    }
}

impl Config {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, so callers can supply values without
    /// touching the environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset.
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("GOOGLE_API_KEY").ok_or(ConfigError::Missing("GOOGLE_API_KEY"))?;
        let model = get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_base = get("GEMINI_API_BASE").unwrap_or_else(|| GEMINI_API_BASE.to_string());

        let origin = get("CORS_ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());
        let allowed_origin = HeaderValue::from_str(origin.trim().trim_end_matches('/')).map_err(|e| {
            ConfigError::Invalid {
                key: "CORS_ALLOWED_ORIGIN",
                value: origin.clone(),
                reason: e.to_string(),
            }
        })?;

        let bind = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind.trim().parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::Invalid {
                key: "BIND_ADDR",
                value: bind.clone(),
                reason: e.to_string(),
            }
        })?;

        let provider_timeout = match get("PROVIDER_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        key: "PROVIDER_TIMEOUT_SECS",
                        value: raw,
                        reason: "must be greater than zero".to_string(),
                    });
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        key: "PROVIDER_TIMEOUT_SECS",
                        value: raw,
                        reason: e.to_string(),
                    });
                }
            },
        };

        Ok(Self {
            api_key,
            model,
            api_base,
            allowed_origin,
            bind_addr,
            provider_timeout,
        })
    }

    pub fn gemini(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            base_url: self.api_base.clone(),
            timeout: self.provider_timeout,
        }
    }
}
