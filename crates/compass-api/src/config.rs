//! Server configuration read from environment variables.

use std::net::SocketAddr;
use std::time::Duration;

use compass_gemini::config::GeminiConfig;

use crate::error::AppError;

/// Startup configuration for the API server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address the server binds to.
    pub addr: SocketAddr,
    /// Gemini settings; `None` when no API key is available.
    pub gemini: Option<GeminiConfig>,
}

impl ApiConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns the value of a
    /// variable or `None` when unset.
    ///
    /// Recognized variables: `HOST` (default `0.0.0.0`), `PORT` (default
    /// `3000`), `GEMINI_API_KEY` falling back to `GOOGLE_API_KEY`,
    /// `GEMINI_MODEL`, `GEMINI_BASE_URL` and `GEMINI_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT`, `GEMINI_TIMEOUT_SECS` or the
    /// resulting address cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;
        let addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;

        let api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("GOOGLE_API_KEY"))
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty());

        let gemini = match api_key {
            Some(api_key) => {
                let mut config = GeminiConfig::new(api_key);
                if let Some(model) = lookup("GEMINI_MODEL") {
                    config.model = model;
                }
                if let Some(base_url) = lookup("GEMINI_BASE_URL") {
                    config.base_url = base_url;
                }
                if let Some(secs) = lookup("GEMINI_TIMEOUT_SECS") {
                    let secs: u64 = secs.parse().map_err(|e| {
                        AppError::Config(format!("GEMINI_TIMEOUT_SECS must be a whole number: {e}"))
                    })?;
                    config.timeout = Duration::from_secs(secs);
                }
                Some(config)
            }
            None => None,
        };

        Ok(Self { addr, gemini })
    }
}
