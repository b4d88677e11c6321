// ABOUTME: Environment-based configuration for the Oura MCP server
// ABOUTME: Reads .env via dotenvy, then OURA_API_TOKEN, then applies CLI overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{defaults, env_vars};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::{debug, info, warn};

/// HTTP client timeout configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: defaults::HTTP_TIMEOUT_SECS,
            connect_timeout_secs: defaults::HTTP_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Server configuration.
///
/// The token is optional here so `from_env` can succeed for commands that
/// never reach the vendor; the provider constructor rejects a missing token.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Oura personal access token
    #[serde(skip_serializing)]
    pub oura_api_token: Option<String>,
    /// Shared HTTP client timeouts
    pub http_client: HttpClientConfig,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field(
                "oura_api_token",
                &self.oura_api_token.as_ref().map(|_| "<redacted>"),
            )
            .field("http_client", &self.http_client)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from `.env` and the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if the loaded values fail validation
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or failed to load: {}", e);
        }

        let config = Self {
            oura_api_token: env::var(env_vars::OURA_API_TOKEN)
                .ok()
                .filter(|token| !token.trim().is_empty()),
            http_client: HttpClientConfig::default(),
        };

        config.validate()?;

        if config.oura_api_token.is_none() {
            warn!(
                "{} is not set; startup fails unless --token is given",
                env_vars::OURA_API_TOKEN
            );
        }

        Ok(config)
    }

    /// Apply command line overrides on top of the loaded values
    ///
    /// # Errors
    ///
    /// Returns an error if an override produces an invalid configuration
    pub fn with_overrides(
        mut self,
        token: Option<String>,
        timeout_secs: Option<u64>,
        connect_timeout_secs: Option<u64>,
    ) -> AppResult<Self> {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.oura_api_token = Some(token);
        }
        if let Some(secs) = timeout_secs {
            self.http_client.timeout_secs = secs;
        }
        if let Some(secs) = connect_timeout_secs {
            self.http_client.connect_timeout_secs = secs;
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a timeout is zero
    pub fn validate(&self) -> AppResult<()> {
        if self.http_client.timeout_secs == 0 {
            return Err(AppError::config_invalid(
                "HTTP request timeout must be greater than zero",
            ));
        }
        if self.http_client.connect_timeout_secs == 0 {
            return Err(AppError::config_invalid(
                "HTTP connect timeout must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Whether a token was found
    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.oura_api_token.is_some()
    }

    /// Summary safe to log (no secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "token_configured={}, http_timeout={}s, http_connect_timeout={}s",
            self.has_token(),
            self.http_client.timeout_secs,
            self.http_client.connect_timeout_secs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_reads_token() {
        env::set_var(env_vars::OURA_API_TOKEN, "env-token");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.oura_api_token.as_deref(), Some("env-token"));
        assert_eq!(config.http_client, HttpClientConfig::default());
        env::remove_var(env_vars::OURA_API_TOKEN);
    }

    #[test]
    #[serial]
    fn test_missing_token_left_for_cli() {
        env::remove_var(env_vars::OURA_API_TOKEN);
        let config = ServerConfig::from_env().unwrap();
        assert!(!config.has_token());

        let config = config
            .with_overrides(Some("cli-token".to_owned()), None, None)
            .unwrap();
        assert!(config.has_token());
    }

    #[test]
    #[serial]
    fn test_cli_overrides_win() {
        env::set_var(env_vars::OURA_API_TOKEN, "env-token");
        let config = ServerConfig::from_env()
            .unwrap()
            .with_overrides(Some("cli-token".to_owned()), Some(5), Some(2))
            .unwrap();
        assert_eq!(config.oura_api_token.as_deref(), Some("cli-token"));
        assert_eq!(
            config.http_client,
            HttpClientConfig {
                timeout_secs: 5,
                connect_timeout_secs: 2,
            }
        );
        env::remove_var(env_vars::OURA_API_TOKEN);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = ServerConfig::default()
            .with_overrides(None, Some(0), None)
            .unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_debug_and_summary_hide_token() {
        let config = ServerConfig {
            oura_api_token: Some("secret-token".to_owned()),
            http_client: HttpClientConfig::default(),
        };
        assert!(!format!("{config:?}").contains("secret-token"));
        assert!(!config.summary().contains("secret-token"));
        assert!(config.summary().contains("token_configured=true"));
    }
}
