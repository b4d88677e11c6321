// ABOUTME: Oura Ring API v2 accessor using a static personal access token
// ABOUTME: Builds authenticated GETs and maps HTTP/transport failures to ProviderError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{env_vars, oura_api};
use crate::core::{HealthDataProvider, ProviderConfig};
use crate::errors::{ProviderError, ProviderResult};
use crate::http_client::shared_client;
use crate::models::{DateRange, MetricRecord};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use std::error::Error as _;
use std::fmt;
use tracing::{debug, error, instrument, warn};

/// Oura collection response envelope
#[derive(Debug, Deserialize)]
struct OuraCollectionResponse {
    /// Records for the requested range; absent on some endpoints when empty
    #[serde(default)]
    data: Option<Vec<MetricRecord>>,
}

/// Oura Ring REST accessor.
///
/// Holds one bearer token for the lifetime of the process. There is no
/// refresh flow: an expired token surfaces as
/// [`ProviderError::AuthenticationFailed`] on the next call.
pub struct OuraProvider {
    config: ProviderConfig,
    api_token: String,
    client: Client,
}

impl fmt::Debug for OuraProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OuraProvider")
            .field("config", &self.config)
            .field("api_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl OuraProvider {
    /// Create a provider from an explicit token, falling back to `OURA_API_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingCredential`] when neither source yields a
    /// non-empty token.
    pub fn new(api_token: Option<String>) -> ProviderResult<Self> {
        Self::with_config(api_token, ProviderConfig::default(), shared_client().clone())
    }

    /// Create a provider with custom configuration and HTTP client
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingCredential`] when no token is available.
    pub fn with_config(
        api_token: Option<String>,
        config: ProviderConfig,
        client: Client,
    ) -> ProviderResult<Self> {
        let api_token = resolve_token(api_token).ok_or(ProviderError::MissingCredential)?;

        debug!(
            provider = %config.name,
            base_url = %config.api_base_url,
            "Oura provider configured"
        );

        Ok(Self {
            config,
            api_token,
            client,
        })
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.api_base_url,
            endpoint.trim_start_matches('/')
        )
    }

    fn authorized_get(&self, endpoint: &str) -> RequestBuilder {
        self.client
            .get(self.endpoint_url(endpoint))
            .bearer_auth(&self.api_token)
    }

    /// Execute the request and decode the collection envelope
    async fn execute_collection_request(
        &self,
        request: RequestBuilder,
    ) -> ProviderResult<Vec<MetricRecord>> {
        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(describe_transport_error(&e)))?;

        let status = response.status();
        debug!("Oura API response status: {status}");

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError(describe_transport_error(&e)))?;

        if !status.is_success() {
            return Err(Self::handle_api_error(status, body));
        }

        let envelope: OuraCollectionResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        Ok(envelope.data.unwrap_or_default())
    }

    /// Map a non-success status to the matching error variant
    fn handle_api_error(status: StatusCode, body: String) -> ProviderError {
        error!(
            "Oura API request failed - status: {status}, body_length: {} bytes",
            body.len()
        );

        match status {
            StatusCode::UNAUTHORIZED => ProviderError::AuthenticationFailed,
            StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimitExceeded,
            _ => ProviderError::ApiError {
                status_code: status.as_u16(),
                body,
            },
        }
    }
}

#[async_trait]
impl HealthDataProvider for OuraProvider {
    fn name(&self) -> &'static str {
        oura_api::PROVIDER_NAME
    }

    #[instrument(skip(self), fields(provider = "oura", api_call = "test_connection"))]
    async fn test_connection(&self) -> bool {
        match self.authorized_get(oura_api::PERSONAL_INFO).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                warn!(status = %response.status(), "Oura connectivity probe rejected");
                false
            }
            Err(e) => {
                warn!("Oura connectivity probe failed: {}", describe_transport_error(&e));
                false
            }
        }
    }

    #[instrument(
        skip(self, endpoint, range),
        fields(
            provider = "oura",
            endpoint = %endpoint,
            start_date = %range.start_date,
            end_date = %range.end_date,
        )
    )]
    async fn fetch(&self, endpoint: &str, range: &DateRange) -> ProviderResult<Vec<MetricRecord>> {
        debug!("Starting Oura API request to endpoint: {endpoint}");

        let request = self.authorized_get(endpoint).query(&range.query_params());
        let records = self.execute_collection_request(request).await?;

        debug!(records = records.len(), "Oura API request completed");
        Ok(records)
    }
}

/// Explicit token first, then the environment; blank values count as absent
fn resolve_token(explicit: Option<String>) -> Option<String> {
    explicit
        .filter(|token| !token.trim().is_empty())
        .or_else(|| {
            std::env::var(env_vars::OURA_API_TOKEN)
                .ok()
                .filter(|token| !token.trim().is_empty())
        })
}

/// Render a reqwest error with its full cause chain
fn describe_transport_error(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
