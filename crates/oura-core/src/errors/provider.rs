// ABOUTME: Structured error types for Oura API accessor operations
// ABOUTME: Tags each vendor failure as auth, rate limit, HTTP status, network, or decode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Failures surfaced by the vendor API accessor.
///
/// The `Display` text of each variant is user-facing: the tool dispatcher
/// renders it verbatim after an `Error: ` prefix.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// No bearer token was supplied and none was found in the environment
    #[error(
        "Oura API token not found. Please set OURA_API_TOKEN in your .env file or pass it directly."
    )]
    MissingCredential,

    /// HTTP 401: the token is invalid or expired
    #[error("Authentication failed. Please check your Oura API token.")]
    AuthenticationFailed,

    /// HTTP 429
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimitExceeded,

    /// Any other non-success status
    #[error("API request failed: {status_code} - {body}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Raw response body
        body: String,
    },

    /// DNS, connect, TLS or timeout failure
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The vendor answered 2xx with a body that is not the expected JSON shape
    #[error("Failed to parse Oura API response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Short machine-readable tag, used as a structured log field
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::AuthenticationFailed => "authentication_failed",
            Self::RateLimitExceeded => "rate_limited",
            Self::ApiError { .. } => "api_error",
            Self::NetworkError(_) => "network_error",
            Self::InvalidResponse(_) => "invalid_response",
        }
    }

}

/// Result alias for accessor operations
pub type ProviderResult<T> = Result<T, ProviderError>;
