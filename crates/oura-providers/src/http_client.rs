// ABOUTME: Shared HTTP client with connection pooling for provider API calls
// ABOUTME: Singleton pattern with configurable timeouts initialized at server startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::defaults::{HTTP_CONNECT_TIMEOUT_SECS, HTTP_TIMEOUT_SECS};
use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

/// Configured timeout values for the shared client
static CLIENT_TIMEOUTS: OnceLock<(u64, u64)> = OnceLock::new();

/// Global shared HTTP client with configured timeouts
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Initialize the shared HTTP client timeout configuration
///
/// Must be called once at startup before the provider is constructed.
/// If not called, defaults are used (30s timeout, 10s connect timeout).
/// Returns `false` when timeouts were already fixed by an earlier call.
pub fn initialize_shared_client(timeout_secs: u64, connect_timeout_secs: u64) -> bool {
    CLIENT_TIMEOUTS
        .set((timeout_secs, connect_timeout_secs))
        .is_ok()
}

/// Build a standalone client with the given timeouts
#[must_use]
pub fn build_client(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .user_agent(concat!("oura-mcp-server/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Get the shared HTTP client for provider API calls
///
/// Falls back to default timeouts if `initialize_shared_client()` was not called.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS
            .get()
            .copied()
            .unwrap_or((HTTP_TIMEOUT_SECS, HTTP_CONNECT_TIMEOUT_SECS));

        build_client(timeout, connect_timeout)
    })
}
