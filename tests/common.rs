// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Quiet test logging plus a stub provider that counts and records calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `oura_mcp_server`

use async_trait::async_trait;
use oura_mcp_server::{
    errors::{ProviderError, ProviderResult},
    mcp::{McpRequestProcessor, ToolHandlers},
    models::{DateRange, MetricRecord},
    providers::HealthDataProvider,
};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// In-memory provider returning a canned outcome
pub struct StubProvider {
    connected: bool,
    outcome: ProviderResult<Vec<MetricRecord>>,
    fetch_calls: AtomicUsize,
    probe_calls: AtomicUsize,
    last_request: Mutex<Option<(String, DateRange)>>,
}

impl StubProvider {
    /// Every fetch succeeds with `records`
    pub fn with_records(records: Vec<Value>) -> Self {
        Self::with_outcome(Ok(records.into_iter().map(record).collect()))
    }

    /// Every fetch fails with `error`
    pub fn failing(error: ProviderError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: ProviderResult<Vec<MetricRecord>>) -> Self {
        Self {
            connected: true,
            outcome,
            fetch_calls: AtomicUsize::new(0),
            probe_calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Connectivity probe result
    #[must_use]
    pub fn connected(mut self, connected: bool) -> Self {
        self.connected = connected;
        self
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn probe_calls(&self) -> usize {
        self.probe_calls.load(Ordering::SeqCst)
    }

    /// Endpoint and range of the most recent fetch
    pub fn last_request(&self) -> Option<(String, DateRange)> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl HealthDataProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn test_connection(&self) -> bool {
        self.probe_calls.fetch_add(1, Ordering::SeqCst);
        self.connected
    }

    async fn fetch(&self, endpoint: &str, range: &DateRange) -> ProviderResult<Vec<MetricRecord>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some((endpoint.to_owned(), range.clone()));
        self.outcome.clone()
    }
}

/// Parse a JSON object into a record
pub fn record(value: Value) -> MetricRecord {
    serde_json::from_value(value).unwrap()
}

/// Dispatcher over a shared stub
pub fn handlers(stub: &Arc<StubProvider>) -> ToolHandlers {
    init_test_logging();
    ToolHandlers::new(stub.clone())
}

/// Request processor over a shared stub
pub fn processor(stub: &Arc<StubProvider>) -> McpRequestProcessor {
    McpRequestProcessor::new(handlers(stub))
}
