// ABOUTME: Tool dispatcher routing a tool name and argument map to the Oura accessor
// ABOUTME: Converts every outcome, failures included, into a single text tool result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::schema::{get_tools, ToolResponse, ToolSchema};
use crate::errors::{ProviderError, ProviderResult, ToolError};
use crate::formatters::{format_activity_summary, format_readiness_summary, format_sleep_summary};
use crate::models::{DateRange, MetricRecord};
use crate::providers::HealthDataProvider;
use crate::tools::{DateRangeParams, OuraTool};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

const STATUS_OK_MESSAGE: &str =
    "✅ Oura connection successful! Your API token is configured correctly.";
const STATUS_FAILED_MESSAGE: &str =
    "❌ Could not connect to Oura. Please check your API token in the .env file.";
const MISSING_DATES_MESSAGE: &str =
    "❌ Please provide both start_date and end_date in YYYY-MM-DD format.";

type Renderer = fn(&DateRange, &[MetricRecord]) -> String;

/// Dispatches tool invocations to the injected provider.
///
/// This is the only place where provider and argument failures become text:
/// every call produces exactly one text item with `isError: false`.
#[derive(Clone)]
pub struct ToolHandlers {
    provider: Arc<dyn HealthDataProvider>,
}

impl ToolHandlers {
    /// Create a dispatcher over `provider`
    #[must_use]
    pub fn new(provider: Arc<dyn HealthDataProvider>) -> Self {
        Self { provider }
    }

    /// The static tool catalog
    #[must_use]
    pub fn list_tools() -> Vec<ToolSchema> {
        get_tools()
    }

    /// Invoke a tool by name. `arguments` of `None` or `null` count as empty.
    pub async fn handle_tool_call(&self, name: &str, arguments: Option<&Value>) -> ToolResponse {
        let start_time = Instant::now();

        let text = match OuraTool::from_name(name) {
            Some(tool) => self.execute(tool, arguments).await,
            None => {
                warn!(tool = %name, "Unknown tool requested");
                ToolError::not_found(name).to_string()
            }
        };

        info!(
            tool = %name,
            duration_ms = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Tool call completed"
        );

        ToolResponse::text(text)
    }

    async fn execute(&self, tool: OuraTool, arguments: Option<&Value>) -> String {
        match tool {
            OuraTool::Status => self.handle_status().await,
            OuraTool::Sleep => match Self::date_range(tool, arguments) {
                Ok(range) => {
                    let fetched = self.provider.get_sleep_data(&range).await;
                    Self::render(tool, &range, fetched, format_sleep_summary)
                }
                Err(text) => text,
            },
            OuraTool::Activity => match Self::date_range(tool, arguments) {
                Ok(range) => {
                    let fetched = self.provider.get_activity_data(&range).await;
                    Self::render(tool, &range, fetched, format_activity_summary)
                }
                Err(text) => text,
            },
            OuraTool::Readiness => match Self::date_range(tool, arguments) {
                Ok(range) => {
                    let fetched = self.provider.get_readiness_data(&range).await;
                    Self::render(tool, &range, fetched, format_readiness_summary)
                }
                Err(text) => text,
            },
        }
    }

    /// Validated dates, or the text to return instead of calling the provider
    fn date_range(tool: OuraTool, arguments: Option<&Value>) -> Result<DateRange, String> {
        DateRangeParams::from_arguments(tool, arguments)
            .map(|params| params.range)
            .map_err(|e| {
                debug!(tool = %tool, "Rejected tool arguments: {e}");
                MISSING_DATES_MESSAGE.to_owned()
            })
    }

    fn render(
        tool: OuraTool,
        range: &DateRange,
        fetched: ProviderResult<Vec<MetricRecord>>,
        render: Renderer,
    ) -> String {
        match fetched {
            Ok(records) => {
                debug!(tool = %tool, records = records.len(), "Rendering records");
                render(range, &records)
            }
            Err(e) => Self::provider_failure_text(tool, &e),
        }
    }

    async fn handle_status(&self) -> String {
        if self.provider.test_connection().await {
            info!(provider = self.provider.name(), "Connectivity check passed");
            STATUS_OK_MESSAGE.to_owned()
        } else {
            warn!(provider = self.provider.name(), "Connectivity check failed");
            STATUS_FAILED_MESSAGE.to_owned()
        }
    }

    fn provider_failure_text(tool: OuraTool, error: &ProviderError) -> String {
        match error {
            ProviderError::MissingCredential
            | ProviderError::AuthenticationFailed
            | ProviderError::RateLimitExceeded => {
                warn!(tool = %tool, kind = error.kind(), "Provider rejected request: {error}");
            }
            ProviderError::ApiError { .. }
            | ProviderError::NetworkError(_)
            | ProviderError::InvalidResponse(_) => {
                error!(tool = %tool, kind = error.kind(), "Provider request failed: {error}");
            }
        }

        format!("Error: {error}")
    }
}
