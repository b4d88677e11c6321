// ABOUTME: Core provider trait and configuration for health data access
// ABOUTME: HealthDataProvider is the seam between the tool dispatcher and the vendor API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Provider Architecture
//!
//! A provider owns a credential and performs authenticated reads against a
//! vendor API. Every read returns raw [`MetricRecord`] rows; rendering them is
//! the caller's job.
//!
//! Only two methods are required: [`HealthDataProvider::test_connection`] and
//! [`HealthDataProvider::fetch`]. The typed accessors are thin defaults that
//! pick the endpoint, so a test stub gets all of them for free.

use crate::constants::oura_api;
use crate::errors::ProviderResult;
use crate::models::{DateRange, MetricRecord};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Static provider configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider name, used in logs
    pub name: String,
    /// Versioned REST root, without trailing slash
    pub api_base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: oura_api::PROVIDER_NAME.to_owned(),
            api_base_url: oura_api::BASE_URL.to_owned(),
        }
    }
}

impl ProviderConfig {
    /// Same provider, different root (mock servers, proxies)
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into().trim_end_matches('/').to_owned(),
            ..Self::default()
        }
    }
}

/// Authenticated read access to a health data API.
///
/// Each call performs at most one HTTP round trip and never retries.
#[async_trait]
pub trait HealthDataProvider: Send + Sync {
    /// Provider name
    fn name(&self) -> &'static str;

    /// Probe the API with the stored credential.
    ///
    /// Returns `true` on any 2xx answer and `false` on every failure; never errors.
    async fn test_connection(&self) -> bool;

    /// Fetch the records of `endpoint` for `range`.
    ///
    /// A response without a `data` key yields an empty vector.
    async fn fetch(&self, endpoint: &str, range: &DateRange) -> ProviderResult<Vec<MetricRecord>>;

    /// Sleep sessions
    async fn get_sleep_data(&self, range: &DateRange) -> ProviderResult<Vec<MetricRecord>> {
        self.fetch(oura_api::SLEEP, range).await
    }

    /// Daily activity summaries
    async fn get_activity_data(&self, range: &DateRange) -> ProviderResult<Vec<MetricRecord>> {
        self.fetch(oura_api::DAILY_ACTIVITY, range).await
    }

    /// Daily readiness scores
    async fn get_readiness_data(&self, range: &DateRange) -> ProviderResult<Vec<MetricRecord>> {
        self.fetch(oura_api::DAILY_READINESS, range).await
    }

    /// Heart rate samples
    async fn get_heart_rate_data(&self, range: &DateRange) -> ProviderResult<Vec<MetricRecord>> {
        self.fetch(oura_api::HEARTRATE, range).await
    }
}
