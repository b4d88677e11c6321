// ABOUTME: Oura Ring API provider implementation and shared HTTP plumbing
// ABOUTME: Core accessor trait, shared HTTP client, and the Oura REST accessor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health data provider implementations and core abstractions.
//!
//! The server talks to the vendor only through the [`HealthDataProvider`]
//! trait, so tests can swap in a stub and count calls.

// Re-export oura-core modules so provider code can keep `use crate::errors::*` etc.
pub use oura_core::constants;
pub use oura_core::errors;
pub use oura_core::models;

/// Core provider trait and configuration
pub mod core;
/// Shared HTTP client for provider API calls
pub mod http_client;
/// Oura REST API accessor
pub mod oura_provider;

pub use core::{HealthDataProvider, ProviderConfig};
pub use http_client::{initialize_shared_client, shared_client};
pub use oura_core::errors::provider::{ProviderError, ProviderResult};
pub use oura_provider::OuraProvider;
