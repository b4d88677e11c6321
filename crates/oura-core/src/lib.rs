// ABOUTME: Core types and constants for the Oura MCP server
// ABOUTME: Foundation crate with error handling, metric records, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Oura Core
//!
//! Foundation crate providing shared types and constants for the Oura MCP
//! server. Both the provider crate and the server crate depend on it, so it is
//! kept free of networking and runtime dependencies.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the domain errors `ProviderError` / `ToolError`
//! - **constants**: protocol, tool, field and vendor endpoint constants
//! - **models**: `MetricRecord` and `DateRange`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Vendor data rows and query ranges
pub mod models;
