// ABOUTME: Configuration management module for server settings
// ABOUTME: Loads the Oura credential and HTTP timeouts from .env, environment and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Oura MCP Server
//!
//! - **Environment**: credential and HTTP client settings from `.env` and the process environment

/// Environment and server configuration
pub mod environment;

pub use environment::{HttpClientConfig, ServerConfig};
