// ABOUTME: Main library entry point for the Oura MCP server
// ABOUTME: Exposes Oura Ring sleep, activity and readiness data as MCP tools over stdio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Oura MCP Server
//!
//! A Model Context Protocol (MCP) server that lets an AI assistant read
//! date-ranged health metrics from the Oura Ring REST API without speaking
//! the vendor's HTTP API itself.
//!
//! ## Architecture
//!
//! - **Providers** (`oura-providers` crate): the authenticated Oura accessor
//!   behind the `HealthDataProvider` trait
//! - **Tools**: the fixed catalog of four tools and argument validation
//! - **Formatters**: render vendor rows into human-readable text
//! - **MCP**: JSON-RPC routing and the line-delimited stdio transport
//! - **Config**: `.env` + environment + CLI overrides
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use oura_mcp_server::config::environment::ServerConfig;
//! use oura_mcp_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("HTTP timeout: {}s", config.http_client.timeout_secs);
//!     Ok(())
//! }
//! ```

/// Configuration loaded from `.env`, the environment and CLI overrides
pub mod config;

/// Application constants and runtime-overridable protocol settings
pub mod constants;

/// Unified error handling
pub mod errors;

/// Text renderers for Oura records
pub mod formatters;

/// Logging configuration
pub mod logging;

/// Model Context Protocol implementation
pub mod mcp;

/// Tool catalog identity and argument validation
pub mod tools;

pub use oura_core::models;
pub use oura_providers as providers;
