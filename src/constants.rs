// ABOUTME: Application constants re-exported from oura-core plus environment-driven overrides
// ABOUTME: Resolves the announced MCP protocol version at runtime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use oura_core::constants::{defaults, env_vars, errors, json_fields, oura_api, tools};

/// Protocol constants with runtime overrides
pub mod protocol {
    pub use oura_core::constants::protocol::*;

    use super::env_vars;
    use std::env;

    /// Default MCP protocol version, overridable via `MCP_PROTOCOL_VERSION`
    #[must_use]
    pub fn mcp_protocol_version() -> String {
        env::var(env_vars::MCP_PROTOCOL_VERSION)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| MCP_PROTOCOL_VERSION.to_owned())
    }

    /// Version to announce in reply to a client's `initialize`.
    ///
    /// Echoes the client's version when this server speaks it, otherwise
    /// falls back to [`mcp_protocol_version`].
    #[must_use]
    pub fn negotiate_protocol_version(requested: Option<&str>) -> String {
        match requested {
            Some(version) if SUPPORTED_PROTOCOL_VERSIONS.contains(&version) => version.to_owned(),
            _ => mcp_protocol_version(),
        }
    }
}
