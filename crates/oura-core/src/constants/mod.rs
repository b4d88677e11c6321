// ABOUTME: Application-wide constants for protocol, tools, JSON fields and the Oura API
// ABOUTME: Pure compile-time constants without runtime configuration dependencies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Runtime-configurable values (protocol version override, credential lookup)
//! live in the server crate; everything here is fixed at compile time.

/// Protocol version and identification constants
pub mod protocol {
    /// JSON-RPC version (standard, not configurable)
    pub const JSONRPC_VERSION: &str = "2.0";

    /// Default MCP protocol version announced during `initialize`
    pub const MCP_PROTOCOL_VERSION: &str = "2025-06-18";

    /// MCP protocol versions this server can speak, newest first
    pub const SUPPORTED_PROTOCOL_VERSIONS: &[&str] =
        &["2025-06-18", "2025-03-26", "2024-11-05"];

    /// Server name reported in `serverInfo`
    pub const SERVER_NAME: &str = "oura-mcp-server";
}

/// JSON-RPC error codes
pub mod errors {
    /// Invalid JSON was received
    pub const ERROR_PARSE: i32 = -32700;
    /// The JSON sent is not a valid request object
    pub const ERROR_INVALID_REQUEST: i32 = -32600;
    /// The method does not exist
    pub const ERROR_METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid method parameters
    pub const ERROR_INVALID_PARAMS: i32 = -32602;
    /// Internal JSON-RPC error
    pub const ERROR_INTERNAL_ERROR: i32 = -32603;
}

/// MCP tool names
pub mod tools {
    /// Credential and connectivity check
    pub const GET_OURA_STATUS: &str = "get_oura_status";
    /// Sleep sessions for a date range
    pub const GET_SLEEP_DATA: &str = "get_sleep_data";
    /// Daily activity for a date range
    pub const GET_ACTIVITY_DATA: &str = "get_activity_data";
    /// Daily readiness scores for a date range
    pub const GET_READINESS_DATA: &str = "get_readiness_data";
}

/// JSON field names used in tool arguments and vendor records
pub mod json_fields {
    /// Inclusive range start, `YYYY-MM-DD`
    pub const START_DATE: &str = "start_date";
    /// Inclusive range end, `YYYY-MM-DD`
    pub const END_DATE: &str = "end_date";
    /// Calendar day of a record
    pub const DAY: &str = "day";

    /// Total sleep in seconds
    pub const TOTAL_SLEEP_DURATION: &str = "total_sleep_duration";
    /// REM sleep in seconds
    pub const REM_SLEEP_DURATION: &str = "rem_sleep_duration";
    /// Deep sleep in seconds
    pub const DEEP_SLEEP_DURATION: &str = "deep_sleep_duration";
    /// Light sleep in seconds
    pub const LIGHT_SLEEP_DURATION: &str = "light_sleep_duration";
    /// Sleep efficiency percentage
    pub const SLEEP_EFFICIENCY: &str = "sleep_efficiency";

    /// Step count
    pub const STEPS: &str = "steps";
    /// Active calories
    pub const ACTIVE_CALORIES: &str = "active_calories";
    /// Total calories
    pub const TOTAL_CALORIES: &str = "total_calories";

    /// Readiness score (0-100)
    pub const SCORE: &str = "score";
    /// Body temperature deviation in degrees Celsius
    pub const TEMPERATURE_DEVIATION: &str = "temperature_deviation";
}

/// Oura REST API constants
pub mod oura_api {
    /// Versioned user collection root
    pub const BASE_URL: &str = "https://api.ouraring.com/v2/usercollection";
    /// Personal info endpoint, used as the connectivity probe
    pub const PERSONAL_INFO: &str = "personal_info";
    /// Sleep sessions endpoint
    pub const SLEEP: &str = "sleep";
    /// Daily activity endpoint
    pub const DAILY_ACTIVITY: &str = "daily_activity";
    /// Daily readiness endpoint
    pub const DAILY_READINESS: &str = "daily_readiness";
    /// Heart rate samples endpoint
    pub const HEARTRATE: &str = "heartrate";
    /// Provider name used in logs
    pub const PROVIDER_NAME: &str = "oura";
}

/// Environment variable names
pub mod env_vars {
    /// Oura personal access token
    pub const OURA_API_TOKEN: &str = "OURA_API_TOKEN";
    /// Override for the announced MCP protocol version
    pub const MCP_PROTOCOL_VERSION: &str = "MCP_PROTOCOL_VERSION";
    /// Log output format (`json`, `compact`, `pretty`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Default values
pub mod defaults {
    /// HTTP request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// HTTP connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Days covered by the CLI `call` command when no dates are given
    pub const CLI_LOOKBACK_DAYS: i64 = 7;
    /// Placeholder for records without a `day`
    pub const UNKNOWN_DATE: &str = "Unknown date";
}
