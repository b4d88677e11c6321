// ABOUTME: JSON-RPC 2.0 request, response and error types for the MCP wire format
// ABOUTME: Constructors for the standard error responses the server emits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::errors::{
    ERROR_INTERNAL_ERROR, ERROR_INVALID_PARAMS, ERROR_INVALID_REQUEST, ERROR_METHOD_NOT_FOUND,
    ERROR_PARSE,
};
use crate::constants::protocol::JSONRPC_VERSION;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// MCP request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpRequest {
    /// Must be `"2.0"`; absent decodes as empty and is rejected later
    #[serde(default)]
    pub jsonrpc: String,
    /// Method name
    pub method: String,
    /// Method parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    /// Optional ID - notifications don't have IDs, only regular requests do
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

impl McpRequest {
    /// Build a request (used by tests and the CLI)
    #[must_use]
    pub fn new(method: impl Into<String>, params: Option<Value>, id: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            method: method.into(),
            params,
            id,
        }
    }

    /// Whether the message is a notification (no response expected): it has
    /// no `id`, or its method is in the `notifications/` namespace
    #[must_use]
    pub fn is_notification(&self) -> bool {
        self.id.is_none() || self.method.starts_with("notifications/")
    }

    /// Response ID; `null` when the request carried none
    #[must_use]
    pub fn response_id(&self) -> Value {
        self.id.clone().unwrap_or(Value::Null)
    }
}

/// MCP response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpResponse {
    /// Always `"2.0"`
    pub jsonrpc: String,
    /// Success payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
    /// Echo of the request ID
    pub id: Value,
}

impl McpResponse {
    /// Successful response
    #[must_use]
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Error response
    #[must_use]
    pub fn error(id: Value, error: McpError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: None,
            error: Some(error),
            id,
        }
    }
}

/// MCP error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpError {
    /// JSON-RPC error code
    pub code: i32,
    /// Error message
    pub message: String,
    /// Optional structured details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl McpError {
    /// Create a new MCP error
    #[must_use]
    pub const fn new(code: i32, message: String) -> Self {
        Self {
            code,
            message,
            data: None,
        }
    }

    /// Line was not valid JSON
    #[must_use]
    pub fn parse_error() -> Self {
        Self::new(ERROR_PARSE, "Parse error".to_owned())
    }

    /// Valid JSON that is not a JSON-RPC 2.0 request
    #[must_use]
    pub fn invalid_request(detail: impl Into<String>) -> Self {
        Self::new(ERROR_INVALID_REQUEST, detail.into())
    }

    /// Method is not handled by this server
    #[must_use]
    pub fn method_not_found(method: &str) -> Self {
        Self::new(ERROR_METHOD_NOT_FOUND, format!("Unknown method: {method}"))
    }

    /// Parameters missing or malformed
    #[must_use]
    pub fn invalid_params(detail: impl Into<String>) -> Self {
        Self::new(ERROR_INVALID_PARAMS, detail.into())
    }

    /// Unexpected server failure
    #[must_use]
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(ERROR_INTERNAL_ERROR, detail.into())
    }
}
