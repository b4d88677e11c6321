// ABOUTME: MCP request processing and JSON-RPC method routing
// ABOUTME: Validates requests and routes initialize, ping, tools/list and tools/call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{
    protocol::{McpError, McpRequest, McpResponse},
    schema::{InitializeRequest, InitializeResponse, ToolCall},
    tool_handlers::ToolHandlers,
};
use crate::constants::protocol::{negotiate_protocol_version, JSONRPC_VERSION, SERVER_NAME};
use serde_json::{json, Value};
use std::time::Instant;
use tracing::{debug, warn};

/// Processes MCP protocol requests with validation, routing, and execution
#[derive(Clone)]
pub struct McpRequestProcessor {
    tool_handlers: ToolHandlers,
}

impl McpRequestProcessor {
    /// Create a new MCP request processor
    #[must_use]
    pub const fn new(tool_handlers: ToolHandlers) -> Self {
        Self { tool_handlers }
    }

    /// Handle an MCP request; notifications yield `None`
    pub async fn handle_request(&self, request: McpRequest) -> Option<McpResponse> {
        let start_time = Instant::now();
        debug!(method = %request.method, id = ?request.id, "Processing MCP request");

        if request.is_notification() {
            debug!(method = %request.method, "Notification received");
            return None;
        }

        let response = self.process_request(&request).await;

        debug!(
            method = %request.method,
            duration_ms = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX),
            "MCP request completed"
        );
        Some(response)
    }

    async fn process_request(&self, request: &McpRequest) -> McpResponse {
        if let Err(error) = Self::validate_request(request) {
            warn!(
                "Invalid MCP request: method={}, jsonrpc={}",
                request.method, request.jsonrpc
            );
            return McpResponse::error(request.response_id(), error);
        }

        match request.method.as_str() {
            "initialize" => Self::handle_initialize(request),
            "ping" => Self::handle_ping(request),
            "tools/list" => Self::handle_tools_list(request),
            "tools/call" => self.handle_tools_call(request).await,
            _ => Self::handle_unknown_method(request),
        }
    }

    /// Validate MCP request format and required fields
    fn validate_request(request: &McpRequest) -> Result<(), McpError> {
        if request.jsonrpc != JSONRPC_VERSION {
            return Err(McpError::invalid_request(format!(
                "Invalid JSON-RPC version: got '{}', expected '{}'",
                request.jsonrpc, JSONRPC_VERSION
            )));
        }

        if request.method.is_empty() {
            return Err(McpError::invalid_request("Missing method"));
        }

        Ok(())
    }

    /// Handle MCP initialize request
    fn handle_initialize(request: &McpRequest) -> McpResponse {
        debug!("Handling initialize request");

        let requested = request
            .params
            .clone()
            .and_then(|params| serde_json::from_value::<InitializeRequest>(params).ok())
            .and_then(|init| init.protocol_version);

        let response = InitializeResponse::new(
            negotiate_protocol_version(requested.as_deref()),
            SERVER_NAME.to_owned(),
            env!("CARGO_PKG_VERSION").to_owned(),
        );

        match serde_json::to_value(&response) {
            Ok(result) => McpResponse::success(request.response_id(), result),
            Err(e) => McpResponse::error(
                request.response_id(),
                McpError::internal(format!("Failed to serialize initialize response: {e}")),
            ),
        }
    }

    /// Handle MCP ping request
    fn handle_ping(request: &McpRequest) -> McpResponse {
        debug!("Handling ping request");
        McpResponse::success(request.response_id(), json!({}))
    }

    /// Handle tools/list request
    fn handle_tools_list(request: &McpRequest) -> McpResponse {
        debug!("Handling tools/list request");
        let tools = ToolHandlers::list_tools();
        McpResponse::success(request.response_id(), json!({ "tools": tools }))
    }

    /// Handle tools/call request
    async fn handle_tools_call(&self, request: &McpRequest) -> McpResponse {
        debug!("Handling tools/call request");

        let Some(params) = request.params.clone() else {
            return McpResponse::error(
                request.response_id(),
                McpError::invalid_params("Missing parameters for tools/call"),
            );
        };

        let call: ToolCall = match serde_json::from_value(params) {
            Ok(call) => call,
            Err(e) => {
                return McpResponse::error(
                    request.response_id(),
                    McpError::invalid_params(format!("Invalid tools/call parameters: {e}")),
                );
            }
        };

        let arguments = call.arguments.as_ref().filter(|args| !args.is_null());
        let tool_response = self
            .tool_handlers
            .handle_tool_call(&call.name, arguments)
            .await;

        match serde_json::to_value(&tool_response) {
            Ok(result) => McpResponse::success(request.response_id(), result),
            Err(e) => McpResponse::error(
                request.response_id(),
                McpError::internal(format!("Failed to serialize tool response: {e}")),
            ),
        }
    }

    /// Handle unknown method
    fn handle_unknown_method(request: &McpRequest) -> McpResponse {
        warn!("Unknown MCP method: {}", request.method);
        McpResponse::error(
            request.response_id(),
            McpError::method_not_found(&request.method),
        )
    }

    /// Decode one raw line and process it.
    ///
    /// Invalid JSON yields a parse error with a `null` ID; valid JSON that is
    /// not a request yields an invalid-request error echoing any `id` found.
    pub async fn handle_line(&self, line: &str) -> Option<McpResponse> {
        let message: Value = match serde_json::from_str(line) {
            Ok(message) => message,
            Err(e) => {
                warn!("Failed to parse MCP message: {}", e);
                return Some(McpResponse::error(Value::Null, McpError::parse_error()));
            }
        };

        let id = message.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<McpRequest>(message) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => {
                warn!("Message is not a valid MCP request: {}", e);
                Some(McpResponse::error(
                    id,
                    McpError::invalid_request(format!("Invalid Request: {e}")),
                ))
            }
        }
    }
}
