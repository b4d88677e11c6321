// ABOUTME: Model Context Protocol (MCP) implementation for AI assistant integration
// ABOUTME: JSON-RPC wire types, tool catalog, dispatcher, request routing and stdio transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// JSON-RPC method routing
pub mod mcp_request_processor;
/// JSON-RPC request/response/error types
pub mod protocol;
/// MCP wire types and the tool catalog
pub mod schema;
/// Tool dispatcher
pub mod tool_handlers;
/// Line-delimited stdio transport
pub mod transport;

pub use mcp_request_processor::McpRequestProcessor;
pub use tool_handlers::ToolHandlers;
pub use transport::StdioTransport;
