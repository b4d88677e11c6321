// ABOUTME: MCP protocol schema definitions and the Oura tool catalog
// ABOUTME: Typed wire structures for initialize, tools/list and tools/call results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! MCP Protocol Schema Definitions
//!
//! Type-safe definitions for the MCP messages this server produces, plus the
//! tool catalog. Properties use a `BTreeMap` so `tools/list` serializes the
//! same bytes on every run.

use crate::constants::json_fields::{END_DATE, START_DATE};
use crate::tools::OuraTool;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Server Information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
}

/// MCP Tool Schema Definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Argument constraints
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonSchema,
}

/// JSON Schema Definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Always `"object"` for tool inputs
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Named properties
    pub properties: BTreeMap<String, PropertySchema>,
    /// Required property names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    /// Whether properties outside `properties` are accepted
    #[serde(
        rename = "additionalProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<bool>,
}

/// JSON Schema Property Definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySchema {
    /// JSON type name
    #[serde(rename = "type")]
    pub property_type: String,
    /// Human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Tool Call for executing a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Requested tool name
    pub name: String,
    /// Untyped argument bag
    #[serde(default)]
    pub arguments: Option<Value>,
}

/// Tool Response after execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResponse {
    /// Result content items
    pub content: Vec<Content>,
    /// Whether the tool reported a failure
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResponse {
    /// A single text item. Failures are also reported this way, with
    /// `isError: false`, so hosts show the message instead of a protocol error.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Text of the first content item
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|Content::Text { text }| text.as_str())
    }
}

/// Content types for MCP messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Content {
    /// Plain text
    #[serde(rename = "text")]
    Text {
        /// Text body
        text: String,
    },
}

/// MCP Server Capabilities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerCapabilities {
    /// Tool support
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolsCapability>,
}

/// Tools capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsCapability {
    /// Whether the server emits `tools/list_changed` notifications
    #[serde(rename = "listChanged", skip_serializing_if = "Option::is_none")]
    pub list_changed: Option<bool>,
}

/// Complete MCP Initialize Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializeResponse {
    /// Negotiated protocol version
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server identification
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
    /// Server capabilities
    pub capabilities: ServerCapabilities,
}

impl InitializeResponse {
    /// Create an initialize response; the tool list never changes at runtime
    #[must_use]
    pub fn new(protocol_version: String, server_name: String, server_version: String) -> Self {
        Self {
            protocol_version,
            server_info: ServerInfo {
                name: server_name,
                version: server_version,
            },
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
        }
    }
}

/// Initialize Request parameters from the client (only the fields we read)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InitializeRequest {
    /// Protocol version the client wants
    #[serde(rename = "protocolVersion", default)]
    pub protocol_version: Option<String>,
}

/// Get all available tools, in catalog order
#[must_use]
pub fn get_tools() -> Vec<ToolSchema> {
    OuraTool::ALL.into_iter().map(create_tool).collect()
}

fn create_tool(tool: OuraTool) -> ToolSchema {
    let input_schema = if tool.requires_date_range() {
        date_range_schema()
    } else {
        empty_schema()
    };

    ToolSchema {
        name: tool.name().to_owned(),
        description: tool.description().to_owned(),
        input_schema,
    }
}

/// Schema for tools without arguments
fn empty_schema() -> JsonSchema {
    JsonSchema {
        schema_type: "object".into(),
        properties: BTreeMap::new(),
        required: None,
        additional_properties: Some(false),
    }
}

/// Schema shared by the three data tools
fn date_range_schema() -> JsonSchema {
    let mut properties = BTreeMap::new();

    properties.insert(
        START_DATE.to_owned(),
        PropertySchema {
            property_type: "string".into(),
            description: Some("Start date in YYYY-MM-DD format".into()),
        },
    );

    properties.insert(
        END_DATE.to_owned(),
        PropertySchema {
            property_type: "string".into(),
            description: Some("End date in YYYY-MM-DD format".into()),
        },
    );

    JsonSchema {
        schema_type: "object".into(),
        properties,
        required: Some(vec![START_DATE.to_owned(), END_DATE.to_owned()]),
        additional_properties: Some(false),
    }
}
