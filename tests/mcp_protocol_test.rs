// ABOUTME: Tests for JSON-RPC routing and the line-delimited stdio transport
// ABOUTME: Drives the request processor and transport with in-memory buffers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used)]

mod common;

use common::{processor, StubProvider};
use oura_mcp_server::mcp::protocol::McpRequest;
use oura_mcp_server::mcp::StdioTransport;
use serde_json::{json, Value};
use serial_test::serial;
use std::sync::Arc;

fn stub() -> Arc<StubProvider> {
    Arc::new(StubProvider::with_records(vec![]))
}

async fn call(request: McpRequest) -> Value {
    let response = processor(&stub()).handle_request(request).await.unwrap();
    serde_json::to_value(response).unwrap()
}

#[tokio::test]
#[serial]
async fn test_initialize_echoes_supported_version() {
    std::env::remove_var("MCP_PROTOCOL_VERSION");
    let response = call(McpRequest::new(
        "initialize",
        Some(json!({"protocolVersion": "2024-11-05", "capabilities": {}})),
        Some(json!(1)),
    ))
    .await;

    assert_eq!(response["id"], 1);
    assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(response["result"]["serverInfo"]["name"], "oura-mcp-server");
    assert_eq!(
        response["result"]["capabilities"],
        json!({"tools": {"listChanged": false}})
    );
}

#[tokio::test]
#[serial]
async fn test_initialize_defaults_unknown_version() {
    std::env::remove_var("MCP_PROTOCOL_VERSION");
    let response = call(McpRequest::new(
        "initialize",
        Some(json!({"protocolVersion": "1999-01-01"})),
        Some(json!("init")),
    ))
    .await;

    assert_eq!(response["id"], "init");
    assert_eq!(response["result"]["protocolVersion"], "2025-06-18");
}

#[tokio::test]
async fn test_ping() {
    let response = call(McpRequest::new("ping", None, Some(json!(7)))).await;
    assert_eq!(response["result"], json!({}));
    assert!(response.get("error").is_none());
}

#[tokio::test]
async fn test_tools_list() {
    let response = call(McpRequest::new("tools/list", None, Some(json!(2)))).await;
    let tools = response["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 4);
    assert_eq!(tools[0]["name"], "get_oura_status");
}

#[tokio::test]
async fn test_tools_call_wraps_text_content() {
    let response = call(McpRequest::new(
        "tools/call",
        Some(json!({"name": "get_foo", "arguments": {}})),
        Some(json!(3)),
    ))
    .await;

    assert_eq!(
        response["result"],
        json!({"content": [{"type": "text", "text": "Unknown tool: get_foo"}], "isError": false})
    );
}

#[tokio::test]
async fn test_tools_call_null_arguments() {
    let response = call(McpRequest::new(
        "tools/call",
        Some(json!({"name": "get_sleep_data", "arguments": null})),
        Some(json!(4)),
    ))
    .await;

    assert_eq!(
        response["result"]["content"][0]["text"],
        "❌ Please provide both start_date and end_date in YYYY-MM-DD format."
    );
}

#[tokio::test]
async fn test_tools_call_without_params_is_invalid() {
    let response = call(McpRequest::new("tools/call", None, Some(json!(5)))).await;
    assert_eq!(response["error"]["code"], -32602);
}

#[tokio::test]
async fn test_unknown_method() {
    let response = call(McpRequest::new("resources/list", None, Some(json!(6)))).await;
    assert_eq!(response["error"]["code"], -32601);
    assert_eq!(response["error"]["message"], "Unknown method: resources/list");
}

#[tokio::test]
async fn test_wrong_jsonrpc_version() {
    let mut request = McpRequest::new("ping", None, Some(json!(8)));
    request.jsonrpc = "1.0".to_owned();
    let response = call(request).await;
    assert_eq!(response["error"]["code"], -32600);
    assert_eq!(response["id"], 8);
}

#[tokio::test]
async fn test_notifications_get_no_response() {
    let stub = stub();
    let response = processor(&stub)
        .handle_request(McpRequest::new("notifications/initialized", None, None))
        .await;
    assert!(response.is_none());
}

#[tokio::test]
async fn test_request_without_id_is_a_notification() {
    let stub = stub();
    let processor = processor(&stub);

    let ping = processor
        .handle_line(r#"{"jsonrpc":"2.0","method":"ping"}"#)
        .await;
    assert!(ping.is_none());

    let status = processor
        .handle_request(McpRequest::new(
            "tools/call",
            Some(json!({"name": "get_oura_status"})),
            None,
        ))
        .await;
    assert!(status.is_none());
    assert_eq!(stub.probe_calls(), 0);
}

#[tokio::test]
async fn test_transport_round_trip() {
    let stub = stub();
    let transport = StdioTransport::new(processor(&stub));
    let mut input = Vec::new();
    input.extend_from_slice(concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#,
        "\n",
        "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "\n",
        "not json\n",
        r#"{"jsonrpc":"2.0","id":9,"params":{}}"#,
        "\n",
    ).as_bytes());
    input.extend_from_slice(b"\xff\xfe garbage\n");
    input.extend_from_slice(concat!(
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"get_oura_status"}}"#,
        "\n",
    ).as_bytes());

    let mut output = Vec::new();
    transport.serve(input.as_slice(), &mut output).await.unwrap();

    let lines: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], json!({"jsonrpc": "2.0", "id": 1, "result": {}}));
    assert_eq!(lines[1]["id"], Value::Null);
    assert_eq!(lines[1]["error"]["code"], -32700);
    assert_eq!(lines[1]["error"]["message"], "Parse error");
    assert_eq!(lines[2]["id"], 9);
    assert_eq!(lines[2]["error"]["code"], -32600);
    assert_eq!(lines[3]["id"], Value::Null);
    assert_eq!(lines[3]["error"]["code"], -32700);
    assert_eq!(lines[4]["id"], 2);
    assert_eq!(
        lines[4]["result"]["content"][0]["text"],
        "✅ Oura connection successful! Your API token is configured correctly."
    );
    assert_eq!(stub.probe_calls(), 1);
}
