// ABOUTME: Integration tests for the tool dispatcher against a stub provider
// ABOUTME: Covers status checks, argument validation, rendering and error conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used)]

mod common;

use common::{handlers, StubProvider};
use oura_mcp_server::errors::ProviderError;
use oura_mcp_server::mcp::schema::{Content, ToolResponse};
use oura_mcp_server::models::DateRange;
use serde_json::{json, Value};
use std::sync::Arc;

fn week() -> Value {
    json!({"start_date": "2024-01-01", "end_date": "2024-01-07"})
}

fn text_of(response: &ToolResponse) -> &str {
    assert_eq!(response.content.len(), 1);
    assert!(!response.is_error);
    let Content::Text { text } = &response.content[0];
    text
}

#[tokio::test]
async fn test_status_reports_success() {
    let stub = Arc::new(StubProvider::with_records(vec![]));
    let response = handlers(&stub).handle_tool_call("get_oura_status", None).await;

    assert_eq!(
        text_of(&response),
        "✅ Oura connection successful! Your API token is configured correctly."
    );
    assert_eq!(stub.probe_calls(), 1);
    assert_eq!(stub.fetch_calls(), 0);
}

#[tokio::test]
async fn test_status_reports_failure() {
    let stub = Arc::new(StubProvider::with_records(vec![]).connected(false));
    let response = handlers(&stub)
        .handle_tool_call("get_oura_status", Some(&json!({"ignored": true})))
        .await;

    assert_eq!(
        text_of(&response),
        "❌ Could not connect to Oura. Please check your API token in the .env file."
    );
}

#[tokio::test]
async fn test_unknown_tool() {
    let stub = Arc::new(StubProvider::with_records(vec![]));
    let response = handlers(&stub).handle_tool_call("get_foo", Some(&week())).await;

    assert_eq!(text_of(&response), "Unknown tool: get_foo");
    assert_eq!(stub.fetch_calls(), 0);
    assert_eq!(stub.probe_calls(), 0);
}

#[tokio::test]
async fn test_missing_dates_skip_provider() {
    let stub = Arc::new(StubProvider::with_records(vec![]));
    let handlers = handlers(&stub);

    for tool in ["get_sleep_data", "get_activity_data", "get_readiness_data"] {
        for args in [
            None,
            Some(json!(null)),
            Some(json!({})),
            Some(json!({"start_date": "2024-01-01"})),
            Some(json!({"end_date": "2024-01-07"})),
            Some(json!({"start_date": "", "end_date": "2024-01-07"})),
        ] {
            let response = handlers.handle_tool_call(tool, args.as_ref()).await;
            assert_eq!(
                text_of(&response),
                "❌ Please provide both start_date and end_date in YYYY-MM-DD format."
            );
        }
    }

    assert_eq!(stub.fetch_calls(), 0);
}

#[tokio::test]
async fn test_whitespace_dates_reach_provider() {
    let stub = Arc::new(StubProvider::with_records(vec![]));
    let response = handlers(&stub)
        .handle_tool_call(
            "get_activity_data",
            Some(&json!({"start_date": " ", "end_date": "2024-01-07"})),
        )
        .await;

    assert_eq!(text_of(&response), "No activity data found from   to 2024-01-07.");
    assert_eq!(stub.fetch_calls(), 1);
    assert_eq!(
        stub.last_request(),
        Some(("daily_activity".to_owned(), DateRange::new(" ", "2024-01-07")))
    );
}

#[tokio::test]
async fn test_data_tools_hit_expected_endpoints() {
    let stub = Arc::new(StubProvider::with_records(vec![]));
    let handlers = handlers(&stub);

    for (tool, endpoint) in [
        ("get_sleep_data", "sleep"),
        ("get_activity_data", "daily_activity"),
        ("get_readiness_data", "daily_readiness"),
    ] {
        handlers.handle_tool_call(tool, Some(&week())).await;
        assert_eq!(
            stub.last_request(),
            Some((endpoint.to_owned(), DateRange::new("2024-01-01", "2024-01-07")))
        );
    }

    assert_eq!(stub.fetch_calls(), 3);
}

#[tokio::test]
async fn test_empty_results_name_the_range() {
    let stub = Arc::new(StubProvider::with_records(vec![]));
    let handlers = handlers(&stub);

    let sleep = handlers.handle_tool_call("get_sleep_data", Some(&week())).await;
    assert_eq!(
        text_of(&sleep),
        "Sleep data from 2024-01-01 to 2024-01-07:\n\nNo sleep data found for the specified date range."
    );

    let activity = handlers.handle_tool_call("get_activity_data", Some(&week())).await;
    assert_eq!(
        text_of(&activity),
        "No activity data found from 2024-01-01 to 2024-01-07."
    );

    let readiness = handlers.handle_tool_call("get_readiness_data", Some(&week())).await;
    assert_eq!(
        text_of(&readiness),
        "No readiness data found from 2024-01-01 to 2024-01-07."
    );
}

#[tokio::test]
async fn test_sleep_record_rendered() {
    let stub = Arc::new(StubProvider::with_records(vec![json!({
        "day": "2024-01-01",
        "total_sleep_duration": 28800,
        "rem_sleep_duration": 7200,
        "deep_sleep_duration": 5400,
        "light_sleep_duration": 14400,
        "sleep_efficiency": 92
    })]));

    let response = handlers(&stub)
        .handle_tool_call("get_sleep_data", Some(&week()))
        .await;
    let text = text_of(&response);

    assert!(text.contains("Total Sleep: 8.0 hours"));
    assert!(text.contains("Sleep Efficiency: 92%"));
    assert!(text.contains("REM: 2.0 hours"));
    assert!(text.contains("Deep: 1.5 hours"));
    assert!(text.contains("Light: 4.0 hours"));
}

#[tokio::test]
async fn test_activity_steps_grouped() {
    let stub = Arc::new(StubProvider::with_records(vec![json!({
        "day": "2024-01-02",
        "steps": 12345,
        "active_calories": 450,
        "total_calories": 2300
    })]));

    let response = handlers(&stub)
        .handle_tool_call("get_activity_data", Some(&week()))
        .await;

    assert_eq!(
        text_of(&response),
        "Activity data from 2024-01-01 to 2024-01-07:\n\nDate: 2024-01-02\nSteps: 12,345\nActive Calories: 450\nTotal Calories: 2300"
    );
}

#[tokio::test]
async fn test_provider_errors_become_text() {
    let cases = [
        (
            ProviderError::AuthenticationFailed,
            "Error: Authentication failed. Please check your Oura API token.",
        ),
        (
            ProviderError::RateLimitExceeded,
            "Error: Rate limit exceeded. Please try again later.",
        ),
        (
            ProviderError::ApiError {
                status_code: 500,
                body: "boom".to_owned(),
            },
            "Error: API request failed: 500 - boom",
        ),
        (
            ProviderError::NetworkError("connection refused".to_owned()),
            "Error: Network error: connection refused",
        ),
    ];

    for (error, expected) in cases {
        let stub = Arc::new(StubProvider::failing(error));
        let response = handlers(&stub)
            .handle_tool_call("get_readiness_data", Some(&week()))
            .await;
        assert_eq!(text_of(&response), expected);
    }
}

#[tokio::test]
async fn test_repeated_invocations_are_identical() {
    let stub = Arc::new(StubProvider::with_records(vec![json!({
        "day": "2024-01-03",
        "score": 85,
        "temperature_deviation": -0.123
    })]));
    let handlers = handlers(&stub);

    let first = handlers.handle_tool_call("get_readiness_data", Some(&week())).await;
    let second = handlers.handle_tool_call("get_readiness_data", Some(&week())).await;

    assert_eq!(first, second);
    assert_eq!(
        text_of(&first),
        "Readiness data from 2024-01-01 to 2024-01-07:\n\nDate: 2024-01-03\nReadiness Score: 85/100\nTemperature Deviation: -0.12°C"
    );
}
