// ABOUTME: Command line entry point for the Oura MCP server
// ABOUTME: Runs the stdio MCP server, checks connectivity, or invokes a single tool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Oura MCP Server Binary
//!
//! `serve` (the default) speaks MCP on stdin/stdout. `check` and `call` are
//! for verifying a token from a terminal without an MCP host.

use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use clap::{Parser, Subcommand};
use oura_mcp_server::{
    config::environment::ServerConfig,
    constants::{defaults::CLI_LOOKBACK_DAYS, json_fields},
    errors::AppError,
    logging,
    mcp::{McpRequestProcessor, StdioTransport, ToolHandlers},
    providers::{initialize_shared_client, HealthDataProvider, OuraProvider},
};
use serde_json::{json, Value};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error, info};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Parser)]
#[command(name = "oura-mcp-server")]
#[command(about = "Oura MCP Server - Oura Ring health data as MCP tools for LLMs")]
#[command(version)]
struct Args {
    /// Oura personal access token (overrides `OURA_API_TOKEN`)
    #[arg(long, global = true)]
    token: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// HTTP connect timeout in seconds
    #[arg(long, global = true)]
    connect_timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the MCP server on stdin/stdout (default)
    Serve,
    /// Verify the token and that the Oura API is reachable
    Check,
    /// Invoke one tool and print its text result
    Call {
        /// Tool name, e.g. `get_sleep_data`
        tool: String,
        /// Range start (YYYY-MM-DD); defaults to seven days ago
        #[arg(long)]
        start_date: Option<String>,
        /// Range end (YYYY-MM-DD); defaults to today
        #[arg(long)]
        end_date: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // .env may carry RUST_LOG and LOG_FORMAT
    let dotenv_loaded = dotenvy::dotenv();
    logging::init_from_env()?;
    if let Err(e) = dotenv_loaded {
        debug!("No .env file found or failed to load: {}", e);
    }

    let config = ServerConfig::from_env()?.with_overrides(
        args.token,
        args.timeout_secs,
        args.connect_timeout_secs,
    )?;
    info!("{}", config.summary());

    initialize_shared_client(
        config.http_client.timeout_secs,
        config.http_client.connect_timeout_secs,
    );

    let provider: Arc<dyn HealthDataProvider> =
        Arc::new(OuraProvider::new(config.oura_api_token.clone()).map_err(AppError::from)?);
    let tool_handlers = ToolHandlers::new(provider.clone());

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let transport = StdioTransport::new(McpRequestProcessor::new(tool_handlers));
            if let Err(e) = transport.run().await {
                error!("Server error: {}", e);
                return Err(e.into());
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check => {
            if provider.test_connection().await {
                println!("Oura API connection successful");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("Could not connect to the Oura API; check your token");
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Call {
            tool,
            start_date,
            end_date,
        } => {
            let today = Local::now().date_naive();
            let arguments = call_arguments(today, start_date, end_date);
            let response = tool_handlers.handle_tool_call(&tool, Some(&arguments)).await;
            println!("{}", response.first_text().unwrap_or_default());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Argument map for `call`, defaulting to the last `CLI_LOOKBACK_DAYS` days
fn call_arguments(today: NaiveDate, start_date: Option<String>, end_date: Option<String>) -> Value {
    let start_date = start_date.unwrap_or_else(|| {
        (today - Duration::days(CLI_LOOKBACK_DAYS))
            .format(DATE_FORMAT)
            .to_string()
    });
    let end_date = end_date.unwrap_or_else(|| today.format(DATE_FORMAT).to_string());

    json!({
        json_fields::START_DATE: start_date,
        json_fields::END_DATE: end_date,
    })
}
