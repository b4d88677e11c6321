// ABOUTME: Line-delimited stdio transport for MCP JSON-RPC messages
// ABOUTME: Reads one request per line, writes one response per line, until EOF
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::mcp_request_processor::McpRequestProcessor;
use super::protocol::{McpError, McpResponse};
use crate::errors::AppResult;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

/// Stdio transport for MCP communication.
///
/// Requests are handled strictly in arrival order, one at a time.
pub struct StdioTransport {
    processor: McpRequestProcessor,
}

impl StdioTransport {
    /// Creates a new stdio transport instance
    #[must_use]
    pub const fn new(processor: McpRequestProcessor) -> Self {
        Self { processor }
    }

    /// Serve the process's stdin/stdout until stdin closes
    ///
    /// # Errors
    /// Returns an error if reading stdin or writing stdout fails
    pub async fn run(&self) -> AppResult<()> {
        info!("MCP stdio transport ready - listening on stdin/stdout");
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        self.serve(stdin, &mut stdout).await
    }

    /// Serve any line-oriented reader/writer pair until the reader hits EOF
    ///
    /// A line that is not valid UTF-8 is answered with a parse error and the
    /// loop keeps going.
    ///
    /// # Errors
    /// Returns an error if reading or writing fails
    pub async fn serve<R, W>(&self, mut reader: R, writer: &mut W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer).await? == 0 {
                break;
            }

            let response = match std::str::from_utf8(&buffer) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.processor.handle_line(line.trim_end()).await,
                Err(e) => {
                    warn!("Received a line that is not valid UTF-8: {}", e);
                    Some(McpResponse::error(Value::Null, McpError::parse_error()))
                }
            };

            if let Some(response) = response {
                let mut encoded = serde_json::to_string(&response)?;
                encoded.push('\n');
                writer.write_all(encoded.as_bytes()).await?;
                writer.flush().await?;
            }
        }

        debug!("stdin closed, stopping stdio transport");
        Ok(())
    }
}
