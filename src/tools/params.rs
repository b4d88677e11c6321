// ABOUTME: Typed date-range arguments extracted from an untyped tool argument map
// ABOUTME: Rejects absent, null, empty or non-string dates before any vendor call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::OuraTool;
use crate::constants::json_fields;
use crate::errors::ToolError;
use crate::models::DateRange;
use serde_json::Value;

/// Validated `start_date` / `end_date` pair.
///
/// Only presence is checked. The strings are passed to the vendor unparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeParams {
    /// Inclusive range
    pub range: DateRange,
}

impl DateRangeParams {
    /// Extract both dates from a tool argument map.
    ///
    /// `None` and JSON `null` are treated as an empty map. Keys other than the
    /// two dates are ignored.
    ///
    /// # Errors
    ///
    /// [`ToolError::MissingParameter`] when a date is absent, `null` or empty;
    /// [`ToolError::InvalidParameter`] when a date is not a string.
    pub fn from_arguments(tool: OuraTool, arguments: Option<&Value>) -> Result<Self, ToolError> {
        let start_date = required_string(tool, arguments, json_fields::START_DATE)?;
        let end_date = required_string(tool, arguments, json_fields::END_DATE)?;

        Ok(Self {
            range: DateRange::new(start_date, end_date),
        })
    }
}

fn required_string(
    tool: OuraTool,
    arguments: Option<&Value>,
    key: &str,
) -> Result<String, ToolError> {
    match arguments.and_then(|args| args.get(key)) {
        None | Some(Value::Null) => Err(ToolError::missing_parameter(tool.name(), key)),
        Some(Value::String(s)) if s.is_empty() => {
            Err(ToolError::missing_parameter(tool.name(), key))
        }
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ToolError::invalid_parameter(
            tool.name(),
            key,
            format!("expected a YYYY-MM-DD string, got {other}"),
        )),
    }
}
