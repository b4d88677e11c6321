// ABOUTME: Vendor data row and date range models shared by the provider and server crates
// ABOUTME: MetricRecord reads optional fields with defaults instead of failing on gaps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{defaults::UNKNOWN_DATE, json_fields};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One JSON row of Oura data (a sleep session, a day of activity, ...).
///
/// The shape differs per endpoint and fields come and go between API
/// revisions, so the row stays an open map. Lookups never fail: absent or
/// `null` numbers read as zero, an absent `day` reads as `"Unknown date"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricRecord(Map<String, Value>);

impl MetricRecord {
    /// The record's calendar day, or the placeholder when absent
    #[must_use]
    pub fn day(&self) -> &str {
        self.str_or(json_fields::DAY, UNKNOWN_DATE)
    }

    /// String field with a fallback for absent or non-string values
    #[must_use]
    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.0.get(key).and_then(Value::as_str).unwrap_or(default)
    }

    /// Numeric field as `f64`, zero when absent
    #[must_use]
    pub fn f64_or_zero(&self, key: &str) -> f64 {
        self.0.get(key).and_then(Value::as_f64).unwrap_or(0.0)
    }

    /// Numeric field preserving whether the vendor sent an integer or a float
    #[must_use]
    pub fn number_or_zero(&self, key: &str) -> MetricNumber {
        match self.0.get(key) {
            Some(Value::Number(n)) => n
                .as_i64()
                .map(MetricNumber::Integer)
                .or_else(|| n.as_f64().map(MetricNumber::Float))
                .unwrap_or(MetricNumber::Integer(0)),
            _ => MetricNumber::Integer(0),
        }
    }
}

/// A numeric field value as the vendor sent it.
///
/// Display prints integers bare and floats with at least one decimal place,
/// so `92` stays `92` and `92.0` stays `92.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricNumber {
    /// Integral JSON number
    Integer(i64),
    /// Fractional JSON number
    Float(f64),
}

impl fmt::Display for MetricNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Inclusive `[start_date, end_date]` range in `YYYY-MM-DD` form.
///
/// Dates are not parsed here; malformed values go to the vendor as-is and
/// come back as an API error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range
    pub start_date: String,
    /// Last day of the range
    pub end_date: String,
}

impl DateRange {
    /// Create a range from two dates
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Query parameters for the vendor API
    #[must_use]
    pub fn query_params(&self) -> [(&'static str, &str); 2] {
        [
            (json_fields::START_DATE, self.start_date.as_str()),
            (json_fields::END_DATE, self.end_date.as_str()),
        ]
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start_date, self.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> MetricRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_fields_default() {
        let rec = record(json!({}));
        assert_eq!(rec.day(), "Unknown date");
        assert!(rec.f64_or_zero("steps").abs() < f64::EPSILON);
        assert_eq!(rec.number_or_zero("score"), MetricNumber::Integer(0));
    }

    #[test]
    fn test_null_fields_default() {
        let rec = record(json!({"day": null, "temperature_deviation": null}));
        assert_eq!(rec.day(), "Unknown date");
        assert!(rec.f64_or_zero("temperature_deviation").abs() < f64::EPSILON);
    }

    #[test]
    fn test_number_display_preserves_integer_vs_float() {
        let rec = record(json!({"a": 92, "b": 92.0, "c": 91.5}));
        assert_eq!(rec.number_or_zero("a").to_string(), "92");
        assert_eq!(rec.number_or_zero("b").to_string(), "92.0");
        assert_eq!(rec.number_or_zero("c").to_string(), "91.5");
    }

    #[test]
    fn test_date_range_query_params() {
        let range = DateRange::new("2024-01-01", "2024-01-07");
        assert_eq!(
            range.query_params(),
            [("start_date", "2024-01-01"), ("end_date", "2024-01-07")]
        );
        assert_eq!(range.to_string(), "2024-01-01 to 2024-01-07");
    }
}
