// ABOUTME: Text renderers turning Oura records into human-readable tool results
// ABOUTME: One summary function per data tool plus number formatting helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output formatting for tool results.
//!
//! Renderers never fail: missing numbers read as zero and a missing `day`
//! reads as `"Unknown date"` (see [`MetricRecord`]).

use crate::constants::json_fields;
use crate::models::{DateRange, MetricNumber, MetricRecord};

const SECONDS_PER_HOUR: f64 = 3600.0;

const SLEEP_SEPARATOR: &str = "\n---\n";
const DAILY_SEPARATOR: &str = "\n\n---\n\n";

/// Render sleep sessions.
///
/// The header always names the range, even when no sessions came back.
#[must_use]
pub fn format_sleep_summary(range: &DateRange, records: &[MetricRecord]) -> String {
    let body = if records.is_empty() {
        "No sleep data found for the specified date range.".to_owned()
    } else {
        records
            .iter()
            .map(format_sleep_record)
            .collect::<Vec<_>>()
            .join(SLEEP_SEPARATOR)
    };

    format!("Sleep data from {range}:\n\n{body}")
}

fn format_sleep_record(record: &MetricRecord) -> String {
    format!(
        "\nDate: {}\nTotal Sleep: {:.1} hours\nSleep Efficiency: {}%\nSleep Stages:\n  - REM: {:.1} hours\n  - Deep: {:.1} hours\n  - Light: {:.1} hours\n",
        record.day(),
        hours(record, json_fields::TOTAL_SLEEP_DURATION),
        record.number_or_zero(json_fields::SLEEP_EFFICIENCY),
        hours(record, json_fields::REM_SLEEP_DURATION),
        hours(record, json_fields::DEEP_SLEEP_DURATION),
        hours(record, json_fields::LIGHT_SLEEP_DURATION),
    )
}

/// Render daily activity summaries
#[must_use]
pub fn format_activity_summary(range: &DateRange, records: &[MetricRecord]) -> String {
    if records.is_empty() {
        return format!("No activity data found from {range}.");
    }

    let blocks = records
        .iter()
        .map(|record| {
            format!(
                "Date: {}\nSteps: {}\nActive Calories: {}\nTotal Calories: {}",
                record.day(),
                with_thousands_separators(record.number_or_zero(json_fields::STEPS)),
                record.number_or_zero(json_fields::ACTIVE_CALORIES),
                record.number_or_zero(json_fields::TOTAL_CALORIES),
            )
        })
        .collect::<Vec<_>>();

    format!(
        "Activity data from {range}:\n\n{}",
        blocks.join(DAILY_SEPARATOR)
    )
}

/// Render daily readiness scores
#[must_use]
pub fn format_readiness_summary(range: &DateRange, records: &[MetricRecord]) -> String {
    if records.is_empty() {
        return format!("No readiness data found from {range}.");
    }

    let blocks = records
        .iter()
        .map(|record| {
            format!(
                "Date: {}\nReadiness Score: {}/100\nTemperature Deviation: {:.2}°C",
                record.day(),
                record.number_or_zero(json_fields::SCORE),
                record.f64_or_zero(json_fields::TEMPERATURE_DEVIATION),
            )
        })
        .collect::<Vec<_>>();

    format!(
        "Readiness data from {range}:\n\n{}",
        blocks.join(DAILY_SEPARATOR)
    )
}

fn hours(record: &MetricRecord, key: &str) -> f64 {
    record.f64_or_zero(key) / SECONDS_PER_HOUR
}

/// Group the integral digits in threes: `12345` → `12,345`, `1234.5` → `1,234.5`
#[must_use]
pub fn with_thousands_separators(value: MetricNumber) -> String {
    let rendered = value.to_string();
    let (sign, unsigned) = rendered
        .strip_prefix('-')
        .map_or(("", rendered.as_str()), |rest| ("-", rest));
    let (integral, fraction) = unsigned
        .split_once('.')
        .map_or((unsigned, None), |(i, f)| (i, Some(f)));

    let mut grouped = String::with_capacity(integral.len() + integral.len() / 3);
    for (index, digit) in integral.chars().enumerate() {
        if index > 0 && (integral.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}
