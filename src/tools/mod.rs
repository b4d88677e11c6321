// ABOUTME: Tool catalog identity and argument validation for the Oura MCP tools
// ABOUTME: OuraTool names the four tools; DateRangeParams validates date arguments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tools
//!
//! Tool names arrive as free-form strings; [`OuraTool::from_name`] is the one
//! place they are matched against the catalog.

/// Date range argument validation
pub mod params;

pub use params::DateRangeParams;

use crate::constants::tools;
use std::fmt;

/// The tools this server exposes, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OuraTool {
    /// Credential and connectivity check
    Status,
    /// Sleep sessions for a date range
    Sleep,
    /// Daily activity for a date range
    Activity,
    /// Daily readiness for a date range
    Readiness,
}

impl OuraTool {
    /// Every tool, in the order `tools/list` reports them
    pub const ALL: [Self; 4] = [Self::Status, Self::Sleep, Self::Activity, Self::Readiness];

    /// Resolve a tool name; exact, case-sensitive match
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// Wire name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Status => tools::GET_OURA_STATUS,
            Self::Sleep => tools::GET_SLEEP_DATA,
            Self::Activity => tools::GET_ACTIVITY_DATA,
            Self::Readiness => tools::GET_READINESS_DATA,
        }
    }

    /// Catalog description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Status => "Check if Oura token is configured and test connection",
            Self::Sleep => "Get sleep data from Oura for a date range",
            Self::Activity => "Get daily activity data from Oura",
            Self::Readiness => "Get readiness scores from Oura",
        }
    }

    /// Whether the tool takes `start_date` and `end_date`
    #[must_use]
    pub const fn requires_date_range(self) -> bool {
        !matches!(self, Self::Status)
    }

}

impl fmt::Display for OuraTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips_catalog() {
        for tool in OuraTool::ALL {
            assert_eq!(OuraTool::from_name(tool.name()), Some(tool));
        }
    }

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(OuraTool::from_name("get_foo"), None);
        assert_eq!(OuraTool::from_name("GET_SLEEP_DATA"), None);
        assert_eq!(OuraTool::from_name(" get_sleep_data"), None);
    }

    #[test]
    fn test_only_status_skips_dates() {
        assert!(!OuraTool::Status.requires_date_range());
        assert!(OuraTool::Sleep.requires_date_range());
    }
}
