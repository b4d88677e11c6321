// ABOUTME: Unified error handling re-exported from oura-core
// ABOUTME: Keeps `crate::errors::*` paths stable for server modules and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The error types live in `oura-core` so the provider crate can use them
//! without depending on the server.

pub use oura_core::errors::*;
