// ABOUTME: Utility modules for common functionality across the application
// ABOUTME: Contains shared HTTP client helpers and calendar helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Calendar helpers for search windows
pub mod dates;
/// HTTP client configuration and helpers
pub mod http_client;
