// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the Word Vector API

/// Full version string with feature description
pub const VERSION: &str = "v1.0.0-staged-startup-2025-10-13";

/// Semantic version number
pub const VERSION_NUMBER: &str = "1.0.0";

/// Short API version reported by `GET /`
pub const API_VERSION: &str = "1.0";

/// Service name reported by `GET /` and `GET /health`
pub const SERVICE_NAME: &str = "Word Vector API";

/// Build date
pub const BUILD_DATE: &str = "2025-10-13";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "similarity",
    "analogy",
    "neighbors",
    "vocabulary-info",
    "staged-startup",
    "loading-status",
    "rate-limiting",
    "input-validation",
    "huggingface-download",
    "gzip-vectors",
    "cors",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("{} {} ({})", SERVICE_NAME, VERSION_NUMBER, BUILD_DATE)
}
