// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Query parameter validation shared by the model endpoints
//!
//! Runs before the model-loaded check, so malformed input is rejected with
//! 400 even while the vectors are still loading.

use crate::api::ApiError;
use regex::Regex;
use std::sync::OnceLock;

pub const MAX_WORD_LENGTH: usize = 32;
pub const MIN_TOPN: usize = 1;
pub const MAX_TOPN: usize = 20;

fn word_pattern() -> &'static Regex {
    static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();
    WORD_PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z-]{1,32}$").unwrap())
}

/// Checks a word parameter and returns it lowercased for vocabulary lookup.
///
/// Accepts 1 to 32 ASCII letters or hyphens. A missing parameter is a
/// validation failure on the same field.
pub fn validate_word(field: &str, value: Option<&str>) -> Result<String, ApiError> {
    let value = value.ok_or_else(|| ApiError::validation(field, "field required"))?;

    if value.is_empty() {
        return Err(ApiError::validation(field, "must not be empty"));
    }
    if value.chars().count() > MAX_WORD_LENGTH {
        return Err(ApiError::validation(
            field,
            format!("must be at most {} characters", MAX_WORD_LENGTH),
        ));
    }
    if !word_pattern().is_match(value) {
        return Err(ApiError::validation(
            field,
            "must contain only letters and hyphens",
        ));
    }

    Ok(value.to_lowercase())
}

/// Parses an optional `topn` parameter, falling back to `default` when absent
pub fn validate_topn(field: &str, value: Option<&str>, default: usize) -> Result<usize, ApiError> {
    let Some(raw) = value else {
        return Ok(default);
    };

    let topn: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::validation(field, "must be an integer"))?;

    if topn < MIN_TOPN as i64 || topn > MAX_TOPN as i64 {
        return Err(ApiError::validation(
            field,
            format!("must be between {} and {}", MIN_TOPN, MAX_TOPN),
        ));
    }

    Ok(topn as usize)
}
