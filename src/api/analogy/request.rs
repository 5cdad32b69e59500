// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

use crate::api::validation::{validate_topn, validate_word};
use crate::api::ApiError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ANALOGY_TOPN: usize = 1;

/// Query string for GET /analogy
///
/// `topn` stays a string until validation so that a non-integer value is
/// reported against its own field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalogyRequest {
    pub a: Option<String>,
    pub b: Option<String>,
    pub c: Option<String>,
    pub topn: Option<String>,
}

/// Validated analogy parameters. Words are lowercased; `expression` keeps
/// the caller's spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalogyQuery {
    pub a: String,
    pub b: String,
    pub c: String,
    pub topn: usize,
    pub expression: String,
}

impl AnalogyRequest {
    pub fn validate(&self) -> Result<AnalogyQuery, ApiError> {
        let a = validate_word("a", self.a.as_deref())?;
        let b = validate_word("b", self.b.as_deref())?;
        let c = validate_word("c", self.c.as_deref())?;
        let topn = validate_topn("topn", self.topn.as_deref(), DEFAULT_ANALOGY_TOPN)?;

        // Validation succeeded, so all three raw values are present.
        let expression = format!(
            "{} - {} + {}",
            self.a.as_deref().unwrap_or(a.as_str()),
            self.b.as_deref().unwrap_or(b.as_str()),
            self.c.as_deref().unwrap_or(c.as_str()),
        );

        Ok(AnalogyQuery {
            a,
            b,
            c,
            topn,
            expression,
        })
    }
}
