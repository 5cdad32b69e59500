// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

use crate::api::validation::validate_word;
use crate::api::ApiError;
use serde::{Deserialize, Serialize};

/// Query string for GET /similarity
///
/// # Example
/// ```text
/// /similarity?word1=king&word2=queen
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimilarityRequest {
    pub word1: Option<String>,
    pub word2: Option<String>,
}

/// Validated, lowercased similarity parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarityQuery {
    pub word1: String,
    pub word2: String,
}

impl SimilarityRequest {
    /// Validates both words, `word1` first
    pub fn validate(&self) -> Result<SimilarityQuery, ApiError> {
        Ok(SimilarityQuery {
            word1: validate_word("word1", self.word1.as_deref())?,
            word2: validate_word("word2", self.word2.as_deref())?,
        })
    }
}
