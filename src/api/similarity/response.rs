// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

use serde::{Deserialize, Serialize};

/// Response body for GET /similarity
///
/// ```json
/// { "word1": "king", "word2": "queen", "similarity": 0.7839 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityResponse {
    pub word1: String,
    pub word2: String,
    /// Cosine similarity in [-1, 1]
    pub similarity: f32,
}
