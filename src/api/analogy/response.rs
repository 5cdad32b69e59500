// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

use crate::api::handlers::WordScore;
use serde::{Deserialize, Serialize};

/// Response body for GET /analogy
///
/// ```json
/// {
///   "analogy": "king - man + woman",
///   "results": [{ "word": "queen", "similarity": 0.8524 }]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalogyResponse {
    pub analogy: String,
    /// Ordered by descending similarity; never contains an input word
    pub results: Vec<WordScore>,
}
