// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

use crate::api::handlers::WordScore;
use serde::{Deserialize, Serialize};

/// Response body for GET /neighbors
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NeighborsResponse {
    pub word: String,
    pub neighbors: Vec<WordScore>,
}
