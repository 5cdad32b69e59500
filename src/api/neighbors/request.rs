// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

use crate::api::validation::{validate_topn, validate_word};
use crate::api::ApiError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_NEIGHBORS_TOPN: usize = 10;

/// Query string for GET /neighbors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NeighborsRequest {
    pub word: Option<String>,
    pub topn: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborsQuery {
    pub word: String,
    pub topn: usize,
}

impl NeighborsRequest {
    pub fn validate(&self) -> Result<NeighborsQuery, ApiError> {
        Ok(NeighborsQuery {
            word: validate_word("word", self.word.as_deref())?,
            topn: validate_topn("topn", self.topn.as_deref(), DEFAULT_NEIGHBORS_TOPN)?,
        })
    }
}
