// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

use crate::api::handlers::ensure_in_vocabulary;
use crate::api::neighbors::{NeighborsRequest, NeighborsResponse};
use crate::api::{ApiError, AppState};
use axum::extract::{rejection::QueryRejection, Query, State};
use axum::Json;
use std::sync::Arc;
use tracing::{debug, error};

/// GET /neighbors handler
///
/// Returns `min(topn, vocabulary_size - 1)` words, most similar first.
pub async fn neighbors_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<NeighborsRequest>, QueryRejection>,
) -> Result<Json<NeighborsResponse>, ApiError> {
    let Query(request) = query.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let query = request.validate()?;

    let model = state.require_model().await?;
    ensure_in_vocabulary(&model, &[query.word.as_str()])?;

    let neighbors = model
        .nearest_neighbors(&query.word, query.topn)
        .map_err(|e| {
            error!(error = %e, "Error finding neighbors");
            ApiError::from(e)
        })?;

    debug!(word = %query.word, topn = query.topn, "Neighbors found");

    Ok(Json(NeighborsResponse {
        word: query.word,
        neighbors: neighbors.into_iter().map(Into::into).collect(),
    }))
}
