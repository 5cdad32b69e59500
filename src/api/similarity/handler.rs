// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

use crate::api::handlers::ensure_in_vocabulary;
use crate::api::similarity::{SimilarityRequest, SimilarityResponse};
use crate::api::{ApiError, AppState};
use axum::extract::{rejection::QueryRejection, Query, State};
use axum::Json;
use std::sync::Arc;
use tracing::{debug, error};

/// GET /similarity handler
///
/// Validation runs first, then the model-loaded check, then vocabulary
/// membership for `word1` and `word2` in that order.
pub async fn similarity_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SimilarityRequest>, QueryRejection>,
) -> Result<Json<SimilarityResponse>, ApiError> {
    let Query(request) = query.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let query = request.validate()?;

    let model = state.require_model().await?;
    ensure_in_vocabulary(&model, &[query.word1.as_str(), query.word2.as_str()])?;

    let similarity = model.similarity(&query.word1, &query.word2).map_err(|e| {
        error!(error = %e, "Error calculating similarity");
        ApiError::from(e)
    })?;

    debug!(word1 = %query.word1, word2 = %query.word2, similarity, "Similarity computed");

    Ok(Json(SimilarityResponse {
        word1: query.word1,
        word2: query.word2,
        similarity,
    }))
}
