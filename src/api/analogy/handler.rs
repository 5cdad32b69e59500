// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

use crate::api::analogy::{AnalogyRequest, AnalogyResponse};
use crate::api::handlers::ensure_in_vocabulary;
use crate::api::{ApiError, AppState};
use axum::extract::{rejection::QueryRejection, Query, State};
use axum::Json;
use std::sync::Arc;
use tracing::{debug, error};

/// GET /analogy handler
///
/// Ranks the vocabulary against `unit(a) - unit(b) + unit(c)`, with `a`,
/// `b` and `c` excluded from the results.
pub async fn analogy_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<AnalogyRequest>, QueryRejection>,
) -> Result<Json<AnalogyResponse>, ApiError> {
    let Query(request) = query.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let query = request.validate()?;

    let model = state.require_model().await?;
    ensure_in_vocabulary(&model, &[query.a.as_str(), query.b.as_str(), query.c.as_str()])?;

    let results = model
        .analogy(&[query.a.as_str(), query.c.as_str()], &[query.b.as_str()], query.topn)
        .map_err(|e| {
            error!(error = %e, "Error solving analogy");
            ApiError::from(e)
        })?;

    debug!(
        analogy = %query.expression,
        topn = query.topn,
        results = results.len(),
        "Analogy solved"
    );

    Ok(Json(AnalogyResponse {
        analogy: query.expression,
        results: results.into_iter().map(Into::into).collect(),
    }))
}
