// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Service information and status handlers, plus response types shared by
//! the model endpoints

use crate::api::{ApiError, AppState};
use crate::embeddings::{ScoredWord, VectorModel};
use crate::version;
use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Words listed by `GET /vocabulary`
pub const VOCABULARY_SAMPLE_SIZE: usize = 20;

/// Routes advertised by `GET /`
pub const ENDPOINTS: &[&str] = &[
    "/health",
    "/loading-status",
    "/similarity",
    "/analogy",
    "/neighbors",
    "/vocabulary",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub status: String,
    pub endpoints: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ready" once the model is loaded, otherwise "initializing"
    pub status: String,
    pub timestamp: String,
    pub service: String,
    pub model_loaded: bool,
    pub vocabulary_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadingStatusResponse {
    pub model_loaded: bool,
    pub loading_status: String,
    pub loading_progress: u8,
    pub vocabulary_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyResponse {
    pub vocabulary_size: usize,
    pub vector_dimensions: usize,
    pub sample_words: Vec<String>,
}

/// One ranked result from `/analogy` or `/neighbors`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordScore {
    pub word: String,
    pub similarity: f32,
}

impl From<ScoredWord> for WordScore {
    fn from((word, similarity): ScoredWord) -> Self {
        Self { word, similarity }
    }
}

/// Fails with 404 on the first word missing from the vocabulary
pub(crate) fn ensure_in_vocabulary(model: &VectorModel, words: &[&str]) -> Result<(), ApiError> {
    match words.iter().find(|word| !model.contains(word)) {
        Some(missing) => Err(ApiError::WordNotFound(missing.to_string())),
        None => Ok(()),
    }
}

pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        name: version::SERVICE_NAME.to_string(),
        version: version::API_VERSION.to_string(),
        status: "running".to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let snapshot = state.sequencer.snapshot().await;

    Json(HealthResponse {
        status: if snapshot.model_loaded {
            "ready"
        } else {
            "initializing"
        }
        .to_string(),
        timestamp: Utc::now().to_rfc3339(),
        service: version::SERVICE_NAME.to_string(),
        model_loaded: snapshot.model_loaded,
        vocabulary_size: snapshot.vocabulary_size,
    })
}

pub async fn loading_status_handler(
    State(state): State<Arc<AppState>>,
) -> Json<LoadingStatusResponse> {
    let snapshot = state.sequencer.snapshot().await;

    Json(LoadingStatusResponse {
        model_loaded: snapshot.model_loaded,
        loading_status: snapshot.loading_status,
        loading_progress: snapshot.loading_progress,
        vocabulary_size: snapshot.vocabulary_size,
    })
}

pub async fn vocabulary_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<VocabularyResponse>, ApiError> {
    let model = state.require_model().await?;

    Ok(Json(VocabularyResponse {
        vocabulary_size: model.vocabulary_size(),
        vector_dimensions: model.vector_size(),
        sample_words: model.sample_words(VOCABULARY_SAMPLE_SIZE),
    }))
}
