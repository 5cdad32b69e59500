// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! GET /neighbors endpoint tests

use super::fixtures::{
    app_with_model, app_without_model, get, send_json, FIXTURE_VOCABULARY_SIZE,
};
use axum::http::StatusCode;

#[cfg(test)]
mod neighbors_tests {
    use super::*;

    #[tokio::test]
    async fn test_neighbors_default_topn() {
        let (status, body) = send_json(app_with_model(), get("/neighbors?word=king")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["word"], "king");

        let neighbors = body["neighbors"].as_array().unwrap();
        assert_eq!(neighbors.len(), 10);
        assert_eq!(neighbors[0]["word"], "prince");
    }

    /// Neighbors are strictly ranked and never include the query word
    #[tokio::test]
    async fn test_neighbors_ordering_and_self_exclusion() {
        let (status, body) = send_json(app_with_model(), get("/neighbors?word=apple&topn=5")).await;

        assert_eq!(status, StatusCode::OK);
        let neighbors = body["neighbors"].as_array().unwrap();
        assert_eq!(neighbors.len(), 5);

        let scores: Vec<f64> = neighbors
            .iter()
            .map(|n| n["similarity"].as_f64().unwrap())
            .collect();
        assert!(scores.windows(2).all(|w| w[0] > w[1]));
        assert!(neighbors.iter().all(|n| n["word"] != "apple"));
    }

    /// topn larger than the rest of the vocabulary returns everything else
    #[tokio::test]
    async fn test_neighbors_capped_by_vocabulary() {
        let (status, body) = send_json(app_with_model(), get("/neighbors?word=bus&topn=20")).await;

        assert_eq!(status, StatusCode::OK);
        let neighbors = body["neighbors"].as_array().unwrap();
        assert_eq!(neighbors.len(), 20usize.min(FIXTURE_VOCABULARY_SIZE - 1));
    }

    #[tokio::test]
    async fn test_neighbors_unknown_word() {
        let (status, body) = send_json(app_with_model(), get("/neighbors?word=Wombat")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Word 'wombat' not found in vocabulary");
    }

    #[tokio::test]
    async fn test_neighbors_before_model_loaded() {
        let (status, body) = send_json(app_without_model(), get("/neighbors?word=king")).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["detail"], "Model not loaded");
    }
}
