// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! GET /similarity endpoint tests

use super::fixtures::{app_with_model, app_without_model, get, send_json};
use axum::http::StatusCode;

#[cfg(test)]
mod similarity_tests {
    use super::*;

    /// Known pair returns a cosine score in [-1, 1]
    #[tokio::test]
    async fn test_similarity_known_pair() {
        let (status, body) = send_json(app_with_model(), get("/similarity?word1=king&word2=queen")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["word1"], "king");
        assert_eq!(body["word2"], "queen");
        let score = body["similarity"].as_f64().unwrap();
        assert!((score - 0.6644).abs() < 1e-3, "unexpected score {}", score);
    }

    /// Scores are symmetric
    #[tokio::test]
    async fn test_similarity_is_symmetric() {
        let (_, forward) = send_json(app_with_model(), get("/similarity?word1=car&word2=apple")).await;
        let (_, backward) = send_json(app_with_model(), get("/similarity?word1=apple&word2=car")).await;

        assert_eq!(forward["similarity"], backward["similarity"]);
        let score = forward["similarity"].as_f64().unwrap();
        assert!((-1.0..=1.0).contains(&score));
    }

    /// Mixed-case input is lowercased before lookup and echoed lowercased
    #[tokio::test]
    async fn test_similarity_lowercases_words() {
        let (status, body) = send_json(app_with_model(), get("/similarity?word1=KING&word2=Queen")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["word1"], "king");
        assert_eq!(body["word2"], "queen");
    }

    /// The first unknown word is reported with 404
    #[tokio::test]
    async fn test_similarity_unknown_word() {
        let (status, body) = send_json(
            app_with_model(),
            get("/similarity?word1=king&word2=Zyzzyva"),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Word 'zyzzyva' not found in vocabulary");
    }

    /// Both words unknown: word1 is reported
    #[tokio::test]
    async fn test_similarity_reports_first_missing_word() {
        let (status, body) = send_json(
            app_with_model(),
            get("/similarity?word1=foo&word2=bar"),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Word 'foo' not found in vocabulary");
    }

    /// 503 while the model is loading
    #[tokio::test]
    async fn test_similarity_before_model_loaded() {
        let (status, body) = send_json(
            app_without_model(),
            get("/similarity?word1=king&word2=queen"),
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["detail"], "Model not loaded");
    }
}
