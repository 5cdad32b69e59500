// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Input validation through the HTTP layer
//!
//! Malformed input must be rejected with 400 before the model-loaded check,
//! so most cases run against an app whose model has not loaded.

use super::fixtures::{app_with_model, app_without_model, get, send_json};
use axum::http::StatusCode;

#[cfg(test)]
mod validation_tests {
    use super::*;

    async fn assert_rejected(uri: &str, field: &str) {
        let (status, body) = send_json(app_without_model(), get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{} should be rejected", uri);
        assert_eq!(body["field"], field, "wrong field for {}", uri);
        assert!(body["detail"].as_str().unwrap().contains(field));
    }

    /// Digits, empty values and overlong words are rejected
    #[tokio::test]
    async fn test_bad_words_rejected_before_model_check() {
        let long = "a".repeat(33);
        assert_rejected("/similarity?word1=abc1&word2=king", "word1").await;
        assert_rejected("/similarity?word1=king&word2=", "word2").await;
        assert_rejected(&format!("/similarity?word1={}&word2=king", long), "word1").await;
        assert_rejected("/neighbors?word=hello%20world", "word").await;
        assert_rejected("/analogy?a=king&b=man&c=w0man", "c").await;
    }

    #[tokio::test]
    async fn test_missing_parameters_rejected() {
        assert_rejected("/similarity?word2=king", "word1").await;
        assert_rejected("/neighbors", "word").await;
    }

    /// topn outside [1, 20] or not an integer
    #[tokio::test]
    async fn test_bad_topn_rejected() {
        assert_rejected("/neighbors?word=king&topn=0", "topn").await;
        assert_rejected("/neighbors?word=king&topn=21", "topn").await;
        assert_rejected("/neighbors?word=king&topn=ten", "topn").await;
        assert_rejected("/analogy?a=king&b=man&c=woman&topn=-1", "topn").await;
    }

    /// Boundary values pass
    #[tokio::test]
    async fn test_boundaries_accepted() {
        let longest = "a".repeat(32);
        let (status, _) = send_json(app_with_model(), get("/neighbors?word=king&topn=1")).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send_json(app_with_model(), get("/neighbors?word=king&topn=20")).await;
        assert_eq!(status, StatusCode::OK);

        // Valid shape, unknown word: passes validation and reaches the lookup
        let (status, _) = send_json(
            app_with_model(),
            get(&format!("/neighbors?word={}", longest)),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send_json(app_with_model(), get("/neighbors?word=well-known")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
