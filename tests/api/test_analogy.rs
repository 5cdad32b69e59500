// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! GET /analogy endpoint tests

use super::fixtures::{app_with_model, app_without_model, get, send_json};
use axum::http::StatusCode;

#[cfg(test)]
mod analogy_tests {
    use super::*;

    /// king - man + woman = queen
    #[tokio::test]
    async fn test_classic_analogy() {
        let (status, body) = send_json(app_with_model(), get("/analogy?a=king&b=man&c=woman")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["analogy"], "king - man + woman");

        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 1, "default topn is 1");
        assert_eq!(results[0]["word"], "queen");
    }

    /// Results are descending and never contain an input word
    #[tokio::test]
    async fn test_analogy_excludes_inputs() {
        let (status, body) = send_json(
            app_with_model(),
            get("/analogy?a=king&b=man&c=woman&topn=20"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 19);

        let words: Vec<&str> = results.iter().map(|r| r["word"].as_str().unwrap()).collect();
        for input in ["king", "man", "woman"] {
            assert!(!words.contains(&input), "{} leaked into results", input);
        }

        let scores: Vec<f64> = results
            .iter()
            .map(|r| r["similarity"].as_f64().unwrap())
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    /// The echoed expression keeps the caller's spelling
    #[tokio::test]
    async fn test_analogy_expression_uses_raw_input() {
        let (status, body) = send_json(app_with_model(), get("/analogy?a=King&b=MAN&c=woman")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["analogy"], "King - MAN + woman");
        assert_eq!(body["results"][0]["word"], "queen");
    }

    /// Unknown words are checked in a, b, c order
    #[tokio::test]
    async fn test_analogy_unknown_word() {
        let (status, body) = send_json(app_with_model(), get("/analogy?a=king&b=Unicorn&c=dragon")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Word 'unicorn' not found in vocabulary");
    }

    #[tokio::test]
    async fn test_analogy_missing_parameter() {
        let (status, body) = send_json(app_with_model(), get("/analogy?a=king&b=man")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["field"], "c");
    }

    #[tokio::test]
    async fn test_analogy_before_model_loaded() {
        let (status, _) = send_json(app_without_model(), get("/analogy?a=king&b=man&c=woman")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
