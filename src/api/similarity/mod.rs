// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! GET /similarity: cosine similarity between two words

pub mod handler;
pub mod request;
pub mod response;

pub use handler::similarity_handler;
pub use request::{SimilarityQuery, SimilarityRequest};
pub use response::SimilarityResponse;
