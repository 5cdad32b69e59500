// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod analogy;
pub mod errors;
pub mod handlers;
pub mod neighbors;
pub mod rate_limit;
pub mod server;
pub mod similarity;
pub mod validation;

pub use analogy::{analogy_handler, AnalogyRequest, AnalogyResponse};
pub use errors::{ApiError, ErrorResponse};
pub use handlers::{
    HealthResponse, LoadingStatusResponse, RootResponse, VocabularyResponse, WordScore,
};
pub use neighbors::{neighbors_handler, NeighborsRequest, NeighborsResponse};
pub use rate_limit::ClientRateLimiter;
pub use server::{create_app, start_server, AppState};
pub use similarity::{similarity_handler, SimilarityRequest, SimilarityResponse};
