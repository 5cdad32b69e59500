// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! GET /neighbors: nearest words by cosine similarity

pub mod handler;
pub mod request;
pub mod response;

pub use handler::neighbors_handler;
pub use request::{NeighborsQuery, NeighborsRequest, DEFAULT_NEIGHBORS_TOPN};
pub use response::NeighborsResponse;
