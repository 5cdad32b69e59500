// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Pretrained word vectors
//!
//! - `loader`: locating (local or Hugging Face Hub) and parsing vector files
//! - `vector_model`: the normalized in-memory table and its similarity queries
//! - `errors`: error types shared by both

pub mod errors;
pub mod loader;
pub mod vector_model;

pub use errors::{VectorModelError, VectorModelResult};
pub use loader::{load_vector_file, parse_vectors, ModelSource, RawVectors};
pub use vector_model::{ScoredWord, VectorModel};
