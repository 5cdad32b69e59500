// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! GET /analogy: solves `a - b + c = ?` over the word vectors
//! (king - man + woman ≈ queen)

pub mod handler;
pub mod request;
pub mod response;

pub use handler::analogy_handler;
pub use request::{AnalogyQuery, AnalogyRequest, DEFAULT_ANALOGY_TOPN};
pub use response::AnalogyResponse;
