// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod embeddings;
pub mod startup;
pub mod version;

pub use api::{create_app, start_server, ApiError, AppState};
pub use config::ServiceConfig;
pub use embeddings::{ModelSource, VectorModel, VectorModelError};
pub use startup::{LoadingStage, StartupSequencer};
