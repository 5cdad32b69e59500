// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod sequencer;
pub mod stage;

pub use sequencer::{load_model, spawn_model_loader, StartupSequencer};
pub use stage::{LoadingStage, StartupError, StartupSnapshot};
