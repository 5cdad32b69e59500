// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Startup stages and the read-only status snapshot

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stage of the model load performed at process start.
///
/// Stages only move forward. `Ready` and `Failed` are terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "stage")]
pub enum LoadingStage {
    Starting,
    Downloading,
    LoadingIntoMemory,
    Optimizing,
    Ready,
    Failed { error: String },
}

impl LoadingStage {
    /// Progress percentage reported by `/loading-status`
    pub fn progress(&self) -> u8 {
        match self {
            LoadingStage::Starting => 0,
            LoadingStage::Downloading => 25,
            LoadingStage::LoadingIntoMemory => 50,
            LoadingStage::Optimizing => 75,
            LoadingStage::Ready => 100,
            LoadingStage::Failed { .. } => 0,
        }
    }

    /// Human-readable status line
    pub fn status_message(&self) -> String {
        match self {
            LoadingStage::Starting => "Starting up...".to_string(),
            LoadingStage::Downloading => "Downloading GloVe model...".to_string(),
            LoadingStage::LoadingIntoMemory => "Loading model into memory...".to_string(),
            LoadingStage::Optimizing => "Optimizing memory usage...".to_string(),
            LoadingStage::Ready => "Ready!".to_string(),
            LoadingStage::Failed { error } => format!("Error: {}", error),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadingStage::Ready | LoadingStage::Failed { .. })
    }

    fn ordinal(&self) -> u8 {
        match self {
            LoadingStage::Starting => 0,
            LoadingStage::Downloading => 1,
            LoadingStage::LoadingIntoMemory => 2,
            LoadingStage::Optimizing => 3,
            LoadingStage::Ready | LoadingStage::Failed { .. } => 4,
        }
    }

    /// Whether moving from `self` to `next` is a legal transition
    pub fn can_transition_to(&self, next: &LoadingStage) -> bool {
        if self.is_terminal() {
            return false;
        }
        match next {
            LoadingStage::Failed { .. } => true,
            _ => next.ordinal() > self.ordinal(),
        }
    }
}

impl std::fmt::Display for LoadingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.status_message())
    }
}

/// Read-only projection of the startup state, served by status endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupSnapshot {
    pub model_loaded: bool,
    pub loading_status: String,
    pub loading_progress: u8,
    pub vocabulary_size: usize,
}

#[derive(Debug, Error, PartialEq)]
pub enum StartupError {
    #[error("Invalid startup transition from '{from}' to '{to}'")]
    InvalidTransition { from: String, to: String },

    #[error("The ready stage can only be entered by publishing a model")]
    ModelRequired,
}
