// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Staged model loading at process start
//!
//! The HTTP listener comes up before the vector table is loaded. Loading runs
//! in a background task that walks the stages
//! `Starting → Downloading → LoadingIntoMemory → Optimizing → Ready`; any
//! failure parks the sequencer in `Failed` for the rest of the process
//! lifetime. The model handle becomes visible only together with `Ready`.

use super::stage::{LoadingStage, StartupError, StartupSnapshot};
use crate::embeddings::{load_vector_file, ModelSource, VectorModel};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

#[derive(Debug)]
struct SequencerState {
    stage: LoadingStage,
    model: Option<Arc<VectorModel>>,
}

/// Owns the startup stage and, once ready, the shared model handle
#[derive(Debug)]
pub struct StartupSequencer {
    state: RwLock<SequencerState>,
}

impl Default for StartupSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl StartupSequencer {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(SequencerState {
                stage: LoadingStage::Starting,
                model: None,
            }),
        }
    }

    /// A sequencer that is already `Ready` with the given model
    pub fn with_model(model: Arc<VectorModel>) -> Self {
        Self {
            state: RwLock::new(SequencerState {
                stage: LoadingStage::Ready,
                model: Some(model),
            }),
        }
    }

    pub async fn stage(&self) -> LoadingStage {
        self.state.read().await.stage.clone()
    }

    /// Moves to an intermediate or failed stage
    pub async fn advance(&self, next: LoadingStage) -> Result<(), StartupError> {
        if next == LoadingStage::Ready {
            return Err(StartupError::ModelRequired);
        }

        let mut state = self.state.write().await;
        Self::check_transition(&state.stage, &next)?;
        info!(
            stage = %next,
            progress = next.progress(),
            "Startup stage changed"
        );
        state.stage = next;
        Ok(())
    }

    /// Publishes the loaded model and marks the service ready
    pub async fn publish(&self, model: Arc<VectorModel>) -> Result<(), StartupError> {
        let mut state = self.state.write().await;
        Self::check_transition(&state.stage, &LoadingStage::Ready)?;
        state.model = Some(model);
        state.stage = LoadingStage::Ready;
        Ok(())
    }

    /// Records a terminal load failure
    pub async fn fail(&self, reason: impl Into<String>) -> Result<(), StartupError> {
        self.advance(LoadingStage::Failed {
            error: reason.into(),
        })
        .await
    }

    fn check_transition(from: &LoadingStage, to: &LoadingStage) -> Result<(), StartupError> {
        if from.can_transition_to(to) {
            Ok(())
        } else {
            warn!(from = %from, to = %to, "Rejected startup stage transition");
            Err(StartupError::InvalidTransition {
                from: from.status_message(),
                to: to.status_message(),
            })
        }
    }

    /// The model, once loading has completed
    pub async fn model(&self) -> Option<Arc<VectorModel>> {
        self.state.read().await.model.clone()
    }

    pub async fn is_ready(&self) -> bool {
        self.state.read().await.model.is_some()
    }

    pub async fn snapshot(&self) -> StartupSnapshot {
        let state = self.state.read().await;
        StartupSnapshot {
            model_loaded: state.model.is_some(),
            loading_status: state.stage.status_message(),
            loading_progress: state.stage.progress(),
            vocabulary_size: state
                .model
                .as_ref()
                .map(|m| m.vocabulary_size())
                .unwrap_or(0),
        }
    }
}

/// Spawns the background load task
pub fn spawn_model_loader(
    sequencer: Arc<StartupSequencer>,
    source: ModelSource,
) -> JoinHandle<()> {
    tokio::spawn(load_model(sequencer, source))
}

/// Loads the model through every stage, recording the outcome on the
/// sequencer. Never returns an error: failures end in `Failed`.
pub async fn load_model(sequencer: Arc<StartupSequencer>, source: ModelSource) {
    info!(
        source = %source,
        remote = source.is_remote(),
        "🚀 Starting word vector load"
    );
    let start_time = Instant::now();

    match run_stages(&sequencer, source).await {
        Ok(model) => {
            let vocabulary_size = model.vocabulary_size();
            let dimensions = model.vector_size();
            if let Err(e) = sequencer.publish(model).await {
                error!(error = %e, "Failed to publish loaded model");
                return;
            }
            info!(
                vocabulary_size,
                dimensions,
                load_time_secs = start_time.elapsed().as_secs_f64(),
                "✅ Word vectors loaded, API is ready"
            );
        }
        Err(e) => {
            let reason = format!("{:#}", e);
            error!(
                error = %reason,
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "❌ Failed to load word vectors"
            );
            if let Err(e) = sequencer.fail(reason).await {
                error!(error = %e, "Failed to record load failure");
            }
        }
    }
}

async fn run_stages(
    sequencer: &StartupSequencer,
    source: ModelSource,
) -> Result<Arc<VectorModel>> {
    sequencer.advance(LoadingStage::Downloading).await?;
    let path = tokio::task::spawn_blocking(move || source.fetch())
        .await
        .context("download task aborted")??;

    sequencer.advance(LoadingStage::LoadingIntoMemory).await?;
    let display_path = path.display().to_string();
    let raw = tokio::task::spawn_blocking(move || load_vector_file(&path))
        .await
        .context("parse task aborted")?
        .with_context(|| format!("failed to read {}", display_path))?;
    info!(words = raw.len(), dimensions = raw.dimensions, "Parsed vector file");

    sequencer.advance(LoadingStage::Optimizing).await?;
    let model = tokio::task::spawn_blocking(move || VectorModel::from_raw(raw))
        .await
        .context("normalization task aborted")??;

    Ok(Arc::new(model))
}
