// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use super::analogy::analogy_handler;
use super::handlers::{health_handler, loading_status_handler, root_handler, vocabulary_handler};
use super::neighbors::neighbors_handler;
use super::rate_limit::{enforce_rate_limit, ClientRateLimiter};
use super::similarity::similarity_handler;
use super::ApiError;
use crate::config::ServiceConfig;
use crate::embeddings::VectorModel;
use crate::startup::StartupSequencer;
use axum::{http::Method, middleware, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub sequencer: Arc<StartupSequencer>,
    /// Budget across all routes, per client
    pub global_limiter: Option<Arc<ClientRateLimiter>>,
    /// Extra budget on the model query routes, per client
    pub query_limiter: Option<Arc<ClientRateLimiter>>,
}

impl AppState {
    pub fn new(sequencer: Arc<StartupSequencer>, config: &ServiceConfig) -> Self {
        Self::with_limits(
            sequencer,
            config.rate_limit_per_minute,
            config.query_rate_limit_per_minute,
        )
    }

    pub fn with_limits(
        sequencer: Arc<StartupSequencer>,
        requests_per_minute: u32,
        query_requests_per_minute: u32,
    ) -> Self {
        Self {
            sequencer,
            global_limiter: ClientRateLimiter::new("global", requests_per_minute).map(Arc::new),
            query_limiter: ClientRateLimiter::new("query", query_requests_per_minute)
                .map(Arc::new),
        }
    }

    /// State with default limits and a model that has not loaded yet
    pub fn new_for_test() -> Self {
        Self::new(Arc::new(StartupSequencer::new()), &ServiceConfig::default())
    }

    /// State with default limits and a ready model
    pub fn with_model(model: Arc<VectorModel>) -> Self {
        Self::new(
            Arc::new(StartupSequencer::with_model(model)),
            &ServiceConfig::default(),
        )
    }

    /// The loaded model, or 503 while startup is still in progress (or failed)
    pub async fn require_model(&self) -> Result<Arc<VectorModel>, ApiError> {
        self.sequencer.model().await.ok_or(ApiError::ModelNotLoaded)
    }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Builds the router. The global limiter runs before the query limiter, and
/// both run before any handler.
pub fn create_app(state: Arc<AppState>) -> Router {
    let mut query_routes = Router::new()
        .route("/similarity", get(similarity_handler))
        .route("/analogy", get(analogy_handler))
        .route("/neighbors", get(neighbors_handler));
    if let Some(limiter) = state.query_limiter.clone() {
        query_routes =
            query_routes.route_layer(middleware::from_fn_with_state(limiter, enforce_rate_limit));
    }

    let mut app = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/loading-status", get(loading_status_handler))
        .route("/vocabulary", get(vocabulary_handler))
        .merge(query_routes);
    if let Some(limiter) = state.global_limiter.clone() {
        app = app.layer(middleware::from_fn_with_state(limiter, enforce_rate_limit));
    }

    app.layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the API on an already bound listener until Ctrl-C or SIGTERM
pub async fn start_server(listener: TcpListener, state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    let app = create_app(state);

    info!(%addr, "🌐 Word Vector API listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
