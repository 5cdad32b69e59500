// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::Parser;
use std::{env, sync::Arc};
use tracing::info;
use word_vector_api::{
    api::{start_server, AppState},
    config::{HostingPlatform, ServiceConfig},
    startup::{spawn_model_loader, StartupSequencer},
    version,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = ServiceConfig::parse();

    println!("🚀 Starting {}...\n", version::SERVICE_NAME);
    println!("📦 BUILD VERSION: {}", version::VERSION);
    println!("📅 Build Date: {}", version::BUILD_DATE);
    println!("{}", HostingPlatform::detect().description());
    println!();
    info!(version = %version::get_version_string(), features = ?version::FEATURES, "Build info");

    let addr = config.listen_addr()?;
    let source = config.model_source();
    info!(
        %addr,
        source = %source,
        rate_limit_per_minute = config.rate_limit_per_minute,
        query_rate_limit_per_minute = config.query_rate_limit_per_minute,
        "Configuration loaded"
    );

    let sequencer = Arc::new(StartupSequencer::new());
    let state = Arc::new(AppState::new(sequencer.clone(), &config));

    // Bind before loading so health checks answer while vectors load.
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    let loader = spawn_model_loader(sequencer, source);

    start_server(listener, state).await?;

    loader.abort();
    info!("Shutting down Word Vector API...");

    Ok(())
}
