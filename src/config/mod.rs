// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Service configuration
//!
//! Every flag can also be set through the environment (and a `.env` file,
//! loaded by `main` before parsing).

pub mod hosting;

pub use hosting::HostingPlatform;

use crate::embeddings::ModelSource;
use anyhow::Context;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_HF_REPO: &str = "stanfordnlp/glove";
pub const DEFAULT_HF_FILE: &str = "glove.6B.50d.txt";

/// Word Vector API server
#[derive(Parser, Debug, Clone)]
#[command(name = "word-vector-api")]
#[command(version = crate::version::VERSION_NUMBER)]
#[command(about = "Semantic word operations over pretrained GloVe embeddings", long_about = None)]
pub struct ServiceConfig {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Local vector file (GloVe/word2vec text format, optionally .gz)
    #[arg(long, env = "MODEL_PATH")]
    pub model_path: Option<PathBuf>,

    /// Hugging Face Hub repository used when no local file is available
    #[arg(long, env = "HF_REPO", default_value = DEFAULT_HF_REPO)]
    pub hf_repo: String,

    /// File inside the Hub repository
    #[arg(long, env = "HF_FILE", default_value = DEFAULT_HF_FILE)]
    pub hf_file: String,

    /// Cache directory for Hub downloads (defaults to the hf-hub cache)
    #[arg(long, env = "HF_CACHE_DIR")]
    pub hf_cache_dir: Option<PathBuf>,

    /// Requests per minute per client across all endpoints (0 disables)
    #[arg(long, env = "RATE_LIMIT_PER_MINUTE", default_value_t = 60)]
    pub rate_limit_per_minute: u32,

    /// Requests per minute per client on /similarity, /analogy and /neighbors (0 disables)
    #[arg(long, env = "QUERY_RATE_LIMIT_PER_MINUTE", default_value_t = 30)]
    pub query_rate_limit_per_minute: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            model_path: None,
            hf_repo: DEFAULT_HF_REPO.to_string(),
            hf_file: DEFAULT_HF_FILE.to_string(),
            hf_cache_dir: None,
            rate_limit_per_minute: 60,
            query_rate_limit_per_minute: 30,
        }
    }
}

impl ServiceConfig {
    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("invalid HOST address: {}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Where the vector table will be loaded from
    pub fn model_source(&self) -> ModelSource {
        ModelSource::resolve(
            self.model_path.as_deref(),
            &self.hf_repo,
            &self.hf_file,
            self.hf_cache_dir.as_deref(),
        )
    }
}
