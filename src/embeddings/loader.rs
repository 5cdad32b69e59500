// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Vector file loading
//!
//! Resolves where the pretrained table lives (a local file or a file fetched
//! from the Hugging Face Hub) and parses the whitespace-separated text format
//! used by GloVe and word2vec:
//!
//! ```text
//! the 0.418 0.24968 -0.41242 ...
//! king 0.50451 0.68607 -0.59517 ...
//! ```
//!
//! A leading `<count> <dimensions>` header (word2vec text format) is accepted
//! and skipped. Files ending in `.gz` are decompressed on the fly.

use super::errors::{VectorModelError, VectorModelResult};
use flate2::read::GzDecoder;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Where the vector table is read from
#[derive(Debug, Clone, PartialEq)]
pub enum ModelSource {
    /// A file already on disk
    LocalFile(PathBuf),
    /// A file in a Hugging Face Hub model repository
    HuggingFace {
        repo_id: String,
        filename: String,
        cache_dir: Option<PathBuf>,
    },
}

impl ModelSource {
    /// Picks the local file when it exists, otherwise falls back to the Hub
    pub fn resolve(
        local_path: Option<&Path>,
        repo_id: &str,
        filename: &str,
        cache_dir: Option<&Path>,
    ) -> Self {
        match local_path {
            Some(path) if path.exists() => ModelSource::LocalFile(path.to_path_buf()),
            Some(path) => {
                warn!(
                    path = %path.display(),
                    "Local vector file not found, falling back to Hugging Face Hub"
                );
                Self::hub(repo_id, filename, cache_dir)
            }
            None => Self::hub(repo_id, filename, cache_dir),
        }
    }

    fn hub(repo_id: &str, filename: &str, cache_dir: Option<&Path>) -> Self {
        ModelSource::HuggingFace {
            repo_id: repo_id.to_string(),
            filename: filename.to_string(),
            cache_dir: cache_dir.map(Path::to_path_buf),
        }
    }

    /// Whether fetching this source may hit the network
    pub fn is_remote(&self) -> bool {
        matches!(self, ModelSource::HuggingFace { .. })
    }

    /// Returns a local path for the source, downloading it first if needed.
    ///
    /// Blocking; call from `spawn_blocking`.
    pub fn fetch(&self) -> VectorModelResult<PathBuf> {
        match self {
            ModelSource::LocalFile(path) => Ok(path.clone()),
            ModelSource::HuggingFace {
                repo_id,
                filename,
                cache_dir,
            } => {
                use hf_hub::api::sync::ApiBuilder;

                let download_error = |message: String| VectorModelError::Download {
                    repo: repo_id.clone(),
                    file: filename.clone(),
                    message,
                };

                let mut builder = ApiBuilder::new().with_progress(false);
                if let Some(dir) = cache_dir {
                    builder = builder.with_cache_dir(dir.clone());
                }
                let api = builder.build().map_err(|e| download_error(e.to_string()))?;

                info!(repo = %repo_id, file = %filename, "Fetching vector file from Hugging Face Hub");
                api.model(repo_id.clone())
                    .get(filename)
                    .map_err(|e| download_error(e.to_string()))
            }
        }
    }
}

impl std::fmt::Display for ModelSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelSource::LocalFile(path) => write!(f, "{}", path.display()),
            ModelSource::HuggingFace {
                repo_id, filename, ..
            } => write!(f, "hf://{}/{}", repo_id, filename),
        }
    }
}

/// Parsed but not yet normalized vector table
#[derive(Debug, Clone)]
pub struct RawVectors {
    /// Words in file order
    pub words: Vec<String>,
    /// Row-major vector data, `words.len() * dimensions` values
    pub data: Vec<f32>,
    pub dimensions: usize,
}

impl RawVectors {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Opens a vector file, decompressing `.gz` files transparently
pub fn open_vector_file(path: &Path) -> VectorModelResult<Box<dyn BufRead + Send>> {
    let file = File::open(path)?;
    let is_gzip = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false);

    if is_gzip {
        debug!(path = %path.display(), "Opening gzip-compressed vector file");
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Reads a vector file from disk
pub fn load_vector_file(path: &Path) -> VectorModelResult<RawVectors> {
    let reader = open_vector_file(path)?;
    parse_vectors(reader)
}

/// Parses the text vector format from any buffered reader.
///
/// Blank lines are skipped. The first occurrence of a duplicated word wins.
/// Every row must have the same number of components as the first one.
pub fn parse_vectors<R: BufRead>(reader: R) -> VectorModelResult<RawVectors> {
    let mut words = Vec::new();
    let mut data = Vec::new();
    let mut seen = HashSet::new();
    let mut dimensions: Option<usize> = None;
    let mut duplicates = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        let mut tokens = line.split_whitespace();

        let word = match tokens.next() {
            Some(word) => word,
            None => continue,
        };
        let components: Vec<&str> = tokens.collect();

        if line_number == 1 && is_word2vec_header(word, &components) {
            debug!(header = %line.trim(), "Skipping word2vec header");
            continue;
        }

        let expected = *dimensions.get_or_insert(components.len());
        if expected == 0 {
            return Err(VectorModelError::Parse {
                line: line_number,
                message: format!("word '{}' has no vector components", word),
            });
        }
        if components.len() != expected {
            return Err(VectorModelError::DimensionMismatch {
                line: line_number,
                expected,
                actual: components.len(),
            });
        }

        if !seen.insert(word.to_string()) {
            duplicates += 1;
            continue;
        }

        for component in components {
            let value: f32 = component.parse().map_err(|e| VectorModelError::Parse {
                line: line_number,
                message: format!("invalid component '{}': {}", component, e),
            })?;
            data.push(value);
        }
        words.push(word.to_string());
    }

    if duplicates > 0 {
        warn!(duplicates, "Ignored duplicate words in vector file");
    }

    if words.is_empty() {
        return Err(VectorModelError::EmptyVocabulary);
    }

    Ok(RawVectors {
        words,
        data,
        dimensions: dimensions.unwrap_or(0),
    })
}

fn is_word2vec_header(first: &str, rest: &[&str]) -> bool {
    rest.len() == 1 && first.parse::<usize>().is_ok() && rest[0].parse::<usize>().is_ok()
}
