// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Vector file loading from disk (plain and gzip)

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use tempfile::TempDir;
use word_vector_api::embeddings::{load_vector_file, ModelSource, VectorModel, VectorModelError};

const GLOVE_ROWS: &str = "the 0.1 0.2 0.3\ncat 0.5 0.1 0.0\ndog 0.4 0.2 0.1\n";

#[cfg(test)]
mod vector_loader_tests {
    use super::*;

    #[test]
    fn test_load_plain_text_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vectors.txt");
        std::fs::write(&path, GLOVE_ROWS).unwrap();

        let raw = load_vector_file(&path).unwrap();
        assert_eq!(raw.words, vec!["the", "cat", "dog"]);
        assert_eq!(raw.dimensions, 3);
        assert_eq!(raw.data.len(), 9);
    }

    #[test]
    fn test_load_gzip_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vectors.txt.gz");

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(GLOVE_ROWS.as_bytes()).unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let model = VectorModel::from_raw(load_vector_file(&path).unwrap()).unwrap();
        assert_eq!(model.vocabulary_size(), 3);
        assert_eq!(model.vector_size(), 3);
        assert!(model.contains("dog"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = load_vector_file(&dir.path().join("absent.txt"));
        assert!(matches!(result, Err(VectorModelError::Io(_))));
    }

    /// A local source resolves to its own path without touching the network
    #[test]
    fn test_local_source_fetch() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vectors.txt");
        std::fs::write(&path, GLOVE_ROWS).unwrap();

        let source = ModelSource::resolve(Some(path.as_path()), "stanfordnlp/glove", "glove.6B.50d.txt", None);
        assert!(!source.is_remote());
        assert_eq!(source.fetch().unwrap(), path);
    }
}
