// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Error types for loading and querying the word vector table

use thiserror::Error;

/// Errors raised by [`VectorModel`](super::VectorModel) and the loader
#[derive(Error, Debug)]
pub enum VectorModelError {
    /// Word is not part of the loaded vocabulary
    #[error("Word '{0}' not found in vocabulary")]
    WordNotFound(String),

    /// A row of the vector file has a different width than the first row
    #[error("Dimension mismatch on line {line}: expected {expected} values, got {actual}")]
    DimensionMismatch {
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// A vector component could not be parsed as a float
    #[error("Failed to parse line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A similarity query was issued without any input words
    #[error("Cannot compute similarity with no input words")]
    EmptyQuery,

    /// Parsed data does not fit the declared table shape
    #[error("Invalid vector table shape: {words} words x {dimensions} dimensions from {values} values")]
    InvalidShape {
        words: usize,
        dimensions: usize,
        values: usize,
    },

    /// The vector file contained no usable rows
    #[error("Vector file contains no words")]
    EmptyVocabulary,

    /// Fetching the vector file from the Hugging Face Hub failed
    #[error("Failed to download {repo}/{file}: {message}")]
    Download {
        repo: String,
        file: String,
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VectorModelError {
    /// Whether the error is a vocabulary miss rather than a genuine failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, VectorModelError::WordNotFound(_))
    }
}

pub type VectorModelResult<T> = Result<T, VectorModelError>;
