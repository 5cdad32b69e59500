// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! In-memory word vector table
//!
//! Holds every vector L2-normalized in a single row-major matrix so that
//! cosine similarity reduces to a dot product and a nearest-neighbor query
//! is one matrix-vector multiplication followed by top-k selection.
//!
//! The table is immutable after construction and is shared across request
//! handlers behind an `Arc`.

use super::errors::{VectorModelError, VectorModelResult};
use super::loader::{parse_vectors, RawVectors};
use ndarray::{Array1, Array2, ArrayView1};
use std::collections::{HashMap, HashSet};
use std::io::BufRead;

/// A `(word, cosine similarity)` pair
pub type ScoredWord = (String, f32);

/// Pretrained word vectors with cosine-similarity queries
#[derive(Debug, Clone)]
pub struct VectorModel {
    /// Words in load order
    words: Vec<String>,
    /// Word to row index
    index: HashMap<String, usize>,
    /// One unit-length row per word
    unit_vectors: Array2<f32>,
}

impl VectorModel {
    /// Builds the model from parsed rows, normalizing every vector
    pub fn from_raw(raw: RawVectors) -> VectorModelResult<Self> {
        if raw.is_empty() {
            return Err(VectorModelError::EmptyVocabulary);
        }

        let RawVectors {
            words,
            data,
            dimensions,
        } = raw;

        let values = data.len();
        let mut unit_vectors = Array2::from_shape_vec((words.len(), dimensions), data)
            .map_err(|_| VectorModelError::InvalidShape {
                words: words.len(),
                dimensions,
                values,
            })?;

        for mut row in unit_vectors.rows_mut() {
            let norm = row.dot(&row).sqrt();
            if norm > 0.0 {
                row.mapv_inplace(|v| v / norm);
            }
        }

        let index = words
            .iter()
            .enumerate()
            .map(|(i, word)| (word.clone(), i))
            .collect();

        Ok(Self {
            words,
            index,
            unit_vectors,
        })
    }

    /// Parses and builds a model from text-format vectors
    pub fn from_reader<R: BufRead>(reader: R) -> VectorModelResult<Self> {
        Self::from_raw(parse_vectors(reader)?)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.words.len()
    }

    pub fn vector_size(&self) -> usize {
        self.unit_vectors.ncols()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// First `limit` words in load order
    pub fn sample_words(&self, limit: usize) -> Vec<String> {
        self.words.iter().take(limit).cloned().collect()
    }

    /// Normalized vector for `word`
    pub fn unit_vector(&self, word: &str) -> VectorModelResult<ArrayView1<'_, f32>> {
        self.row_index(word).map(|i| self.unit_vectors.row(i))
    }

    fn row_index(&self, word: &str) -> VectorModelResult<usize> {
        self.index
            .get(word)
            .copied()
            .ok_or_else(|| VectorModelError::WordNotFound(word.to_string()))
    }

    /// Cosine similarity between two vocabulary words
    pub fn similarity(&self, word1: &str, word2: &str) -> VectorModelResult<f32> {
        let a = self.unit_vector(word1)?;
        let b = self.unit_vector(word2)?;
        Ok(a.dot(&b))
    }

    /// Words closest to `word`, excluding `word` itself
    pub fn nearest_neighbors(&self, word: &str, topn: usize) -> VectorModelResult<Vec<ScoredWord>> {
        self.most_similar(&[word], &[], topn)
    }

    /// Solves `positive[0] - negative[0] + positive[1] ...`, excluding the
    /// input words from the results
    pub fn analogy(
        &self,
        positive: &[&str],
        negative: &[&str],
        topn: usize,
    ) -> VectorModelResult<Vec<ScoredWord>> {
        self.most_similar(positive, negative, topn)
    }

    /// Ranks the vocabulary against the normalized mean of the positive unit
    /// vectors minus the negative ones.
    ///
    /// Results are ordered by descending similarity and never include an
    /// input word.
    pub fn most_similar(
        &self,
        positive: &[&str],
        negative: &[&str],
        topn: usize,
    ) -> VectorModelResult<Vec<ScoredWord>> {
        if positive.is_empty() && negative.is_empty() {
            return Err(VectorModelError::EmptyQuery);
        }

        let mut query = Array1::<f32>::zeros(self.vector_size());
        let mut excluded = HashSet::new();

        let weighted = positive
            .iter()
            .map(|w| (*w, 1.0f32))
            .chain(negative.iter().map(|w| (*w, -1.0f32)));
        let mut count = 0usize;
        for (word, weight) in weighted {
            let i = self.row_index(word)?;
            query.scaled_add(weight, &self.unit_vectors.row(i));
            excluded.insert(i);
            count += 1;
        }

        query.mapv_inplace(|v| v / count as f32);
        let norm = query.dot(&query).sqrt();
        if norm > 0.0 {
            query.mapv_inplace(|v| v / norm);
        }

        let scores = self.unit_vectors.dot(&query);
        let mut ranked: Vec<(usize, f32)> = scores
            .iter()
            .copied()
            .enumerate()
            .filter(|(i, _)| !excluded.contains(i))
            .collect();

        let k = topn.min(ranked.len());
        if k == 0 {
            return Ok(Vec::new());
        }
        if k < ranked.len() {
            ranked.select_nth_unstable_by(k - 1, |a, b| b.1.total_cmp(&a.1));
            ranked.truncate(k);
        }
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        Ok(ranked
            .into_iter()
            .map(|(i, score)| (self.words[i].clone(), score))
            .collect())
    }
}
