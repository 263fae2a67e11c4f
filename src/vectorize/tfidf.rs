//! TF-IDF vectorization.
//!
//! Weighting matches the scikit-learn defaults the original corpus tooling
//! was built around: smoothed inverse document frequency
//! `idf(t) = ln((1 + n) / (1 + df(t))) + 1` applied to raw counts, then
//! each document row L2-normalized. Terms present in every document keep a
//! weight of exactly `count / ||row||`, so corpus-wide terms sink relative
//! to distinguishing ones as the corpus grows.

use tracing::debug;

use crate::error::Result;
use crate::vectorize::count::count_row;
use crate::vectorize::vocabulary::Vocabulary;
use crate::vectorize::{FeatureMatrix, Vectorizer};

/// Weights features by TF-IDF with L2-normalized rows.
#[derive(Debug, Clone, Copy)]
pub struct TfidfVectorizer {
    ngram_range: (usize, usize),
}

impl TfidfVectorizer {
    pub fn new(ngram_range: (usize, usize)) -> Self {
        Self { ngram_range }
    }

    /// Learn the vocabulary and idf weights from `docs`.
    ///
    /// The returned model can embed further documents into the same
    /// feature space, which is what similarity queries need.
    pub fn fit(&self, docs: &[Vec<String>]) -> Result<TfidfModel> {
        let vocabulary = Vocabulary::from_corpus(docs, self.ngram_range)?;
        let n_docs = docs.len() as f64;

        let mut df = vec![0usize; vocabulary.len()];
        for doc in docs {
            let row = count_row(doc, &vocabulary, self.ngram_range);
            for (col, &count) in row.iter().enumerate() {
                if count > 0.0 {
                    df[col] += 1;
                }
            }
        }

        let idf = df
            .iter()
            .map(|&d| ((1.0 + n_docs) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        Ok(TfidfModel {
            vocabulary,
            idf,
            ngram_range: self.ngram_range,
        })
    }
}

impl Vectorizer for TfidfVectorizer {
    fn fit_transform(&self, docs: &[Vec<String>]) -> Result<FeatureMatrix> {
        let model = self.fit(docs)?;
        let rows = docs.iter().map(|doc| model.transform(doc)).collect();
        debug!(
            docs = docs.len(),
            terms = model.vocabulary.len(),
            "tf-idf vectorization complete"
        );
        Ok(FeatureMatrix {
            rows,
            vocabulary: model.vocabulary,
        })
    }
}

/// A fitted TF-IDF model: vocabulary plus per-column idf weights.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    pub vocabulary: Vocabulary,
    idf: Vec<f64>,
    ngram_range: (usize, usize),
}

impl TfidfModel {
    /// Embed a token sequence into the fitted feature space.
    ///
    /// Features outside the learned vocabulary are ignored. The returned
    /// row is L2-normalized unless it is all zeros.
    pub fn transform(&self, tokens: &[String]) -> Vec<f64> {
        let mut row = count_row(tokens, &self.vocabulary, self.ngram_range);
        for (value, idf) in row.iter_mut().zip(&self.idf) {
            *value *= idf;
        }
        let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in row.iter_mut() {
                *value /= norm;
            }
        }
        row
    }

    /// Idf weight for column `col`.
    pub fn idf(&self, col: usize) -> Option<f64> {
        self.idf.get(col).copied()
    }
}
