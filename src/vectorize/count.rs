//! Raw-count vectorization.

use tracing::debug;

use crate::error::Result;
use crate::vectorize::vocabulary::{ngrams, Vocabulary};
use crate::vectorize::{FeatureMatrix, Vectorizer};

/// Weights each feature by its raw occurrence count per document.
#[derive(Debug, Clone, Copy)]
pub struct CountVectorizer {
    ngram_range: (usize, usize),
}

impl CountVectorizer {
    pub fn new(ngram_range: (usize, usize)) -> Self {
        Self { ngram_range }
    }
}

/// Count the vocabulary features of one document into a dense row.
pub(crate) fn count_row(tokens: &[String], vocab: &Vocabulary, ngram_range: (usize, usize)) -> Vec<f64> {
    let mut row = vec![0.0; vocab.len()];
    for feature in ngrams(tokens, ngram_range) {
        if let Some(col) = vocab.index_of(&feature) {
            row[col] += 1.0;
        }
    }
    row
}

impl Vectorizer for CountVectorizer {
    fn fit_transform(&self, docs: &[Vec<String>]) -> Result<FeatureMatrix> {
        let vocabulary = Vocabulary::from_corpus(docs, self.ngram_range)?;
        let rows = docs
            .iter()
            .map(|doc| count_row(doc, &vocabulary, self.ngram_range))
            .collect();
        debug!(
            docs = docs.len(),
            terms = vocabulary.len(),
            "count vectorization complete"
        );
        Ok(FeatureMatrix { rows, vocabulary })
    }
}
