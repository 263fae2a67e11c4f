//! Feature vocabulary and n-gram generation.
//!
//! The vocabulary assigns every feature term a column index. Columns are
//! ordered by sorted term text, so indices are deterministic for a given
//! corpus and the column order doubles as the tie-break order for keyword
//! extraction.

use rustc_hash::FxHashMap;

use crate::error::{PrepError, Result};

/// Generate the n-gram features of a token sequence for the inclusive
/// range `(min, max)`. Multi-token features join their tokens with a
/// single ASCII space.
pub fn ngrams(tokens: &[String], range: (usize, usize)) -> Vec<String> {
    let (min, max) = range;
    let mut features = Vec::new();
    for n in min..=max {
        if n == 0 || n > tokens.len() {
            continue;
        }
        for window in tokens.windows(n) {
            features.push(window.join(" "));
        }
    }
    features
}

/// Term ↔ column index mapping, columns in sorted term order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: FxHashMap<String, usize>,
}

impl Vocabulary {
    /// Build the vocabulary of all n-gram features across `docs`.
    ///
    /// A corpus whose documents contribute no features at all is an
    /// [`PrepError::Input`]: there is nothing to vectorize.
    pub fn from_corpus(docs: &[Vec<String>], ngram_range: (usize, usize)) -> Result<Self> {
        let mut terms: Vec<String> = docs
            .iter()
            .flat_map(|doc| ngrams(doc, ngram_range))
            .collect();
        terms.sort();
        terms.dedup();
        if terms.is_empty() {
            return Err(PrepError::Input(
                "corpus reduces to an empty vocabulary; nothing to vectorize".into(),
            ));
        }
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Ok(Self { terms, index })
    }

    /// Column index of `term`, if present.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Term text for column `index`.
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    /// All terms in column order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of feature columns.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the vocabulary has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unigrams() {
        let features = ngrams(&toks(&["猫", "喜欢", "鱼"]), (1, 1));
        assert_eq!(features, vec!["猫", "喜欢", "鱼"]);
    }

    #[test]
    fn test_unigrams_and_bigrams() {
        let features = ngrams(&toks(&["a", "b", "c"]), (1, 2));
        assert_eq!(features, vec!["a", "b", "c", "a b", "b c"]);
    }

    #[test]
    fn test_ngram_longer_than_document() {
        let features = ngrams(&toks(&["a"]), (2, 3));
        assert!(features.is_empty());
    }

    #[test]
    fn test_empty_tokens() {
        assert!(ngrams(&[], (1, 2)).is_empty());
    }

    #[test]
    fn test_vocabulary_sorted_and_deduped() {
        let docs = vec![toks(&["b", "a"]), toks(&["c", "a"])];
        let vocab = Vocabulary::from_corpus(&docs, (1, 1)).unwrap();
        assert_eq!(vocab.terms(), &["a", "b", "c"]);
        assert_eq!(vocab.index_of("a"), Some(0));
        assert_eq!(vocab.index_of("c"), Some(2));
        assert_eq!(vocab.term(1), Some("b"));
        assert_eq!(vocab.index_of("missing"), None);
    }

    #[test]
    fn test_empty_corpus_is_input_error() {
        let docs: Vec<Vec<String>> = vec![vec![], vec![]];
        let err = Vocabulary::from_corpus(&docs, (1, 1)).unwrap_err();
        assert!(matches!(err, crate::PrepError::Input(_)));
    }

    #[test]
    fn test_bigram_vocabulary() {
        let docs = vec![toks(&["深度", "学习"])];
        let vocab = Vocabulary::from_corpus(&docs, (1, 2)).unwrap();
        assert!(vocab.index_of("深度 学习").is_some());
        assert_eq!(vocab.len(), 3);
    }
}
