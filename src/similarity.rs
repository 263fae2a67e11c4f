//! Cosine similarity over feature rows.
//!
//! Ranks corpus documents against a query embedded in the same feature
//! space, typically via [`TfidfModel::transform`](crate::vectorize::TfidfModel::transform).

use crate::vectorize::FeatureMatrix;

/// Cosine similarity between two dense rows of equal length.
///
/// Returns 0.0 when either vector has zero norm.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Rank the documents of `matrix` by cosine similarity to `query`,
/// descending, and keep the `top_n` best. Ties keep document order.
pub fn rank_similar(query: &[f64], matrix: &FeatureMatrix, top_n: usize) -> Vec<(usize, f64)> {
    let mut scored: Vec<(usize, f64)> = matrix
        .rows
        .iter()
        .enumerate()
        .map(|(doc, row)| (doc, cosine_similarity(query, row)))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(top_n);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorize::{TfidfVectorizer, Vectorizer};

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_identical_vectors() {
        let v = [1.0, 2.0, 3.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_orthogonal_vectors() {
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-9);
    }

    #[test]
    fn test_zero_vector() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_rank_similar_orders_by_score() {
        let docs = vec![
            toks(&["猫", "喜欢", "鱼"]),
            toks(&["狗", "喜欢", "骨头"]),
            toks(&["天气", "晴朗"]),
        ];
        let vectorizer = TfidfVectorizer::new((1, 1));
        let model = vectorizer.fit(&docs).unwrap();
        let matrix = vectorizer.fit_transform(&docs).unwrap();

        let query = model.transform(&toks(&["猫", "鱼"]));
        let ranked = rank_similar(&query, &matrix, 2);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].0, 0); // the cat document wins
        assert!(ranked[0].1 > ranked[1].1);
    }

    #[test]
    fn test_rank_similar_top_n_larger_than_corpus() {
        let docs = vec![toks(&["a"]), toks(&["b"])];
        let vectorizer = TfidfVectorizer::new((1, 1));
        let model = vectorizer.fit(&docs).unwrap();
        let matrix = vectorizer.fit_transform(&docs).unwrap();
        let query = model.transform(&toks(&["a"]));
        assert_eq!(rank_similar(&query, &matrix, 10).len(), 2);
    }

    #[test]
    fn test_unrelated_query_scores_zero() {
        let docs = vec![toks(&["a"]), toks(&["b"])];
        let vectorizer = TfidfVectorizer::new((1, 1));
        let model = vectorizer.fit(&docs).unwrap();
        let matrix = vectorizer.fit_transform(&docs).unwrap();
        let query = model.transform(&toks(&["unseen"]));
        for (_, score) in rank_similar(&query, &matrix, 2) {
            assert_eq!(score, 0.0);
        }
    }
}
