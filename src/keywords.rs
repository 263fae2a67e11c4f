//! Keyword extraction from weighted feature rows.

use serde::Serialize;

use crate::vectorize::Vocabulary;

/// A term selected as a keyword, with its feature weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyword {
    pub term: String,
    pub weight: f64,
}

/// Select the terms of one document whose weight is strictly greater than
/// `threshold`.
///
/// The result is ordered by descending weight; equal weights keep the
/// vocabulary's column order. The comparison is strict, so a weight equal
/// to the threshold is never returned, and raising the threshold can only
/// shrink the result.
pub fn extract(row: &[f64], vocabulary: &Vocabulary, threshold: f64) -> Vec<Keyword> {
    let mut keywords: Vec<Keyword> = row
        .iter()
        .enumerate()
        .filter(|(_, &weight)| weight > threshold)
        .filter_map(|(col, &weight)| {
            vocabulary.term(col).map(|term| Keyword {
                term: term.to_string(),
                weight,
            })
        })
        .collect();
    // Stable sort: ties keep ascending column order.
    keywords.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    keywords
}
