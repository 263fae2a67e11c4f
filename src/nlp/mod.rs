//! Natural Language Processing components
//!
//! This module provides width normalization, symbol/digit cleaning,
//! tokenization, and stopword filtering.

pub mod cleaner;
pub mod normalizer;
pub mod stopwords;
pub mod tokenizer;
