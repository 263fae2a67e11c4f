//! Tokenization stage boundary.
//!
//! Segmentation is delegated through the [`Tokenizer`] trait so any
//! backend (statistical, dictionary-based, pre-segmented input) can be
//! substituted without touching the pipeline. The default implementation
//! wraps the `jieba-rs` segmenter.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use jieba_rs::Jieba;

use crate::error::{PrepError, Result};

/// A segmentation backend.
///
/// Implementations are stateless per call and must be `Send + Sync` so a
/// pipeline can be shared across threads by the caller.
///
/// # Contract
///
/// - **Input**: arbitrary cleaned text.
/// - **Output**: token strings in text order; whitespace-only tokens are
///   dropped.
/// - **Errors**: [`PrepError::Dependency`] when the backend is unavailable
///   or misconfigured. The pipeline never retries.
pub trait Tokenizer: Send + Sync {
    /// Segment `text` into an ordered sequence of tokens.
    fn segment(&self, text: &str) -> Result<Vec<String>>;
}

/// Chinese word segmentation backed by `jieba-rs`.
#[derive(Debug)]
pub struct JiebaTokenizer {
    jieba: Jieba,
}

impl JiebaTokenizer {
    /// Build a tokenizer with the bundled default dictionary.
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
        }
    }

    /// Build a tokenizer from a custom dictionary file.
    ///
    /// A missing or malformed dictionary is a [`PrepError::Dependency`]:
    /// the segmenter backend cannot be configured.
    pub fn from_dict_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            PrepError::Dependency(format!(
                "cannot open segmenter dictionary {}: {e}",
                path.display()
            ))
        })?;
        let mut reader = BufReader::new(file);
        let jieba = Jieba::with_dict(&mut reader).map_err(|e| {
            PrepError::Dependency(format!(
                "cannot load segmenter dictionary {}: {e}",
                path.display()
            ))
        })?;
        Ok(Self { jieba })
    }
}

impl Default for JiebaTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for JiebaTokenizer {
    fn segment(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self
            .jieba
            .cut(text, false)
            .into_iter()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        Ok(tokens)
    }
}

/// Splits on whitespace. Useful when the input is already segmented, such
/// as the words-set column produced by the batch driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn segment(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(str::to_string).collect())
    }
}
