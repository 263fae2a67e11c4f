//! Pipeline configuration.
//!
//! [`PrepConfig`] carries the four knobs of the preprocessing pipeline and
//! is immutable once validated. It deserializes from JSON with per-field
//! defaults, so a config file only needs to name the options it changes:
//!
//! ```json
//! {
//!   "stop_words_file": "dat/stop_words.txt",
//!   "use_tfidf": true,
//!   "ngram_range": [1, 2],
//!   "keyword_threshold": 0.2
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PrepError, Result};

/// Configuration for a preprocessing [`Pipeline`](crate::pipeline::Pipeline).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepConfig {
    /// Path to the stop-word file: UTF-8, one word per line.
    #[serde(default = "default_stop_words_file")]
    pub stop_words_file: PathBuf,

    /// Weight features with TF-IDF when `true`, raw counts otherwise.
    #[serde(default = "default_use_tfidf")]
    pub use_tfidf: bool,

    /// Minimum and maximum contiguous-token group sizes used as features.
    /// `(1, 1)` means single tokens only.
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),

    /// A term becomes a keyword when its weight is strictly greater than
    /// this value. Weights equal to the threshold are excluded.
    #[serde(default = "default_keyword_threshold")]
    pub keyword_threshold: f64,
}

fn default_stop_words_file() -> PathBuf {
    PathBuf::from("dat/stop_words.txt")
}

fn default_use_tfidf() -> bool {
    true
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_keyword_threshold() -> f64 {
    0.1
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            stop_words_file: default_stop_words_file(),
            use_tfidf: default_use_tfidf(),
            ngram_range: default_ngram_range(),
            keyword_threshold: default_keyword_threshold(),
        }
    }
}

impl PrepConfig {
    /// Check the numeric options. The stop-word file itself is checked when
    /// the pipeline loads it, so a config can be validated without touching
    /// the filesystem.
    pub fn validate(&self) -> Result<()> {
        let (min, max) = self.ngram_range;
        if min < 1 {
            return Err(PrepError::Config(format!(
                "ngram_range minimum must be at least 1, got {min}"
            )));
        }
        if min > max {
            return Err(PrepError::Config(format!(
                "ngram_range must be ordered min <= max, got ({min}, {max})"
            )));
        }
        if !self.keyword_threshold.is_finite() || self.keyword_threshold < 0.0 {
            return Err(PrepError::Config(format!(
                "keyword_threshold must be a finite non-negative number, got {}",
                self.keyword_threshold
            )));
        }
        Ok(())
    }

    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| PrepError::Config(format!("invalid config JSON: {e}")))
    }

    /// Read and parse a config file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| PrepError::file(path, e))?;
        Self::from_json(&contents)
    }
}
