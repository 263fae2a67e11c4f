//! Error types for the preprocessing pipeline.
//!
//! Every fallible operation in the crate returns [`PrepError`]. The three
//! variants map directly onto the failure classes callers need to
//! distinguish: bad configuration, a failing external backend, and input
//! that cannot be vectorized.

use std::path::Path;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PrepError>;

/// Failure classes surfaced by the pipeline.
///
/// Errors are never retried internally; they propagate to the caller of
/// the operation that produced them. The CLI drivers log them and move on
/// to the next prompt or CSV row.
#[derive(Debug, Error)]
pub enum PrepError {
    /// Invalid configuration: bad threshold, unordered n-gram range, or a
    /// stop-word file that cannot be read. Raised at construction time,
    /// before any document is processed.
    #[error("configuration error: {0}")]
    Config(String),

    /// An external backend (segmenter dictionary, vectorizer) is
    /// unavailable or failed.
    #[error("dependency error: {0}")]
    Dependency(String),

    /// A document or corpus that cannot be processed: empty input, or a
    /// corpus whose documents all reduce to zero tokens.
    #[error("input error: {0}")]
    Input(String),
}

impl PrepError {
    /// Configuration error for an unreadable file, keeping the path in the
    /// message so batch logs stay actionable.
    pub(crate) fn file(path: &Path, source: std::io::Error) -> Self {
        PrepError::Config(format!("cannot read {}: {}", path.display(), source))
    }
}
