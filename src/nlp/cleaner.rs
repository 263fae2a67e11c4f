//! Symbol and digit removal.
//!
//! The cleaner keeps letters (including CJK ideographs) and whitespace and
//! deletes everything else: punctuation, symbols, and digit characters in
//! any script. Whitespace runs left behind by the deletions collapse to a
//! single space so token boundaries survive.
//!
//! Terms bridged by a single symbol, like `I/O` or `C++`-style `A+B`,
//! would be destroyed by the symbol pass. [`extract_symbol_terms`] pulls
//! them out beforehand so the pipeline can re-append them after filtering.

use once_cell::sync::Lazy;
use regex::Regex;

static SYMBOLS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\p{L}\p{N}\s]").expect("symbol pattern is valid")
});

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{N}").expect("digit pattern is valid"));

static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static SYMBOL_TERM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z][^\w\s][A-Za-z]").expect("symbol-term pattern is valid")
});

/// Remove non-letter symbols and all digit characters from `text`.
///
/// ```
/// use han_prep::nlp::cleaner::strip_symbols_and_digits;
///
/// assert_eq!(strip_symbols_and_digits("第123篇文章,Apple测试!"), "第篇文章Apple测试");
/// ```
pub fn strip_symbols_and_digits(text: &str) -> String {
    let no_symbols = SYMBOLS.replace_all(text, "");
    let no_digits = DIGITS.replace_all(&no_symbols, "");
    WHITESPACE_RUNS.replace_all(&no_digits, " ").trim().to_string()
}

/// Extract letter-symbol-letter terms such as `I/O` and remove them from
/// the text. Returns the distinct terms in first-occurrence order together
/// with the remaining text.
pub fn extract_symbol_terms(text: &str) -> (Vec<String>, String) {
    let mut terms: Vec<String> = Vec::new();
    for m in SYMBOL_TERM.find_iter(text) {
        let term = m.as_str();
        if !terms.iter().any(|t| t == term) {
            terms.push(term.to_string());
        }
    }
    let mut remaining = text.to_string();
    for term in &terms {
        remaining = remaining.replace(term.as_str(), "");
    }
    (terms, remaining)
}
