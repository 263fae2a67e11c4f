//! Stopword filtering
//!
//! This module provides stopword filtering backed by a user-supplied word
//! file, with built-in lists from the `stop-words` crate as an alternative
//! source.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};
use tracing::info;

use crate::error::{PrepError, Result};

/// A filter for removing stopwords from a token sequence.
///
/// Membership is tested on the exact token string; the Chinese lists this
/// crate targets have no case to fold.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl StopwordFilter {
    /// Load a stopword file: UTF-8, one word per line. Entries are trimmed
    /// and blank lines ignored.
    ///
    /// A missing or unreadable file is a [`PrepError::Config`], raised here
    /// at construction time rather than at first use.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| PrepError::file(path, e))?;
        let reader = BufReader::new(file);
        let mut words = FxHashSet::default();
        for line in reader.lines() {
            let line = line.map_err(|e| PrepError::file(path, e))?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_string());
            }
        }
        info!(count = words.len(), path = %path.display(), "loaded stop words");
        Ok(Self { words })
    }

    /// Build a filter from an in-memory list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// An empty filter that removes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in list for the given language code.
    ///
    /// Most languages come from the `stop-words` crate; Chinese has no
    /// list there, so a common hand-picked set is used. Unknown codes fall
    /// back to English.
    pub fn builtin(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "ru" | "russian" => LANGUAGE::Russian,
            "ar" | "arabic" => LANGUAGE::Arabic,
            "zh" | "chinese" => return Self::from_list(CHINESE_STOPWORDS),
            _ => LANGUAGE::English,
        };
        Self {
            words: get(lang).iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add extra stopwords to the filter.
    pub fn add_words(&mut self, words: &[&str]) {
        for word in words {
            self.words.insert(word.to_string());
        }
    }

    /// Check if a token is a stopword.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Remove stopwords from `tokens`, preserving the order of the
    /// remaining tokens. Filtering is idempotent.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter().filter(|t| !self.contains(t)).collect()
    }

    /// Number of stopwords in the filter.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the filter removes nothing.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Common Chinese stopwords: particles, pronouns, and function words.
const CHINESE_STOPWORDS: &[&str] = &[
    "的", "是", "在", "有", "和", "与", "或", "不", "了", "也", "就", "都", "而", "及",
    "这", "那", "个", "为", "以", "等", "但", "被", "给", "让", "把", "从", "到", "对",
    "将", "于", "能", "会", "可", "要", "很", "还", "更", "最", "只", "已", "又", "再",
    "我", "你", "他", "她", "它", "我们", "你们", "他们", "一个", "没有", "什么", "这个",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("han_prep_stopwords_{name}.txt"));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_from_file() {
        let path = write_temp("basic", "的\n是\n\n  了  \n");
        let filter = StopwordFilter::from_file(&path).unwrap();
        assert_eq!(filter.len(), 3);
        assert!(filter.contains("的"));
        assert!(filter.contains("了")); // trimmed
        assert!(!filter.contains("测试"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = StopwordFilter::from_file(Path::new("/no/such/stop_words.txt")).unwrap_err();
        assert!(matches!(err, PrepError::Config(_)));
    }

    #[test]
    fn test_filter_preserves_order() {
        let filter = StopwordFilter::from_list(&["的"]);
        let tokens = ["这", "是", "的", "测试"]
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();
        assert_eq!(filter.filter(tokens), vec!["这", "是", "测试"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filter = StopwordFilter::from_list(&["的", "是"]);
        let tokens = ["这", "是", "的", "测试", "的"]
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();
        let once = filter.filter(tokens);
        let twice = filter.filter(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_filter_removes_nothing() {
        let filter = StopwordFilter::empty();
        assert!(filter.is_empty());
        let tokens = vec!["的".to_string()];
        assert_eq!(filter.filter(tokens.clone()), tokens);
    }

    #[test]
    fn test_builtin_chinese() {
        let filter = StopwordFilter::builtin("zh");
        assert!(filter.contains("的"));
        assert!(filter.contains("我们"));
        assert!(!filter.contains("机器"));
    }

    #[test]
    fn test_builtin_english() {
        let filter = StopwordFilter::builtin("en");
        assert!(filter.contains("the"));
        assert!(!filter.contains("machine"));
    }

    #[test]
    fn test_add_words() {
        let mut filter = StopwordFilter::from_list(&["的"]);
        filter.add_words(&["测试"]);
        assert!(filter.contains("测试"));
    }

    #[test]
    fn test_exact_matching() {
        let filter = StopwordFilter::from_list(&["apple"]);
        assert!(filter.contains("apple"));
        assert!(!filter.contains("Apple"));
    }
}
