//! Pipeline orchestration.
//!
//! [`Pipeline`] owns the validated configuration, the stop-word set, and
//! the injected [`Tokenizer`] and [`Vectorizer`] backends, and sequences
//! the stages for each document:
//!
//! 1. symbol-bridged term extraction (`I/O`-style terms survive cleaning)
//! 2. full-width → half-width normalization
//! 3. symbol and digit removal
//! 4. segmentation
//! 5. stop-word filtering
//!
//! Corpus-level vectorization and per-document keyword extraction sit on
//! top of the per-document chain. Every stage emits a log record; the
//! pipeline performs no other I/O after construction.

use tracing::{debug, info};

use crate::config::PrepConfig;
use crate::error::{PrepError, Result};
use crate::keywords::{self, Keyword};
use crate::nlp::cleaner::{extract_symbol_terms, strip_symbols_and_digits};
use crate::nlp::normalizer::to_half_width;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{JiebaTokenizer, Tokenizer};
use crate::vectorize::{CountVectorizer, FeatureMatrix, TfidfVectorizer, Vectorizer};

/// Result of processing a single document.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Cleaned, segmented, stop-word-filtered tokens in text order.
    pub tokens: Vec<String>,
    /// Terms whose weight strictly exceeds the configured threshold.
    pub keywords: Vec<Keyword>,
}

/// Result of processing a corpus of documents together.
#[derive(Debug, Clone)]
pub struct CorpusOutput {
    /// Per-document token sequences, in input order.
    pub tokens: Vec<Vec<String>>,
    /// The fitted documents × vocabulary matrix.
    pub matrix: FeatureMatrix,
    /// Per-document keywords, in input order.
    pub keywords: Vec<Vec<Keyword>>,
}

/// The preprocessing pipeline.
pub struct Pipeline {
    config: PrepConfig,
    stop_words: StopwordFilter,
    tokenizer: Box<dyn Tokenizer>,
    vectorizer: Box<dyn Vectorizer>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .field("stop_words", &self.stop_words)
            .finish_non_exhaustive()
    }
}

impl Pipeline {
    /// Build a pipeline with the default `jieba-rs` segmenter.
    ///
    /// Validates the configuration and loads the stop-word file; both
    /// failures surface here, before any document is processed.
    pub fn new(config: PrepConfig) -> Result<Self> {
        Self::with_tokenizer(config, Box::new(JiebaTokenizer::new()))
    }

    /// Build a pipeline with a custom segmentation backend.
    pub fn with_tokenizer(config: PrepConfig, tokenizer: Box<dyn Tokenizer>) -> Result<Self> {
        let stop_words = StopwordFilter::from_file(&config.stop_words_file)?;
        Self::with_stop_words(config, tokenizer, stop_words)
    }

    /// Build a pipeline from an already-constructed stop-word filter,
    /// skipping the file load. The numeric configuration is still
    /// validated.
    pub fn with_stop_words(
        config: PrepConfig,
        tokenizer: Box<dyn Tokenizer>,
        stop_words: StopwordFilter,
    ) -> Result<Self> {
        config.validate()?;
        let vectorizer: Box<dyn Vectorizer> = if config.use_tfidf {
            Box::new(TfidfVectorizer::new(config.ngram_range))
        } else {
            Box::new(CountVectorizer::new(config.ngram_range))
        };
        info!(
            use_tfidf = config.use_tfidf,
            ngram_range = ?config.ngram_range,
            keyword_threshold = config.keyword_threshold,
            stop_words = stop_words.len(),
            "text preprocessor initialized"
        );
        Ok(Self {
            config,
            stop_words,
            tokenizer,
            vectorizer,
        })
    }

    /// Replace the vectorization backend.
    pub fn with_vectorizer(mut self, vectorizer: Box<dyn Vectorizer>) -> Self {
        self.vectorizer = vectorizer;
        self
    }

    /// The validated configuration.
    pub fn config(&self) -> &PrepConfig {
        &self.config
    }

    /// The loaded stop-word set.
    pub fn stop_words(&self) -> &StopwordFilter {
        &self.stop_words
    }

    /// Run the per-document chain: extract symbol terms, normalize, clean,
    /// segment, filter. Symbol-bridged terms are appended after filtering
    /// so cleaning cannot destroy them.
    pub fn tokens(&self, text: &str) -> Result<Vec<String>> {
        if text.trim().is_empty() {
            return Err(PrepError::Input("empty document".into()));
        }

        let (symbol_terms, text) = extract_symbol_terms(text);
        debug!(stage = "symbol_terms", count = symbol_terms.len());

        let normalized = to_half_width(&text);
        debug!(stage = "normalize", text = %normalized);

        let cleaned = strip_symbols_and_digits(&normalized);
        debug!(stage = "clean", text = %cleaned);

        let segmented = self.tokenizer.segment(&cleaned)?;
        debug!(stage = "segment", count = segmented.len());

        let mut tokens = self.stop_words.filter(segmented);
        debug!(stage = "filter", count = tokens.len());

        tokens.extend(symbol_terms);
        Ok(tokens)
    }

    /// Process one document: tokens plus keywords from a single-document
    /// fit.
    ///
    /// With TF-IDF weighting a corpus of one gives every term the same
    /// idf, so the weights reduce to normalized term counts; corpus-level
    /// contrast needs [`process_corpus`](Self::process_corpus).
    pub fn process(&self, text: &str) -> Result<ProcessOutput> {
        let tokens = self.tokens(text)?;
        let (matrix, mut keyword_rows) =
            self.extract_corpus_keywords(std::slice::from_ref(&tokens))?;
        debug!(
            stage = "keywords",
            terms = matrix.num_terms(),
            keywords = keyword_rows[0].len()
        );
        Ok(ProcessOutput {
            tokens,
            keywords: keyword_rows.remove(0),
        })
    }

    /// Process several documents together so TF-IDF weights reflect the
    /// whole corpus.
    pub fn process_corpus(&self, documents: &[String]) -> Result<CorpusOutput> {
        let tokens: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| self.tokens(doc))
            .collect::<Result<_>>()?;
        let (matrix, keywords) = self.extract_corpus_keywords(&tokens)?;
        Ok(CorpusOutput {
            tokens,
            matrix,
            keywords,
        })
    }

    /// Vectorize already-tokenized documents and extract keywords per row.
    ///
    /// This is the corpus-level half of the pipeline; the batch driver
    /// uses it directly so a row that failed tokenization can be skipped
    /// without losing the rest of the corpus.
    pub fn extract_corpus_keywords(
        &self,
        docs: &[Vec<String>],
    ) -> Result<(FeatureMatrix, Vec<Vec<Keyword>>)> {
        let matrix = self.vectorizer.fit_transform(docs)?;
        let keywords = matrix
            .rows
            .iter()
            .map(|row| keywords::extract(row, &matrix.vocabulary, self.config.keyword_threshold))
            .collect();
        Ok((matrix, keywords))
    }
}
