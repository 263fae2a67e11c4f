//! # han-prep
//!
//! Chinese text cleaning, vectorization, and TF-IDF keyword extraction.
//!
//! The crate chains a sequence of stateless text transformations: width
//! normalization, symbol and digit removal, segmentation, and stop-word
//! filtering, then vectorizes token sequences (TF-IDF or raw counts) and
//! selects keywords above a configured weight threshold. Segmentation and
//! vectorization sit behind the [`Tokenizer`](nlp::tokenizer::Tokenizer)
//! and [`Vectorizer`](vectorize::Vectorizer) traits so backends can be
//! swapped without touching the pipeline.
//!
//! ```no_run
//! use han_prep::{Pipeline, PrepConfig};
//!
//! # fn main() -> han_prep::Result<()> {
//! let config = PrepConfig {
//!     stop_words_file: "dat/stop_words.txt".into(),
//!     use_tfidf: true,
//!     ngram_range: (1, 2),
//!     keyword_threshold: 0.2,
//! };
//! let pipeline = Pipeline::new(config)?;
//! let output = pipeline.process("第123篇文章，Ａｐｐｌｅ测试！")?;
//! println!("{:?} {:?}", output.tokens, output.keywords);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod keywords;
pub mod nlp;
pub mod pipeline;
pub mod similarity;
pub mod vectorize;

pub use config::PrepConfig;
pub use error::{PrepError, Result};
pub use keywords::Keyword;
pub use pipeline::{CorpusOutput, Pipeline, ProcessOutput};
