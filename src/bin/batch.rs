//! CSV batch driver.
//!
//! Reads an input CSV, cleans the designated text column of every row,
//! extracts keywords with corpus-level weighting, and writes an output
//! CSV mirroring the input rows with appended token and keyword columns.
//! Rows that fail to process are logged and emitted with empty result
//! columns; the batch never aborts on a single bad row.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use han_prep::nlp::stopwords::StopwordFilter;
use han_prep::nlp::tokenizer::JiebaTokenizer;
use han_prep::{Pipeline, PrepConfig};

#[derive(Parser)]
#[command(name = "prep-batch", about = "Clean a CSV of Chinese text and extract keywords")]
struct Args {
    /// Input CSV file with a header row.
    input: PathBuf,

    /// Output CSV file.
    output: PathBuf,

    /// Text column, by header name or zero-based index.
    #[arg(long, default_value = "Question")]
    column: String,

    /// Pipeline configuration JSON file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop-word file; ignored when --config is given.
    #[arg(long, default_value = "dat/stop_words.txt")]
    stop_words: PathBuf,

    /// Use a built-in stop-word list for this language code instead of a
    /// file (e.g. "zh").
    #[arg(long, value_name = "LANG")]
    builtin_stop_words: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => PrepConfig::from_json_file(path)?,
        None => PrepConfig {
            stop_words_file: args.stop_words.clone(),
            ..PrepConfig::default()
        },
    };

    let pipeline = match &args.builtin_stop_words {
        Some(lang) => Pipeline::with_stop_words(
            config,
            Box::new(JiebaTokenizer::new()),
            StopwordFilter::builtin(lang),
        )?,
        None => Pipeline::new(config)?,
    };

    let mut reader = csv::Reader::from_path(&args.input)
        .with_context(|| format!("cannot open {}", args.input.display()))?;
    let headers = reader.headers()?.clone();
    let column = resolve_column(&headers, &args.column)?;

    // Tokenize every row first; vectorization needs the whole corpus.
    let mut rows: Vec<(csv::StringRecord, Option<Vec<String>>)> = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        let text = record.get(column).unwrap_or("");
        match pipeline.tokens(text) {
            Ok(tokens) => rows.push((record, Some(tokens))),
            Err(err) => {
                warn!(row = line + 1, %err, "skipping row");
                rows.push((record, None));
            }
        }
    }

    let docs: Vec<Vec<String>> = rows
        .iter()
        .filter_map(|(_, tokens)| tokens.clone())
        .collect();
    let keywords = match pipeline.extract_corpus_keywords(&docs) {
        Ok((matrix, keywords)) => {
            info!(
                docs = matrix.num_docs(),
                terms = matrix.num_terms(),
                "corpus vectorized"
            );
            keywords
        }
        Err(err) => {
            warn!(%err, "corpus vectorization failed; writing tokens only");
            vec![Vec::new(); docs.len()]
        }
    };

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("cannot create {}", args.output.display()))?;
    let mut out_headers = headers.clone();
    out_headers.push_field("Tokens");
    out_headers.push_field("Keywords");
    writer.write_record(&out_headers)?;

    let mut doc_index = 0;
    for (record, tokens) in rows {
        let mut out = record;
        match tokens {
            Some(tokens) => {
                out.push_field(&join_unique(&tokens));
                let terms: Vec<&str> = keywords
                    .get(doc_index)
                    .map(|ks| ks.iter().map(|k| k.term.as_str()).collect())
                    .unwrap_or_default();
                out.push_field(&terms.join(" "));
                doc_index += 1;
            }
            None => {
                out.push_field("");
                out.push_field("");
            }
        }
        writer.write_record(&out)?;
    }
    writer.flush()?;

    info!(output = %args.output.display(), "batch complete");
    Ok(())
}

/// Resolve the text column by header name, falling back to a numeric
/// index.
fn resolve_column(headers: &csv::StringRecord, column: &str) -> anyhow::Result<usize> {
    if let Some(idx) = headers.iter().position(|h| h == column) {
        return Ok(idx);
    }
    if let Ok(idx) = column.parse::<usize>() {
        if idx < headers.len() {
            return Ok(idx);
        }
    }
    anyhow::bail!("column {column:?} not found in CSV header {headers:?}");
}

/// Join tokens with single spaces, keeping only the first occurrence of
/// each, mirroring the words-set output of the original batch tooling.
fn join_unique(tokens: &[String]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for token in tokens {
        if !seen.iter().any(|s| *s == token.as_str()) {
            seen.push(token);
        }
    }
    seen.join(" ")
}
