//! Interactive prompt loop.
//!
//! Reads one line of Chinese text at a time, runs it through the
//! preprocessing pipeline, and logs the tokens and keywords. Exits on
//! end-of-input or an explicit `quit` / `exit`. The only accepted
//! argument is an optional stop-word file path.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::{error, info};

use han_prep::{Pipeline, PrepConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = PrepConfig::default();
    if let Some(path) = std::env::args().nth(1) {
        config.stop_words_file = path.into();
    }

    let pipeline = Pipeline::new(config).context("cannot build pipeline")?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("请输入中文文本: ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text == "quit" || text == "exit" {
            break;
        }

        match pipeline.process(text) {
            Ok(output) => {
                info!(tokens = ?output.tokens, "cleaned tokens");
                info!(keywords = ?output.keywords, "extracted keywords");
            }
            Err(err) => error!(%err, "processing failed"),
        }
    }

    Ok(())
}
