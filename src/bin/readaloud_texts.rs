//! Print speakable paragraphs for a JSON page document.
//!
//! Reads `{"pages": [[{"str": "...", "x": 0, "y": 0}, ...], ...]}` (or a bare
//! array of pages) and prints one JSON array of paragraph strings per page, in
//! page order, one line per page.
//!
//! Usage:
//!   cargo run --bin readaloud_texts -- document.json
//!   cargo run --bin readaloud_texts -- --page 3 --keep-annotations < document.json

use pdf_readaloud::document::{MemoryPageSource, ReadAloudSession};
use pdf_readaloud::pipeline::{paragraphs_to_json, LogLevel, ReadAloudConfig};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

struct CliConfig {
    input: Option<PathBuf>,
    page: Option<usize>,
    pipeline: ReadAloudConfig,
}

impl CliConfig {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut input = None;
        let mut page = None;
        let mut pipeline = ReadAloudConfig::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--page" => {
                    i += 1;
                    let value = args.get(i).ok_or("--page needs a page index")?;
                    page = Some(
                        value
                            .parse()
                            .map_err(|_| format!("invalid page index: {}", value))?,
                    );
                },
                "--no-trim" => pipeline.trim_header_footer = false,
                "--no-reflow" => pipeline.reflow_paragraphs = false,
                "--keep-annotations" => pipeline.strip_annotations = false,
                "--verbose" | "-v" => pipeline.log_level = LogLevel::Debug,
                other if other.starts_with('-') => {
                    return Err(format!("unknown option: {}", other));
                },
                path => input = Some(PathBuf::from(path)),
            }
            i += 1;
        }

        Ok(Self {
            input,
            page,
            pipeline,
        })
    }
}

fn run(config: CliConfig) -> pdf_readaloud::Result<()> {
    let source = match &config.input {
        Some(path) => MemoryPageSource::from_reader(BufReader::new(File::open(path)?))?,
        None => MemoryPageSource::from_reader(io::stdin().lock())?,
    };

    let mut session = ReadAloudSession::with_config(source, config.pipeline)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.page {
        Some(index) => {
            // Earlier pages still feed the header/footer history.
            let capacity = session.pipeline().trimmer().config().history_capacity;
            for previous in index.saturating_sub(capacity)..index {
                session.get_texts(previous, true)?;
            }
            match session.get_texts(index, false)? {
                Some(paragraphs) => writeln!(out, "{}", paragraphs_to_json(&paragraphs)?)?,
                None => log::warn!(
                    "Page {} is past the end of the document ({} pages)",
                    index,
                    session.page_count()
                ),
            }
        },
        None => {
            let mut index = 0;
            while let Some(paragraphs) = session.get_texts(index, false)? {
                writeln!(out, "{}", paragraphs_to_json(&paragraphs)?)?;
                index += 1;
            }
        },
    }

    Ok(())
}

fn main() -> ExitCode {
    let config = match CliConfig::from_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!(
                "Usage: readaloud_texts [--page N] [--no-trim] [--no-reflow] [--keep-annotations] [--verbose] [FILE]"
            );
            return ExitCode::from(2);
        },
    };

    env_logger::Builder::new()
        .filter_level(config.pipeline.log_level.to_level_filter())
        .parse_default_env()
        .init();

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
