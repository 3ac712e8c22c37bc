use anyhow::Result;
use clap::Parser;
use document_loader::config::ChunkingConfig;
use document_loader::utils::logger::init_logger;
use document_loader::utils::{BatchSummary, Metrics};
use document_loader::{Document, DocumentProcessor, ProcessorConfig, Settings};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "document-loader")]
#[command(about = "Load PDF, DOCX and TXT files into text records")]
struct Cli {
    /// Files to process, in order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Return whole records instead of chunks
    #[arg(long)]
    no_split: bool,

    /// Maximum characters per chunk (overrides settings)
    #[arg(long, allow_negative_numbers = true)]
    chunk_size: Option<i64>,

    /// Characters shared between consecutive chunks (overrides settings)
    #[arg(long, allow_negative_numbers = true)]
    chunk_overlap: Option<i64>,

    /// Settings file (default: config/settings.*, optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print records as JSON lines
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    exit_code(run(cli))
}

fn exit_code(outcome: Result<BatchSummary>) -> ExitCode {
    match outcome {
        Ok(summary) if summary.all_succeeded() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<BatchSummary> {
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path, true)?,
        None => Settings::load()?,
    };

    init_logger(&settings.logging)?;

    let chunking = ChunkingConfig {
        size: cli.chunk_size.unwrap_or(settings.chunking.size),
        overlap: cli.chunk_overlap.unwrap_or(settings.chunking.overlap),
    };
    let config = ProcessorConfig::try_from(&chunking)?;
    let processor = DocumentProcessor::new(config);

    info!(
        "Starting document loader: {} files (chunk_size={}, chunk_overlap={}, split={})",
        cli.files.len(),
        config.chunk_size(),
        config.chunk_overlap(),
        !cli.no_split
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let metrics = process_files(&processor, &cli.files, !cli.no_split, cli.json, &mut out)?;

    Ok(metrics.log_summary())
}

/// Processes every file in order; a failing file is logged and counted.
fn process_files(
    processor: &DocumentProcessor,
    files: &[PathBuf],
    split: bool,
    json: bool,
    out: &mut impl Write,
) -> Result<Metrics> {
    let metrics = Metrics::new();

    for path in files {
        let started = Instant::now();

        match processor.process_document(path, split) {
            Ok(documents) => {
                metrics.record_success(documents.len(), started.elapsed());
                write_records(out, path, &documents, json)?;
            }
            Err(e) => {
                metrics.record_failure(started.elapsed());
                error!("Error processing document: {}", e);
            }
        }
    }

    out.flush()?;
    Ok(metrics)
}

fn write_records(
    out: &mut impl Write,
    path: &Path,
    documents: &[Document],
    json: bool,
) -> Result<()> {
    if json {
        for document in documents {
            serde_json::to_writer(&mut *out, document)?;
            writeln!(out)?;
        }
    } else {
        writeln!(out, "Loaded {} records from {}", documents.len(), path.display())?;
    }
    Ok(())
}
