//! # Docs Indexer
//!
//! A documentation build step that scans the `docs/` tree for Markdown pages
//! and regenerates the index files that list them, so the indexes never
//! drift from the pages actually on disk.
//!
//! ## Features
//!
//! - Rebuilds the combined events index (`events.md`) and the generated list
//!   files (`_events.md`, `_root_properties.md`) from directory listings
//! - Deterministic output: entries are sorted by filename and a rerun over an
//!   unchanged tree is byte-identical
//! - A missing source directory is reported and skipped; the remaining
//!   indexes are still regenerated
//! - Optional JSON manifest summarizing what was written, for other tooling
//!
//! ## Usage
//!
//! ```sh
//! docs_indexer -d ./docs
//! ```
//!
//! ## Architecture
//!
//! The application is a short pipeline:
//! 1. **Plan**: Assemble the built-in set of index requests for the docs dir
//! 2. **Generate**: Rebuild each index from its directory listing (each job
//!    reads one directory and writes one distinct file, so they run through
//!    a small concurrent window)
//! 3. **Report**: Log a summary and optionally write the JSON manifest

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod models;
mod outputs;
mod utils;

use cli::Cli;
use models::{IndexManifest, IndexRequest, IndexSummary};
use outputs::indexes::{self, IndexError};
use outputs::manifest;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("index_update starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.docs_dir, ?args.manifest_file, "Parsed CLI arguments");

    // Early check: ensure the docs dir is writable, since every index file
    // lands inside it
    if let Err(e) = ensure_writable_dir(&args.docs_dir).await {
        error!(
            path = %args.docs_dir,
            error = %e,
            "Docs directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Assemble the index plan ----
    let mut requests = vec![IndexRequest::combined_events_index(&args.docs_dir)];
    requests.extend(IndexRequest::generated_list_indexes(&args.docs_dir));
    info!(count = requests.len(), "Index plan assembled");

    // ---- Regenerate indexes ----
    // Each request reads one directory and writes one distinct file, so the
    // jobs are independent and can overlap freely.
    use futures::stream::{self, StreamExt};
    const PARALLEL_BATCH_SIZE: usize = 4;

    let results: Vec<Result<IndexSummary, IndexError>> = stream::iter(requests)
        .map(|request| async move {
            let entry_count = indexes::generate_index(&request).await?;
            Ok(IndexSummary {
                title: request.title,
                output_file: request.output_file,
                entry_count,
            })
        })
        .buffer_unordered(PARALLEL_BATCH_SIZE)
        .collect()
        .await;

    let mut summaries: Vec<IndexSummary> = Vec::new();
    let mut fatal: Option<IndexError> = None;
    for result in results {
        match result {
            Ok(summary) => {
                summaries.push(summary);
            }
            Err(e @ IndexError::DirectoryNotFound { .. }) => {
                error!(error = %e, "Folder not found; skipping index");
            }
            Err(e) => {
                error!(error = %e, "Failed to regenerate index");
                if fatal.is_none() {
                    fatal = Some(e);
                }
            }
        }
    }

    // Completion order varies, keep the report stable
    summaries.sort_by(|a, b| a.output_file.cmp(&b.output_file));

    let total_entries: usize = summaries.iter().map(|s| s.entry_count).sum();
    info!(
        indexes = summaries.len(),
        total_entries, "Index regeneration finished"
    );

    // ---- Manifest output ----
    if let Some(ref manifest_file) = args.manifest_file {
        let run_manifest = IndexManifest {
            local_date: Local::now().date_naive().to_string(),
            local_time: Local::now().time().to_string(),
            indexes: summaries,
        };
        if let Err(e) = manifest::write_manifest(&run_manifest, manifest_file).await {
            error!(path = %manifest_file, error = %e, "Failed writing manifest");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    if let Some(e) = fatal {
        return Err(Box::new(e));
    }
    Ok(())
}
