//! Command-line interface definitions for Docs Indexer.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! All arguments can be provided via command-line flags or environment variables.

use clap::Parser;

/// Command-line arguments for the Docs Indexer application.
///
/// Every option has a default, so a bare invocation regenerates the indexes
/// for `./docs`, which is how the tool runs from the docs repository root.
///
/// # Examples
///
/// ```sh
/// # Regenerate the indexes under ./docs
/// docs_indexer
///
/// # Point at a different docs checkout
/// docs_indexer -d ../sdl-docs/docs
///
/// # Also write a JSON summary of the run
/// docs_indexer --manifest-file ./docs/indexes.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Documentation root containing the `events/` and `root/` page directories
    #[arg(short, long, env = "DOCS_DIR", default_value = "docs")]
    pub docs_dir: String,

    /// Optional path for a JSON manifest describing the regenerated indexes
    #[arg(long)]
    pub manifest_file: Option<String>,
}
