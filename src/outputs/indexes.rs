//! Generated Markdown index files.
//!
//! This module implements the directory-to-index generator behind every
//! index document the tool maintains:
//!
//! # Index Files
//!
//! - **events.md**: Combined list of documented events, linked for readers
//!   browsing from the docs root
//! - **_events.md** / **_root_properties.md**: Auto-generated list files
//!   meant for inclusion by other documents
//!
//! # Replace Semantics
//!
//! Unlike navigation files that accumulate entries across runs, every index
//! here is rebuilt from the directory listing and fully overwrites the
//! previous file. Rerunning against an unchanged directory produces
//! byte-identical output.

use crate::models::{IndexEntry, IndexRequest};
use itertools::Itertools;
use std::fmt;
use std::io;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument, warn};

/// Failure modes of a single index generation.
///
/// `DirectoryNotFound` is recoverable from the caller's point of view: the
/// generation for that directory is skipped and others proceed. `Read` and
/// `Write` mean the file system misbehaved under us and there is no fallback
/// location, so the run as a whole should fail.
#[derive(Debug)]
pub enum IndexError {
    /// The source directory does not exist; nothing was written.
    DirectoryNotFound {
        /// The missing directory.
        path: String,
    },
    /// Listing the source directory failed after the existence check.
    Read {
        /// The directory being listed.
        path: String,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// Writing the index document failed.
    Write {
        /// The output file being written.
        path: String,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::DirectoryNotFound { path } => {
                write!(f, "folder not found: {}", path)
            }
            IndexError::Read { path, source } => {
                write!(f, "failed reading directory {}: {}", path, source)
            }
            IndexError::Write { path, source } => {
                write!(f, "failed writing index file {}: {}", path, source)
            }
        }
    }
}

impl std::error::Error for IndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IndexError::DirectoryNotFound { .. } => None,
            IndexError::Read { source, .. } | IndexError::Write { source, .. } => Some(source),
        }
    }
}

/// Regenerate one Markdown index document from a directory listing.
///
/// Lists the immediate `*.md` files of `request.source_dir` (subdirectories
/// are ignored, not traversed), sorts them ascending by filename, derives a
/// display name from each by stripping the `.md` suffix, and overwrites
/// `request.output_file` with the rendered document.
///
/// # Arguments
///
/// * `request` - The source directory, output path, and framing strings
///
/// # Returns
///
/// The number of entries written, or an [`IndexError`] describing why no
/// usable document could be produced. A missing source directory performs
/// no write at all; an existing output file is left untouched.
///
/// # Output
///
/// ```text
/// # {title}
///
/// {preamble}
///
/// - [{name}]({link_prefix}/{name}.md)
/// ```
///
/// An empty source directory is not an error: the document then ends after
/// the preamble and the returned count is 0.
#[instrument(level = "info", skip_all, fields(source_dir = %request.source_dir, output_file = %request.output_file))]
pub async fn generate_index(request: &IndexRequest) -> Result<usize, IndexError> {
    if !Path::new(&request.source_dir).is_dir() {
        return Err(IndexError::DirectoryNotFound {
            path: request.source_dir.clone(),
        });
    }

    let filenames = list_markdown_filenames(&request.source_dir).await?;

    let entries: Vec<IndexEntry> = filenames
        .iter()
        .filter_map(|filename| IndexEntry::from_filename(filename, &request.link_prefix))
        .collect();

    let document = render_document(&request.title, &request.preamble, &entries);

    fs::write(&request.output_file, document)
        .await
        .map_err(|e| IndexError::Write {
            path: request.output_file.clone(),
            source: e,
        })?;

    info!(
        path = %request.output_file,
        entries = entries.len(),
        "Updated index file"
    );
    Ok(entries.len())
}

/// List the Markdown filenames immediately inside `dir`, sorted ascending.
///
/// Only regular files whose name ends with the literal `.md` suffix are
/// kept. Sorting happens on the full filename (suffix included), so the
/// final document order is the plain lexicographic order of the directory
/// listing. Filenames that are not valid UTF-8 cannot be linked and are
/// skipped with a warning.
async fn list_markdown_filenames(dir: &str) -> Result<Vec<String>, IndexError> {
    let read_failed = |e: io::Error| IndexError::Read {
        path: dir.to_string(),
        source: e,
    };

    let mut read_dir = fs::read_dir(dir).await.map_err(read_failed)?;
    let mut filenames = Vec::new();

    while let Some(entry) = read_dir.next_entry().await.map_err(read_failed)? {
        let file_type = entry.file_type().await.map_err(read_failed)?;
        if !file_type.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            warn!(file = ?file_name, "Skipping non-UTF-8 filename");
            continue;
        };

        if crate::utils::is_markdown_filename(name) {
            filenames.push(name.to_string());
        }
    }

    Ok(filenames.into_iter().sorted().collect())
}

/// Render the index document.
///
/// Lines are joined with a single `\n` and no extra trailing newline, so an
/// index with entries ends on the last list item and an empty index ends on
/// the blank separator after the preamble.
fn render_document(title: &str, preamble: &str, entries: &[IndexEntry]) -> String {
    let mut lines = vec![
        format!("# {}", title),
        String::new(),
        preamble.to_string(),
        String::new(),
    ];

    for entry in entries {
        lines.push(entry.to_list_item());
    }

    lines.join("\n")
}
