//! JSON run manifest output.
//!
//! This module serializes a summary of the regenerated indexes to JSON so
//! other tooling (CI checks, docs build steps) can consume the result of a
//! run without parsing the Markdown output.
//!
//! The manifest is auxiliary: it is only written when requested, and a
//! failed manifest write never invalidates the index files that were
//! already regenerated.

use crate::models::IndexManifest;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Write an [`IndexManifest`] to the given path as pretty-printed JSON.
///
/// # Arguments
///
/// * `manifest` - The run summary to serialize
/// * `path` - Destination file, overwritten if present
///
/// # Returns
///
/// `Ok(())` on success, or an error if serialization or the file write
/// fails.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn write_manifest(manifest: &IndexManifest, path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(manifest)?;

    info!(path = %path, "Writing manifest");
    fs::write(path, json).await?;
    info!(path = %path, indexes = manifest.indexes.len(), "Wrote run manifest");

    Ok(())
}
