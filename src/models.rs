//! Data models for index generation requests and run summaries.
//!
//! This module defines the core data structures used throughout the application:
//! - [`IndexRequest`]: One directory-to-index generation job
//! - [`IndexEntry`]: A single listed document, derived from its filename
//! - [`IndexSummary`] / [`IndexManifest`]: Machine-readable record of a run
//!
//! The built-in index plan (which directories get indexed, under which titles
//! and link prefixes) lives here as constructors on [`IndexRequest`]. The
//! titles and preamble lines are historical output content and are preserved
//! verbatim, emoji included.

use serde::{Deserialize, Serialize};

use crate::utils::markdown_stem;

/// One directory-to-index generation job.
///
/// Describes everything the generator needs: where to look for Markdown
/// pages, where to write the index, and the literal strings that frame the
/// generated document.
///
/// # Fields
///
/// * `source_dir` - Directory whose immediate `*.md` files are listed
/// * `output_file` - Path of the regenerated index document
/// * `title` - Heading text, rendered as `# {title}`
/// * `preamble` - Fixed descriptive line below the heading
/// * `link_prefix` - Prepended to each entry link as `{link_prefix}/{name}.md`
#[derive(Debug, Clone)]
pub struct IndexRequest {
    /// Directory whose immediate Markdown files become entries.
    pub source_dir: String,
    /// Path the index document is written to, overwriting any existing file.
    pub output_file: String,
    /// Heading text for the generated document.
    pub title: String,
    /// Fixed descriptive line placed below the heading.
    pub preamble: String,
    /// Link prefix for each entry, without a trailing slash.
    pub link_prefix: String,
}

impl IndexRequest {
    /// The combined events index: `{docs}/events.md`.
    ///
    /// Lists every documented event page with links readers can follow from
    /// the docs root. Links are written without a leading `./`.
    pub fn combined_events_index(docs_dir: &str) -> IndexRequest {
        IndexRequest {
            source_dir: format!("{}/events", docs_dir),
            output_file: format!("{}/events.md", docs_dir),
            title: "📦 List of SDL Events".to_string(),
            preamble: "Below is a list of documented `sdl` events with links to their definitions:"
                .to_string(),
            link_prefix: "events".to_string(),
        }
    }

    /// The generated list indexes: `{docs}/_events.md` and
    /// `{docs}/_root_properties.md`.
    ///
    /// These are the underscore-prefixed indexes meant for inclusion by other
    /// documents, so their links carry an explicit `./` and their preamble
    /// warns against manual edits.
    pub fn generated_list_indexes(docs_dir: &str) -> Vec<IndexRequest> {
        let preamble = "This file is auto-generated. Do not edit manually.";
        vec![
            IndexRequest {
                source_dir: format!("{}/events", docs_dir),
                output_file: format!("{}/_events.md", docs_dir),
                title: "📦 List of SDL Events".to_string(),
                preamble: preamble.to_string(),
                link_prefix: "./events".to_string(),
            },
            IndexRequest {
                source_dir: format!("{}/root", docs_dir),
                output_file: format!("{}/_root_properties.md", docs_dir),
                title: "📌 Root Properties".to_string(),
                preamble: preamble.to_string(),
                link_prefix: "./root".to_string(),
            },
        ]
    }
}

/// A single listed document in a generated index.
///
/// Derived purely from a filename; entries have no lifecycle of their own.
/// The display name is the filename minus its `.md` suffix, preserved
/// verbatim (spaces, casing, and unicode included). Names that collide after
/// suffix stripping each keep their own entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// The filename without the trailing `.md`.
    pub name: String,
    /// Relative link to the document: `{link_prefix}/{name}.md`.
    pub link: String,
}

impl IndexEntry {
    /// Derive an entry from a Markdown filename.
    ///
    /// Returns `None` when the filename does not carry the exact `.md`
    /// suffix, which the caller treats as "not a Markdown page".
    pub fn from_filename(filename: &str, link_prefix: &str) -> Option<IndexEntry> {
        let name = markdown_stem(filename)?;
        Some(IndexEntry {
            name: name.to_string(),
            link: format!("{}/{}.md", link_prefix, name),
        })
    }

    /// Render the entry as a Markdown list item: `- [{name}]({link})`.
    pub fn to_list_item(&self) -> String {
        format!("- [{}]({})", self.name, self.link)
    }
}

/// Record of one regenerated index within a run manifest.
#[derive(Debug, Deserialize, Serialize)]
pub struct IndexSummary {
    /// Title of the regenerated index document.
    pub title: String,
    /// Path the index was written to.
    pub output_file: String,
    /// Number of entries listed in the document.
    pub entry_count: usize,
}

/// Machine-readable summary of a whole run, serialized to JSON on request.
///
/// Indexes whose source directory was missing are absent from `indexes`;
/// the manifest records what was actually written.
#[derive(Debug, Deserialize, Serialize)]
pub struct IndexManifest {
    /// The date of the run in `YYYY-MM-DD` format.
    pub local_date: String,
    /// The exact local time of the run in `HH:MM:SS.microseconds` format.
    pub local_time: String,
    /// One record per index document written during the run.
    pub indexes: Vec<IndexSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_events_index_paths() {
        let request = IndexRequest::combined_events_index("docs");
        assert_eq!(request.source_dir, "docs/events");
        assert_eq!(request.output_file, "docs/events.md");
        assert_eq!(request.title, "📦 List of SDL Events");
        assert_eq!(
            request.preamble,
            "Below is a list of documented `sdl` events with links to their definitions:"
        );
        assert_eq!(request.link_prefix, "events");
    }

    #[test]
    fn test_generated_list_indexes_paths() {
        let requests = IndexRequest::generated_list_indexes("docs");
        assert_eq!(requests.len(), 2);

        assert_eq!(requests[0].source_dir, "docs/events");
        assert_eq!(requests[0].output_file, "docs/_events.md");
        assert_eq!(requests[0].link_prefix, "./events");

        assert_eq!(requests[1].source_dir, "docs/root");
        assert_eq!(requests[1].output_file, "docs/_root_properties.md");
        assert_eq!(requests[1].title, "📌 Root Properties");
        assert_eq!(requests[1].link_prefix, "./root");

        for request in &requests {
            assert_eq!(
                request.preamble,
                "This file is auto-generated. Do not edit manually."
            );
        }
    }

    #[test]
    fn test_plan_respects_docs_dir() {
        let request = IndexRequest::combined_events_index("/srv/docs");
        assert_eq!(request.source_dir, "/srv/docs/events");
        assert_eq!(request.output_file, "/srv/docs/events.md");
    }

    #[test]
    fn test_entry_from_filename() {
        let entry = IndexEntry::from_filename("user-joined.md", "events").unwrap();
        assert_eq!(entry.name, "user-joined");
        assert_eq!(entry.link, "events/user-joined.md");
        assert_eq!(
            entry.to_list_item(),
            "- [user-joined](events/user-joined.md)"
        );
    }

    #[test]
    fn test_entry_preserves_name_verbatim() {
        let entry = IndexEntry::from_filename("On Mouse Down.md", "./events").unwrap();
        assert_eq!(entry.name, "On Mouse Down");
        assert_eq!(entry.link, "./events/On Mouse Down.md");
    }

    #[test]
    fn test_entry_rejects_other_suffixes() {
        assert!(IndexEntry::from_filename("notes.txt", "events").is_none());
        assert!(IndexEntry::from_filename("UPPER.MD", "events").is_none());
        assert!(IndexEntry::from_filename("page.markdown", "events").is_none());
    }

    #[test]
    fn test_manifest_serialization_round_trip() {
        let manifest = IndexManifest {
            local_date: "2025-05-06".to_string(),
            local_time: "08:30:00".to_string(),
            indexes: vec![IndexSummary {
                title: "📦 List of SDL Events".to_string(),
                output_file: "docs/events.md".to_string(),
                entry_count: 3,
            }],
        };

        let json = serde_json::to_string(&manifest).unwrap();
        let deserialized: IndexManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.local_date, "2025-05-06");
        assert_eq!(deserialized.indexes.len(), 1);
        assert_eq!(deserialized.indexes[0].entry_count, 3);
    }
}
