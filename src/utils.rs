//! Utility functions for filename classification and file system checks.
//!
//! This module provides the small helpers used throughout the application:
//! - Markdown filename detection and display-name derivation
//! - File system validation for the docs directory

use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

/// Check whether a filename names a Markdown page.
///
/// The test is an exact, case-sensitive suffix match on `.md`. `.MD` and
/// `.markdown` files are intentionally not picked up, matching what the
/// generated indexes have always listed.
///
/// # Examples
///
/// ```ignore
/// assert!(is_markdown_filename("user-joined.md"));
/// assert!(!is_markdown_filename("user-joined.MD"));
/// ```
pub fn is_markdown_filename(filename: &str) -> bool {
    filename.ends_with(".md")
}

/// Derive the display name for a Markdown filename.
///
/// Strips exactly the trailing `.md` suffix and nothing else: spaces, casing,
/// and unicode are preserved verbatim.
///
/// # Returns
///
/// The filename minus its `.md` suffix, or `None` if the suffix is absent.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(markdown_stem("user-joined.md"), Some("user-joined"));
/// assert_eq!(markdown_stem("notes.txt"), None);
/// ```
pub fn markdown_stem(filename: &str) -> Option<&str> {
    filename.strip_suffix(".md")
}

/// Ensure a directory exists and is writable.
///
/// This function creates the directory if it doesn't exist, then performs
/// a write test by creating and immediately deleting a probe file.
///
/// # Arguments
///
/// * `path` - The directory path to validate
///
/// # Returns
///
/// `Ok(())` if the directory exists and is writable, or an error describing
/// the failure.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The directory is not writable (permission denied, read-only filesystem, etc.)
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Docs directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_markdown_filename() {
        assert!(is_markdown_filename("user-joined.md"));
        assert!(is_markdown_filename("On Mouse Down.md"));
        assert!(is_markdown_filename(".md"));
    }

    #[test]
    fn test_is_markdown_filename_is_case_sensitive() {
        assert!(!is_markdown_filename("user-joined.MD"));
        assert!(!is_markdown_filename("user-joined.Md"));
        assert!(!is_markdown_filename("user-joined.markdown"));
        assert!(!is_markdown_filename("user-joined"));
    }

    #[test]
    fn test_markdown_stem() {
        assert_eq!(markdown_stem("user-joined.md"), Some("user-joined"));
        assert_eq!(markdown_stem("a.b.md"), Some("a.b"));
        assert_eq!(markdown_stem(".md"), Some(""));
        assert_eq!(markdown_stem("notes.txt"), None);
        assert_eq!(markdown_stem("UPPER.MD"), None);
    }

    #[test]
    fn test_markdown_stem_strips_only_trailing_suffix() {
        assert_eq!(markdown_stem("nested.md.md"), Some("nested.md"));
        assert_eq!(markdown_stem("Zvláštní Událost.md"), Some("Zvláštní Událost"));
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("docs");
        let path = path.to_str().unwrap();

        ensure_writable_dir(path).await.unwrap();
        assert!(std::path::Path::new(path).is_dir());
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_accepts_existing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        ensure_writable_dir(tmp.path().to_str().unwrap())
            .await
            .unwrap();
    }
}
