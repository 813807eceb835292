//! Output generation modules for the index files and the run manifest.
//!
//! This module contains submodules responsible for everything the tool
//! writes:
//!
//! # Submodules
//!
//! - [`indexes`]: Rebuilds the Markdown index documents from directory listings
//! - [`manifest`]: Writes an optional JSON summary of a run for other tooling
//!
//! # Output Structure
//!
//! ```text
//! docs/
//! ├── events/                 # source pages (input)
//! ├── root/                   # source pages (input)
//! ├── events.md               # combined events index
//! ├── _events.md              # generated events list
//! └── _root_properties.md     # generated root properties list
//! ```

pub mod indexes;
pub mod manifest;
