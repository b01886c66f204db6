//! Cadence Playlist Import
//!
//! Imports M3U-style playlist files into the catalog. Every path line is resolved
//! to a track or podcast episode and the result is stored as a named playlist
//! owned by the uploading user.
//!
//! # Pipeline
//!
//! - `validator`: checks the declared content-type and derives the playlist name
//! - `line_filter`: skips blank and `#` comment lines
//! - `resolver`: exact-path lookup, tracks first, then podcast episodes
//! - `materializer`: find-or-create the playlist and replace its items
//! - `importer`: drives files and batches, collecting bounded error strings
//!
//! Unresolved lines never abort an import. A failing catalog store aborts the
//! file it happened in, and nothing is written for that file.

mod error;
mod types;

pub mod importer;
pub mod line_filter;
pub mod materializer;
pub mod resolver;
pub mod validator;

pub use error::ImportError;
pub use importer::PlaylistImporter;
pub use types::*;

/// Result type for the import pipeline
pub type Result<T> = std::result::Result<T, ImportError>;
