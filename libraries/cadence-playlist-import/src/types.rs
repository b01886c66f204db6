//! Common types for playlist import

use cadence_core::types::Playlist;

/// Default playlist file extension
pub const DEFAULT_EXTENSION: &str = ".m3u8";

/// Default cap on a single user-facing error string, in characters
pub const DEFAULT_MAX_ERROR_CHARS: usize = 100;

/// MIME types accepted for playlist uploads by default.
///
/// Clients disagree on what to send for M3U files, so the generic
/// `application/octet-stream` is accepted too.
pub const DEFAULT_CONTENT_TYPES: &[&str] = &[
    "audio/x-mpegurl",
    "audio/mpegurl",
    "application/x-mpegurl",
    "application/vnd.apple.mpegurl",
    "application/octet-stream",
];

/// Configuration for import operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    /// Required filename suffix, stripped to form the playlist name
    pub extension: String,

    /// Accepted content-types (compared case-insensitively)
    pub content_types: Vec<String>,

    /// Maximum length of each reported error string, in characters
    pub max_error_chars: usize,

    /// Stop the whole batch, not just the current file, when the store fails
    pub abort_batch_on_store_failure: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            content_types: DEFAULT_CONTENT_TYPES.iter().map(ToString::to_string).collect(),
            max_error_chars: DEFAULT_MAX_ERROR_CHARS,
            abort_batch_on_store_failure: false,
        }
    }
}

/// One uploaded playlist file
#[derive(Debug)]
pub struct PlaylistUpload<R> {
    /// Declared filename, e.g. `My Mix.m3u8`
    pub filename: String,

    /// Declared `Content-Type` header value
    pub content_type: String,

    /// File contents
    pub reader: R,
}

impl<R> PlaylistUpload<R> {
    pub fn new(filename: impl Into<String>, content_type: impl Into<String>, reader: R) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            reader,
        }
    }
}

/// Result of importing a single file
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub filename: String,

    /// The stored playlist, `None` when the file was not imported
    pub playlist: Option<Playlist>,

    /// Bounded, user-facing errors in the order they occurred
    pub errors: Vec<String>,

    /// The catalog store failed while processing this file
    pub store_failed: bool,
}

impl FileOutcome {
    pub(crate) fn rejected(filename: impl Into<String>, error: String) -> Self {
        Self {
            filename: filename.into(),
            playlist: None,
            errors: vec![error],
            store_failed: false,
        }
    }

    /// Whether a playlist was created or updated
    pub fn created(&self) -> bool {
        self.playlist.is_some()
    }
}

/// Summary of an import invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Number of playlists created or updated
    pub created: usize,

    /// File-level and line-level errors, in presentation order
    pub errors: Vec<String>,
}

impl ImportReport {
    /// Fold one file's outcome into the report
    pub fn record(&mut self, outcome: FileOutcome) {
        if outcome.created() {
            self.created += 1;
        }
        self.errors.extend(outcome.errors);
    }

    /// Add an error that happened outside the importer (e.g. the upload could not be opened)
    pub fn record_error(&mut self, message: &str, max_chars: usize) {
        self.errors.push(truncate_message(message, max_chars));
    }

    /// Human-readable headline, e.g. `2 playlist(s) created`
    pub fn summary(&self) -> String {
        format!("{} playlist(s) created", self.created)
    }
}

/// Cut a message down to at most `max_chars` characters
pub fn truncate_message(message: &str, max_chars: usize) -> String {
    message.chars().take(max_chars).collect()
}
