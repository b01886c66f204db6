//! Error types for playlist import

use cadence_core::CadenceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    /// Filename lacks the playlist extension or has nothing in front of it
    #[error("invalid filename {0:?}")]
    InvalidFilename(String),

    /// Declared content-type is not on the allow-list
    #[error("invalid content-type {0:?}")]
    InvalidContentType(String),

    /// A path line matched neither a track nor a podcast episode
    #[error("couldn't match {0:?}")]
    NoMatch(String),

    /// Reading the uploaded stream failed mid-file
    #[error("iterating playlist file {filename:?}: {source}")]
    Scan {
        filename: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog store failed to answer a lookup
    #[error("while matching {path:?}: {source}")]
    Lookup {
        path: String,
        #[source]
        source: CadenceError,
    },

    /// The catalog store failed to save the playlist
    #[error("saving playlist {name:?}: {source}")]
    Save {
        name: String,
        #[source]
        source: CadenceError,
    },
}

impl ImportError {
    /// Whether the error means the catalog store itself is unreliable,
    /// as opposed to a problem with the uploaded file
    pub fn is_systemic(&self) -> bool {
        matches!(self, ImportError::Lookup { .. } | ImportError::Save { .. })
    }
}
