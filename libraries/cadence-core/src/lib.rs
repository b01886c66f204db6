//! Cadence Core
//!
//! Domain types, traits, and error handling shared by the Cadence crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `CatalogItemRef`, `Playlist`, and the id newtypes
//! - **Core Traits**: `CatalogStore`, the narrow catalog capability used by playlist import
//! - **Error Handling**: Unified `CadenceError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use cadence_core::types::{CatalogItemRef, TrackId};
//!
//! let item: CatalogItemRef = "tr-42".parse().unwrap();
//! assert_eq!(item, CatalogItemRef::Track(TrackId::new(42).unwrap()));
//! assert_eq!(item.to_string(), "tr-42");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod store;
pub mod types;

pub use error::{CadenceError, Result};
pub use store::CatalogStore;

pub use types::{
    CatalogItemRef, ItemKind, Playlist, PlaylistId, PodcastEpisodeId, TrackId, UserId,
};
