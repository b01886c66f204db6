//! Domain types

mod ids;
mod item_ref;
mod playlist;

pub use ids::{PlaylistId, PodcastEpisodeId, TrackId, UserId};
pub use item_ref::{CatalogItemRef, ItemKind};
pub use playlist::Playlist;
