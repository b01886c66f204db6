//! Catalog store trait used by playlist import

use crate::error::Result;
use crate::types::{CatalogItemRef, Playlist, PlaylistId, PodcastEpisodeId, TrackId, UserId};
use async_trait::async_trait;

/// Narrow view of the catalog needed to import and manage playlists.
///
/// Lookups distinguish three outcomes: `Ok(Some(_))` found, `Ok(None)` not found,
/// and `Err(_)` when the store itself failed to answer.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    // ========================================================================
    // Path lookups (read-only)
    // ========================================================================

    /// Find the track whose reconstructed absolute path
    /// (`root_dir + SEP + left_path + right_path + SEP + filename`) equals `path`
    async fn find_track_by_path(&self, path: &str) -> Result<Option<TrackId>>;

    /// Find the podcast episode whose stored path equals `path`
    async fn find_podcast_episode_by_path(&self, path: &str) -> Result<Option<PodcastEpisodeId>>;

    // ========================================================================
    // Playlists
    // ========================================================================

    /// Find or create the playlist `(owner_id, name)` and replace its item list with
    /// `items`, atomically. Returns the playlist with its new items.
    async fn materialize_playlist(
        &self,
        owner_id: UserId,
        name: &str,
        items: &[CatalogItemRef],
    ) -> Result<Playlist>;

    /// Get all playlists owned by a user
    async fn get_user_playlists(&self, owner_id: UserId) -> Result<Vec<Playlist>>;

    /// Get an owned playlist with its items
    async fn get_playlist_with_items(
        &self,
        id: PlaylistId,
        owner_id: UserId,
    ) -> Result<Option<Playlist>>;

    /// Delete a playlist owned by `owner_id`
    async fn delete_playlist(&self, id: PlaylistId, owner_id: UserId) -> Result<()>;
}
