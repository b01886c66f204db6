use crate::{playlists, podcast_episodes, tracks};
use async_trait::async_trait;
use cadence_core::{error::Result, store::CatalogStore, types::*};
use sqlx::SqlitePool;
use std::path::MAIN_SEPARATOR_STR;

/// Catalog store backed by `SQLite`
#[derive(Debug, Clone)]
pub struct SqliteCatalog {
    pool: SqlitePool,
    path_separator: String,
}

impl SqliteCatalog {
    /// Create a catalog that rebuilds track paths with the platform separator
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            path_separator: MAIN_SEPARATOR_STR.to_string(),
        }
    }

    /// Use a different separator when rebuilding track paths
    /// (e.g. a library scanned on another platform)
    #[must_use]
    pub fn with_path_separator(mut self, separator: impl Into<String>) -> Self {
        self.path_separator = separator.into();
        self
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalog {
    async fn find_track_by_path(&self, path: &str) -> Result<Option<TrackId>> {
        tracks::find_by_path(&self.pool, path, &self.path_separator).await
    }

    async fn find_podcast_episode_by_path(&self, path: &str) -> Result<Option<PodcastEpisodeId>> {
        podcast_episodes::find_by_path(&self.pool, path).await
    }

    async fn materialize_playlist(
        &self,
        owner_id: UserId,
        name: &str,
        items: &[CatalogItemRef],
    ) -> Result<Playlist> {
        playlists::materialize(&self.pool, owner_id, name, items).await
    }

    async fn get_user_playlists(&self, owner_id: UserId) -> Result<Vec<Playlist>> {
        playlists::get_user_playlists(&self.pool, owner_id).await
    }

    async fn get_playlist_with_items(
        &self,
        id: PlaylistId,
        owner_id: UserId,
    ) -> Result<Option<Playlist>> {
        playlists::get_with_items(&self.pool, id, owner_id).await
    }

    async fn delete_playlist(&self, id: PlaylistId, owner_id: UserId) -> Result<()> {
        playlists::delete(&self.pool, id, owner_id).await
    }
}
