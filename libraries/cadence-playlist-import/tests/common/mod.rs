//! Shared fixtures for playlist import tests

#![allow(dead_code)]

use async_trait::async_trait;
use cadence_core::{types::*, CadenceError, CatalogStore, Result};
use cadence_playlist_import::PlaylistUpload;
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};

static INIT: Once = Once::new();

/// Route importer logs to the test output once per binary
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

pub type TestUpload = PlaylistUpload<Cursor<Vec<u8>>>;

/// Build an in-memory upload
pub fn upload(filename: &str, content_type: &str, body: impl Into<Vec<u8>>) -> TestUpload {
    PlaylistUpload::new(filename, content_type, Cursor::new(body.into()))
}

/// Build an in-memory `.m3u8` upload with a valid content-type
pub fn m3u8(filename: &str, lines: &[&str]) -> TestUpload {
    upload(filename, "audio/x-mpegurl", lines.join("\n"))
}

pub fn track(id: i64) -> CatalogItemRef {
    CatalogItemRef::Track(TrackId::new(id).unwrap())
}

pub fn episode(id: i64) -> CatalogItemRef {
    CatalogItemRef::PodcastEpisode(PodcastEpisodeId::new(id).unwrap())
}

/// In-memory catalog store with injectable failures
#[derive(Default)]
pub struct FakeCatalog {
    tracks: HashMap<String, TrackId>,
    episodes: HashMap<String, PodcastEpisodeId>,
    fail_lookup_on: Option<String>,
    fail_saves: bool,
    playlists: Mutex<Vec<Playlist>>,
    lookups: AtomicUsize,
    saves: AtomicUsize,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_track(mut self, path: &str, id: i64) -> Self {
        self.tracks.insert(path.to_string(), TrackId::new(id).unwrap());
        self
    }

    pub fn with_episode(mut self, path: &str, id: i64) -> Self {
        self.episodes
            .insert(path.to_string(), PodcastEpisodeId::new(id).unwrap());
        self
    }

    /// Make any lookup of `path` fail as if the database were unavailable
    pub fn failing_lookup_on(mut self, path: &str) -> Self {
        self.fail_lookup_on = Some(path.to_string());
        self
    }

    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// Number of path lookups performed (track and episode lookups both count)
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn playlists(&self) -> Vec<Playlist> {
        self.playlists.lock().unwrap().clone()
    }

    fn check(&self, path: &str) -> Result<()> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookup_on.as_deref() == Some(path) {
            return Err(CadenceError::Database("database is locked".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for FakeCatalog {
    async fn find_track_by_path(&self, path: &str) -> Result<Option<TrackId>> {
        self.check(path)?;
        Ok(self.tracks.get(path).copied())
    }

    async fn find_podcast_episode_by_path(&self, path: &str) -> Result<Option<PodcastEpisodeId>> {
        self.check(path)?;
        Ok(self.episodes.get(path).copied())
    }

    async fn materialize_playlist(
        &self,
        owner_id: UserId,
        name: &str,
        items: &[CatalogItemRef],
    ) -> Result<Playlist> {
        if self.fail_saves {
            return Err(CadenceError::Database("disk I/O error".to_string()));
        }
        self.saves.fetch_add(1, Ordering::SeqCst);

        let mut playlists = self.playlists.lock().unwrap();
        let index = match playlists
            .iter()
            .position(|p| p.owner_id == owner_id && p.name == name)
        {
            Some(index) => index,
            None => {
                let next_id = playlists.len() as i64 + 1;
                playlists.push(Playlist {
                    id: PlaylistId::new(next_id),
                    owner_id,
                    name: name.to_string(),
                    created_at: "2024-06-01 12:00:00".to_string(),
                    updated_at: "2024-06-01 12:00:00".to_string(),
                    items: None,
                });
                playlists.len() - 1
            }
        };

        playlists[index].items = Some(items.to_vec());
        Ok(playlists[index].clone())
    }

    async fn get_user_playlists(&self, owner_id: UserId) -> Result<Vec<Playlist>> {
        Ok(self
            .playlists()
            .into_iter()
            .filter(|p| p.owner_id == owner_id)
            .collect())
    }

    async fn get_playlist_with_items(
        &self,
        id: PlaylistId,
        owner_id: UserId,
    ) -> Result<Option<Playlist>> {
        Ok(self
            .playlists()
            .into_iter()
            .find(|p| p.id == id && p.owner_id == owner_id))
    }

    async fn delete_playlist(&self, id: PlaylistId, owner_id: UserId) -> Result<()> {
        let mut playlists = self.playlists.lock().unwrap();
        let before = playlists.len();
        playlists.retain(|p| !(p.id == id && p.owner_id == owner_id));
        if playlists.len() == before {
            return Err(CadenceError::PlaylistNotFound(id));
        }
        Ok(())
    }
}
