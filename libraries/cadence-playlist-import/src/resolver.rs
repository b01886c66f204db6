//! Path to catalog item resolution

use crate::{error::ImportError, Result};
use cadence_core::{types::CatalogItemRef, CatalogStore};

/// Resolve a candidate path to a catalog item.
///
/// Tracks are tried first (matching the path rebuilt from the album's path
/// decomposition), then podcast episodes (matching their stored path).
/// Both comparisons are exact.
///
/// # Errors
///
/// - [`ImportError::NoMatch`] when neither a track nor an episode has this path
/// - [`ImportError::Lookup`] when the store fails; callers must stop processing the file
pub async fn resolve_path<S>(store: &S, path: &str) -> Result<CatalogItemRef>
where
    S: CatalogStore + ?Sized,
{
    let lookup_failed = |source| ImportError::Lookup {
        path: path.to_string(),
        source,
    };

    if let Some(track_id) = store.find_track_by_path(path).await.map_err(lookup_failed)? {
        return Ok(CatalogItemRef::Track(track_id));
    }

    if let Some(episode_id) = store
        .find_podcast_episode_by_path(path)
        .await
        .map_err(lookup_failed)?
    {
        return Ok(CatalogItemRef::PodcastEpisode(episode_id));
    }

    Err(ImportError::NoMatch(path.to_string()))
}
