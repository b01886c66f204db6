//! Persisting a resolved item list as a playlist

use crate::{error::ImportError, Result};
use cadence_core::{
    types::{CatalogItemRef, Playlist, UserId},
    CatalogStore,
};

/// Find or create the playlist `(owner_id, name)` and replace its items with `items`.
///
/// The replacement is all-or-nothing; atomicity is delegated to the store.
pub async fn materialize<S>(
    store: &S,
    owner_id: UserId,
    name: &str,
    items: &[CatalogItemRef],
) -> Result<Playlist>
where
    S: CatalogStore + ?Sized,
{
    let playlist = store
        .materialize_playlist(owner_id, name, items)
        .await
        .map_err(|source| ImportError::Save {
            name: name.to_string(),
            source,
        })?;

    tracing::info!(
        "Saved playlist {:?} (id {}) for user {} with {} item(s)",
        playlist.name,
        playlist.id,
        owner_id,
        playlist.item_count()
    );

    Ok(playlist)
}
