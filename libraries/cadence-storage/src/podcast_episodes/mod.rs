use crate::error::StorageError;
use cadence_core::{error::Result, types::PodcastEpisodeId, CadenceError};
use sqlx::{Row, SqlitePool};

/// Find a podcast episode by its stored absolute path (exact match)
pub async fn find_by_path(pool: &SqlitePool, path: &str) -> Result<Option<PodcastEpisodeId>> {
    let row = sqlx::query("SELECT id FROM podcast_episodes WHERE path = ? ORDER BY id LIMIT 1")
        .bind(path)
        .fetch_optional(pool)
        .await?;

    row.map(|row| {
        let id: i64 = row.get("id");
        PodcastEpisodeId::new(id).ok_or_else(|| {
            CadenceError::from(StorageError::corrupt_row("podcast_episodes", "zero id"))
        })
    })
    .transpose()
}
