use crate::error::StorageError;
use cadence_core::{error::Result, types::TrackId, CadenceError};
use sqlx::{Row, SqlitePool};

/// Find a track by its reconstructed absolute path.
///
/// Tracks do not store their path. It is rebuilt inside the query as
/// `root_dir + separator + left_path + right_path + separator + filename`
/// and compared byte-for-byte with `path`.
pub async fn find_by_path(
    pool: &SqlitePool,
    path: &str,
    separator: &str,
) -> Result<Option<TrackId>> {
    let row = sqlx::query(
        r#"
        SELECT t.id
        FROM tracks t
        INNER JOIN albums a ON t.album_id = a.id
        WHERE (a.root_dir || ? || a.left_path || a.right_path || ? || t.filename) = ?
        ORDER BY t.id
        LIMIT 1
        "#,
    )
    .bind(separator)
    .bind(separator)
    .bind(path)
    .fetch_optional(pool)
    .await?;

    row.map(|row| {
        let id: i64 = row.get("id");
        TrackId::new(id)
            .ok_or_else(|| CadenceError::from(StorageError::corrupt_row("tracks", "zero id")))
    })
    .transpose()
}
