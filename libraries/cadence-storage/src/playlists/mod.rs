use crate::error::StorageError;
use cadence_core::{error::Result, types::*, CadenceError};
use sqlx::{sqlite::SqliteRow, Row, SqliteExecutor, SqlitePool};

fn playlist_from_row(row: &SqliteRow) -> Playlist {
    Playlist {
        id: row.get("id"),
        owner_id: row.get("owner_id"),
        name: row.get("name"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        items: None,
    }
}

/// Get playlists owned by a user
pub async fn get_user_playlists(pool: &SqlitePool, owner_id: UserId) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(
        r#"
        SELECT id, owner_id, name, created_at, updated_at
        FROM playlists
        WHERE owner_id = ?
        ORDER BY name
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(playlist_from_row).collect())
}

/// Get playlist by ID, scoped to its owner
pub async fn get_by_id(
    pool: &SqlitePool,
    id: PlaylistId,
    owner_id: UserId,
) -> Result<Option<Playlist>> {
    let row = sqlx::query(
        r#"
        SELECT id, owner_id, name, created_at, updated_at
        FROM playlists
        WHERE id = ? AND owner_id = ?
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(playlist_from_row))
}

/// Get playlist with all items, in position order
pub async fn get_with_items(
    pool: &SqlitePool,
    id: PlaylistId,
    owner_id: UserId,
) -> Result<Option<Playlist>> {
    let Some(mut playlist) = get_by_id(pool, id, owner_id).await? else {
        return Ok(None);
    };

    playlist.items = Some(get_items(pool, id).await?);

    Ok(Some(playlist))
}

/// Get the ordered items of a playlist
pub async fn get_items<'e, E>(executor: E, playlist_id: PlaylistId) -> Result<Vec<CatalogItemRef>>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query(
        r#"
        SELECT item_kind, item_id
        FROM playlist_items
        WHERE playlist_id = ?
        ORDER BY position
        "#,
    )
    .bind(playlist_id)
    .fetch_all(executor)
    .await?;

    rows.into_iter()
        .map(|row| {
            let kind: String = row.get("item_kind");
            let value: i64 = row.get("item_id");
            ItemKind::from_tag(&kind)
                .and_then(|kind| CatalogItemRef::from_parts(kind, value))
                .ok_or_else(|| {
                    CadenceError::from(StorageError::corrupt_row(
                        "playlist_items",
                        format!("{kind}-{value}"),
                    ))
                })
        })
        .collect()
}

/// Find or create the playlist `(owner_id, name)` and replace its items.
///
/// Runs in a single transaction: the upsert relies on the `UNIQUE (owner_id, name)`
/// constraint, so concurrent imports of the same name never produce two rows, and
/// readers see either the previous item list or the complete new one. Concurrent
/// writers are serialized by `SQLite`; the last commit wins.
pub async fn materialize(
    pool: &SqlitePool,
    owner_id: UserId,
    name: &str,
    items: &[CatalogItemRef],
) -> Result<Playlist> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query(
        r#"
        INSERT INTO playlists (owner_id, name)
        VALUES (?, ?)
        ON CONFLICT(owner_id, name) DO UPDATE SET updated_at = datetime('now')
        RETURNING id, owner_id, name, created_at, updated_at
        "#,
    )
    .bind(owner_id)
    .bind(name)
    .fetch_one(&mut *tx)
    .await?;

    let mut playlist = playlist_from_row(&row);

    sqlx::query("DELETE FROM playlist_items WHERE playlist_id = ?")
        .bind(playlist.id)
        .execute(&mut *tx)
        .await?;

    for (position, item) in items.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO playlist_items (playlist_id, position, item_kind, item_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(playlist.id)
        .bind(position as i64)
        .bind(item.kind().as_str())
        .bind(item.value())
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    playlist.items = Some(items.to_vec());

    Ok(playlist)
}

/// Delete playlist, scoped to its owner
pub async fn delete(pool: &SqlitePool, id: PlaylistId, owner_id: UserId) -> Result<()> {
    let result = sqlx::query("DELETE FROM playlists WHERE id = ? AND owner_id = ?")
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(CadenceError::PlaylistNotFound(id));
    }

    Ok(())
}
