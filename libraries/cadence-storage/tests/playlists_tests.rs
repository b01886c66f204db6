//! Integration tests for playlists vertical slice
//!
//! Tests playlist operations including:
//! - Find-or-create keyed by (owner, name)
//! - Full replacement of the item list, preserving order
//! - Owner scoping for reads and deletes


use cadence_core::{types::*, CadenceError, CatalogStore};
use cadence_storage::{playlists, SqliteCatalog};
use test_helpers::*;

fn track(id: i64) -> CatalogItemRef {
    CatalogItemRef::Track(TrackId::new(id).unwrap())
}

fn episode(id: i64) -> CatalogItemRef {
    CatalogItemRef::PodcastEpisode(PodcastEpisodeId::new(id).unwrap())
}

#[tokio::test]
async fn test_materialize_creates_playlist_with_items() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let owner = UserId::new(1);

    let items = vec![track(3), episode(1), track(2)];
    let playlist = playlists::materialize(pool, owner, "Road Trip", &items)
        .await
        .expect("Failed to materialize playlist");

    assert_eq!(playlist.name, "Road Trip");
    assert_eq!(playlist.owner_id, owner);
    assert_eq!(playlist.items.as_deref(), Some(items.as_slice()));

    let loaded = playlists::get_with_items(pool, playlist.id, owner)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.items, Some(items));
}

#[tokio::test]
async fn test_materialize_is_idempotent_and_replaces_items() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let owner = UserId::new(1);

    let first = playlists::materialize(pool, owner, "Mix", &[track(1), track(2), track(3)])
        .await
        .unwrap();
    let second = playlists::materialize(pool, owner, "Mix", &[track(9)])
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(count_playlists(pool, owner, "Mix").await, 1);

    let loaded = playlists::get_with_items(pool, first.id, owner)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.items, Some(vec![track(9)]));
}

#[tokio::test]
async fn test_materialize_with_no_items_clears_playlist() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let owner = UserId::new(5);

    let playlist = playlists::materialize(pool, owner, "Soon Empty", &[track(1)])
        .await
        .unwrap();
    playlists::materialize(pool, owner, "Soon Empty", &[])
        .await
        .unwrap();

    let items = playlists::get_items(pool, playlist.id).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_same_name_for_different_owners_is_two_playlists() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let alice = UserId::new(1);
    let bob = UserId::new(2);

    let a = playlists::materialize(pool, alice, "Favourites", &[track(1)])
        .await
        .unwrap();
    let b = playlists::materialize(pool, bob, "Favourites", &[track(2)])
        .await
        .unwrap();

    assert_ne!(a.id, b.id);

    let alice_items = playlists::get_items(pool, a.id).await.unwrap();
    assert_eq!(alice_items, vec![track(1)]);
}

#[tokio::test]
async fn test_get_user_playlists_only_returns_owned() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let alice = UserId::new(1);
    let bob = UserId::new(2);

    playlists::materialize(pool, alice, "B side", &[]).await.unwrap();
    playlists::materialize(pool, alice, "A side", &[]).await.unwrap();
    playlists::materialize(pool, bob, "Other", &[]).await.unwrap();

    let owned = playlists::get_user_playlists(pool, alice).await.unwrap();
    let names: Vec<_> = owned.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A side", "B side"]);
    assert!(owned.iter().all(|p| p.owner_id == alice));
}

#[tokio::test]
async fn test_playlist_is_invisible_to_other_owner() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist = playlists::materialize(pool, UserId::new(1), "Private", &[track(1)])
        .await
        .unwrap();

    let other = playlists::get_with_items(pool, playlist.id, UserId::new(2))
        .await
        .unwrap();
    assert!(other.is_none());
}

#[tokio::test]
async fn test_delete_is_scoped_to_owner() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let owner = UserId::new(1);

    let playlist = playlists::materialize(pool, owner, "Doomed", &[track(1), track(2)])
        .await
        .unwrap();

    let result = playlists::delete(pool, playlist.id, UserId::new(2)).await;
    assert!(matches!(result, Err(CadenceError::PlaylistNotFound(id)) if id == playlist.id));
    assert_eq!(count_playlists(pool, owner, "Doomed").await, 1);

    playlists::delete(pool, playlist.id, owner).await.unwrap();
    assert_eq!(count_playlists(pool, owner, "Doomed").await, 0);

    // Items go with the playlist
    let items = playlists::get_items(pool, playlist.id).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_concurrent_materialize_never_duplicates() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool().clone();
    let catalog = SqliteCatalog::new(pool.clone());
    let owner = UserId::new(7);

    let mut handles = Vec::new();
    for i in 1..=8 {
        let catalog = catalog.clone();
        handles.push(tokio::spawn(async move {
            catalog
                .materialize_playlist(owner, "Race", &[track(i), track(i)])
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(count_playlists(&pool, owner, "Race").await, 1);

    // Last write wins, but never a mix of two writes
    let playlist = catalog.get_user_playlists(owner).await.unwrap().remove(0);
    let items = playlists::get_items(&pool, playlist.id).await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], items[1]);
}
