//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{body::Body, http::Request, Router};
use cadence_core::types::{TrackId, UserId};
use cadence_playlist_import::ImportOptions;
use cadence_server::{api, services::AuthService, state::AppState};
use cadence_storage::SqliteCatalog;
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;

pub const BOUNDARY: &str = "cadence-test-boundary";

/// Router backed by a temp-file database
pub struct TestApp {
    pub router: Router,
    pub auth_service: Arc<AuthService>,
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_limits(ImportOptions::default(), 24 * 1024).await
    }

    pub async fn with_limits(options: ImportOptions, max_upload_bytes: usize) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

        let pool = cadence_storage::create_pool(&db_url).await.unwrap();
        cadence_storage::run_migrations(&pool).await.unwrap();

        let catalog = Arc::new(SqliteCatalog::new(pool.clone()).with_path_separator("/"));
        let auth_service = Arc::new(AuthService::new("test-secret-key".to_string(), 1));

        let app_state = AppState::new(catalog, Arc::clone(&auth_service), options);
        let router = api::router(app_state, max_upload_bytes);

        Self {
            router,
            auth_service,
            pool,
            _temp_dir: temp_dir,
        }
    }

    pub fn token(&self, user: i64) -> String {
        self.auth_service
            .create_access_token(UserId::new(user))
            .unwrap()
    }

    /// Insert an album and a track whose reconstructed path is
    /// `root + "/" + left + right + "/" + filename`
    pub async fn add_track(&self, root: &str, left: &str, right: &str, filename: &str) -> TrackId {
        let album_id = sqlx::query(
            "INSERT INTO albums (root_dir, left_path, right_path) VALUES (?, ?, ?)",
        )
        .bind(root)
        .bind(left)
        .bind(right)
        .execute(&self.pool)
        .await
        .unwrap()
        .last_insert_rowid();

        let id = sqlx::query("INSERT INTO tracks (album_id, filename) VALUES (?, ?)")
            .bind(album_id)
            .bind(filename)
            .execute(&self.pool)
            .await
            .unwrap()
            .last_insert_rowid();

        TrackId::new(id).unwrap()
    }
}

/// One file part of a multipart body
pub struct FilePart<'a> {
    pub filename: &'a str,
    pub content_type: &'a str,
    pub body: &'a str,
}

/// Encode file parts as a `multipart/form-data` body
pub fn multipart_body(parts: &[FilePart<'_>]) -> String {
    let mut body = String::new();
    for part in parts {
        body.push_str(&format!("--{BOUNDARY}\r\n"));
        body.push_str(&format!(
            "Content-Disposition: form-data; name=\"playlist-files\"; filename=\"{}\"\r\n",
            part.filename
        ));
        body.push_str(&format!("Content-Type: {}\r\n\r\n", part.content_type));
        body.push_str(part.body);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body
}

/// Build an authenticated upload request
pub fn upload_request(token: &str, body: String) -> Request<Body> {
    Request::builder()
        .uri("/api/playlists/upload")
        .method("POST")
        .header("authorization", format!("Bearer {token}"))
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Build an authenticated request without a body
pub fn authed_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
