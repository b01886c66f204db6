/// Playlists API routes
use crate::{
    error::{Result, ServerError},
    middleware::AuthenticatedUser,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    Json,
};
use bytes::Bytes;
use cadence_core::types::{Playlist, PlaylistId};
use cadence_playlist_import::{ImportReport, PlaylistUpload};
use serde::Serialize;
use std::io::Cursor;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub created: usize,
    pub message: String,
    pub errors: Vec<String>,
}

impl From<ImportReport> for UploadResponse {
    fn from(report: ImportReport) -> Self {
        Self {
            message: report.summary(),
            created: report.created,
            errors: report.errors,
        }
    }
}

/// POST /api/playlists/upload
/// Import every file part of a multipart body as a playlist owned by the caller
pub async fn upload_playlists(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<UploadResponse>> {
    let uploads = parse_uploads(&headers, body).await.map_err(|e| {
        tracing::warn!("Rejected playlist upload body: {}", e);
        ServerError::BadRequest("couldn't parse multipart".to_string())
    })?;

    tracing::info!(
        "User {} uploaded {} playlist file(s)",
        auth.user_id(),
        uploads.len()
    );

    let report = app_state
        .importer
        .import_batch(auth.user_id(), uploads)
        .await;

    Ok(Json(report.into()))
}

/// Collect the file parts of a multipart body, in the order they were sent.
/// Parts without a filename, or with an empty one (an unused file input),
/// are ordinary form fields and are ignored.
async fn parse_uploads(
    headers: &HeaderMap,
    body: Bytes,
) -> std::result::Result<Vec<PlaylistUpload<Cursor<Bytes>>>, multer::Error> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();
    let boundary = multer::parse_boundary(content_type)?;

    let stream = futures_util::stream::once(async move { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut uploads = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        let filename = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };
        let content_type = field
            .content_type()
            .map(ToString::to_string)
            .unwrap_or_default();
        let data = field.bytes().await?;

        uploads.push(PlaylistUpload::new(filename, content_type, Cursor::new(data)));
    }

    Ok(uploads)
}

/// GET /api/playlists
/// Get all playlists owned by the authenticated user
pub async fn list_playlists(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Vec<Playlist>>> {
    let playlists = app_state
        .catalog
        .get_user_playlists(auth.user_id())
        .await?;
    Ok(Json(playlists))
}

/// GET /api/playlists/:id
/// Get playlist details with items
pub async fn get_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Playlist>> {
    let playlist_id = parse_playlist_id(&id)?;
    let playlist = app_state
        .catalog
        .get_playlist_with_items(playlist_id, auth.user_id())
        .await?
        .ok_or_else(|| ServerError::NotFound("Playlist not found".to_string()))?;

    Ok(Json(playlist))
}

/// DELETE /api/playlists/:id
/// Delete a playlist owned by the authenticated user
pub async fn delete_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<serde_json::Value>> {
    let playlist_id = parse_playlist_id(&id)?;
    app_state
        .catalog
        .delete_playlist(playlist_id, auth.user_id())
        .await?;

    tracing::info!("User {} deleted playlist {}", auth.user_id(), playlist_id);

    Ok(Json(serde_json::json!({ "success": true })))
}

fn parse_playlist_id(id: &str) -> Result<PlaylistId> {
    id.parse::<i64>()
        .map(PlaylistId::new)
        .map_err(|_| ServerError::BadRequest("please provide a valid id".to_string()))
}
