//! Playlist import from files on disk

use cadence_core::{types::UserId, CatalogStore};
use cadence_playlist_import::{ImportReport, PlaylistImporter, PlaylistUpload};
use std::path::{Path, PathBuf};
use tokio::{fs::File, io::BufReader};

/// Import local playlist files for `owner_id`, in the order given.
///
/// Files that cannot be opened are reported first; the rest go through
/// [`PlaylistImporter::import_batch`] as one batch.
pub async fn import_paths<S>(
    importer: &PlaylistImporter<S>,
    owner_id: UserId,
    paths: &[PathBuf],
) -> ImportReport
where
    S: CatalogStore + ?Sized,
{
    let max_chars = importer.options().max_error_chars;
    let mut report = ImportReport::default();
    let mut uploads = Vec::with_capacity(paths.len());

    for path in paths {
        let filename = display_name(path);
        match File::open(path).await {
            Ok(file) => {
                // Local files have no declared type; guess one from the extension
                let content_type = mime_guess::from_path(path)
                    .first_or_octet_stream()
                    .to_string();
                uploads.push(PlaylistUpload::new(
                    filename,
                    content_type,
                    BufReader::new(file),
                ));
            }
            Err(e) => {
                tracing::warn!("Couldn't open {}: {}", path.display(), e);
                report.record_error(&format!("couldn't open file {:?}", filename), max_chars);
            }
        }
    }

    let batch = importer.import_batch(owner_id, uploads).await;
    report.created += batch.created;
    report.errors.extend(batch.errors);
    report
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
