//! Import orchestration - validation, line resolution and materialization per file,
//! aggregation per batch

use crate::{
    error::ImportError, line_filter, materializer, resolver, truncate_message, validator,
    FileOutcome, ImportOptions, ImportReport, PlaylistUpload,
};
use cadence_core::{
    types::{CatalogItemRef, UserId},
    CatalogStore,
};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Playlist import orchestrator
pub struct PlaylistImporter<S: ?Sized> {
    store: Arc<S>,
    options: ImportOptions,
}

/// How scanning a file ended when it did not reach the end of the stream
enum ScanAbort {
    Read(ImportError),
    Store(ImportError),
}

impl<S> PlaylistImporter<S>
where
    S: CatalogStore + ?Sized,
{
    /// Create a new playlist importer
    pub fn new(store: Arc<S>, options: ImportOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Import every upload of a batch, in the order given.
    ///
    /// A malformed file never fails the batch. When the store fails and
    /// `abort_batch_on_store_failure` is set, the remaining files are reported
    /// as skipped instead of being processed.
    pub async fn import_batch<R, I>(&self, owner_id: UserId, uploads: I) -> ImportReport
    where
        R: AsyncBufRead + Unpin,
        I: IntoIterator<Item = PlaylistUpload<R>>,
    {
        let mut report = ImportReport::default();
        let mut uploads = uploads.into_iter();

        for upload in uploads.by_ref() {
            let outcome = self.import_file(owner_id, upload).await;
            let stop = outcome.store_failed && self.options.abort_batch_on_store_failure;
            report.record(outcome);
            if stop {
                break;
            }
        }

        for skipped in uploads {
            tracing::warn!("Skipping {:?} after storage failure", skipped.filename);
            report.record_error(
                &format!("skipped {:?}: import aborted", skipped.filename),
                self.options.max_error_chars,
            );
        }

        tracing::info!(
            "Playlist import for user {} finished: {} created, {} error(s)",
            owner_id,
            report.created,
            report.errors.len()
        );

        report
    }

    /// Import a single upload.
    ///
    /// Unmatched lines are reported and skipped. A read error or store failure
    /// aborts the file: nothing is saved and the file counts as not created.
    pub async fn import_file<R>(&self, owner_id: UserId, upload: PlaylistUpload<R>) -> FileOutcome
    where
        R: AsyncBufRead + Unpin,
    {
        let PlaylistUpload {
            filename,
            content_type,
            reader,
        } = upload;

        let name = match validator::validate_upload(&filename, &content_type, &self.options) {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!("Rejected playlist upload {:?}: {}", filename, e);
                return FileOutcome::rejected(filename, self.bounded(&e));
            }
        };

        let mut errors = Vec::new();
        let items = match self.scan(&filename, reader, &mut errors).await {
            Ok(items) => items,
            Err(ScanAbort::Read(e)) => {
                tracing::warn!("Aborted playlist upload {:?}: {}", filename, e);
                errors.push(self.bounded(&e));
                return FileOutcome {
                    filename,
                    playlist: None,
                    errors,
                    store_failed: false,
                };
            }
            Err(ScanAbort::Store(e)) => {
                tracing::error!("Catalog lookup failed for {:?}: {}", filename, e);
                errors.push(self.bounded(&e));
                return FileOutcome {
                    filename,
                    playlist: None,
                    errors,
                    store_failed: true,
                };
            }
        };

        match materializer::materialize(self.store.as_ref(), owner_id, &name, &items).await {
            Ok(playlist) => FileOutcome {
                filename,
                playlist: Some(playlist),
                errors,
                store_failed: false,
            },
            Err(e) => {
                tracing::error!("Failed to save playlist from {:?}: {}", filename, e);
                errors.push(self.bounded(&e));
                FileOutcome {
                    filename,
                    playlist: None,
                    errors,
                    store_failed: true,
                }
            }
        }
    }

    /// Resolve every candidate line, in order. Unmatched lines go to `errors`.
    async fn scan<R>(
        &self,
        filename: &str,
        reader: R,
        errors: &mut Vec<String>,
    ) -> Result<Vec<CatalogItemRef>, ScanAbort>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut items = Vec::new();
        let mut lines = reader.lines();

        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(source) => {
                    return Err(ScanAbort::Read(ImportError::Scan {
                        filename: filename.to_string(),
                        source,
                    }));
                }
            };

            let Some(path) = line_filter::candidate_path(&line) else {
                continue;
            };

            match resolver::resolve_path(self.store.as_ref(), path).await {
                Ok(item) => {
                    tracing::debug!("Matched {:?} to {}", path, item);
                    items.push(item);
                }
                Err(e) if e.is_systemic() => return Err(ScanAbort::Store(e)),
                Err(e) => {
                    tracing::debug!("{}", e);
                    errors.push(self.bounded(&e));
                }
            }
        }

        Ok(items)
    }

    fn bounded(&self, error: &ImportError) -> String {
        truncate_message(&error.to_string(), self.options.max_error_chars)
    }
}
