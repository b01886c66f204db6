/// Shared application state
use crate::services::AuthService;
use cadence_core::CatalogStore;
use cadence_playlist_import::{ImportOptions, PlaylistImporter};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogStore>,
    pub auth_service: Arc<AuthService>,
    pub importer: Arc<PlaylistImporter<dyn CatalogStore>>,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        auth_service: Arc<AuthService>,
        import_options: ImportOptions,
    ) -> Self {
        let importer = PlaylistImporter::new(Arc::clone(&catalog), import_options);
        Self {
            catalog,
            auth_service,
            importer: Arc::new(importer),
        }
    }
}
