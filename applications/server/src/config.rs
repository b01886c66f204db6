/// Server configuration
use crate::error::{Result, ServerError};
use cadence_playlist_import::{
    ImportOptions, DEFAULT_CONTENT_TYPES, DEFAULT_EXTENSION, DEFAULT_MAX_ERROR_CHARS,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,

    #[serde(default = "default_import")]
    pub import: ImportSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub jwt_secret: String,

    #[serde(default = "default_jwt_expiration_hours")]
    pub jwt_expiration_hours: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImportSettings {
    /// Playlist file extension, stripped from the filename to name the playlist
    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default = "default_max_error_chars")]
    pub max_error_chars: usize,

    /// Upper bound on a whole upload request body
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    #[serde(default)]
    pub abort_batch_on_store_failure: bool,

    #[serde(default = "default_content_types")]
    pub content_types: Vec<String>,
}

impl ImportSettings {
    /// Options handed to the playlist importer
    pub fn options(&self) -> ImportOptions {
        ImportOptions {
            extension: self.extension.clone(),
            content_types: self.content_types.clone(),
            max_error_chars: self.max_error_chars,
            abort_batch_on_store_failure: self.abort_batch_on_store_failure,
        }
    }
}

impl ServerConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("config.toml"))
    }

    /// Load configuration from the given file (if present) and environment
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut settings = config::Config::builder();

        if config_path.exists() {
            settings = settings.add_source(config::File::from(PathBuf::from(config_path)));
        }

        // Override with environment variables, e.g. CADENCE_AUTH__JWT_SECRET
        settings = settings.add_source(
            config::Environment::with_prefix("CADENCE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_secret.is_empty() {
            return Err(ServerError::Config(
                "JWT secret is required (set CADENCE_AUTH__JWT_SECRET)".to_string(),
            ));
        }

        if self.import.extension.is_empty() {
            return Err(ServerError::Config(
                "import.extension must not be empty".to_string(),
            ));
        }

        if self.import.max_error_chars == 0 || self.import.max_upload_bytes == 0 {
            return Err(ServerError::Config(
                "import limits must be greater than zero".to_string(),
            ));
        }

        if self.import.content_types.is_empty() {
            return Err(ServerError::Config(
                "import.content_types must list at least one type".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/cadence.db".to_string()
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        jwt_secret: String::new(),
        jwt_expiration_hours: default_jwt_expiration_hours(),
    }
}

fn default_jwt_expiration_hours() -> u64 {
    24
}

fn default_import() -> ImportSettings {
    ImportSettings {
        extension: default_extension(),
        max_error_chars: default_max_error_chars(),
        max_upload_bytes: default_max_upload_bytes(),
        abort_batch_on_store_failure: false,
        content_types: default_content_types(),
    }
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_max_error_chars() -> usize {
    DEFAULT_MAX_ERROR_CHARS
}

fn default_max_upload_bytes() -> usize {
    24 * 1024
}

fn default_content_types() -> Vec<String> {
    DEFAULT_CONTENT_TYPES.iter().map(ToString::to_string).collect()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            auth: default_auth(),
            import: default_import(),
        }
    }
}
