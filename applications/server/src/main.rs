/// Cadence Server - playlist import for the media library
use cadence_core::types::UserId;
use cadence_playlist_import::PlaylistImporter;
use cadence_server::{
    api, config::ServerConfig, import, services::AuthService, state::AppState,
};
use cadence_storage::SqliteCatalog;
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cadence-server")]
#[command(about = "Cadence playlist import server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "CADENCE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Import playlist files from disk for a user
    Import {
        /// Owner of the imported playlists
        #[arg(short, long)]
        user: i64,
        /// Playlist files, imported in the order given
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print a bearer token for a user
    IssueToken {
        #[arg(short, long)]
        user: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "cadence_server=info,cadence_playlist_import=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ServerConfig::load_from(path)?,
        None => ServerConfig::load()?,
    };

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::Import { user, files } => {
            import_files(config, UserId::new(user), files).await?;
        }
        Commands::IssueToken { user } => issue_token(&config, UserId::new(user))?,
    }

    Ok(())
}

async fn open_catalog(config: &ServerConfig) -> anyhow::Result<SqliteCatalog> {
    let pool = cadence_storage::create_pool(&config.storage.database_url).await?;
    cadence_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");
    Ok(SqliteCatalog::new(pool))
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    config.validate()?;

    tracing::info!("Starting Cadence Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let catalog = Arc::new(open_catalog(&config).await?);

    let auth_service = Arc::new(AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
    ));
    tracing::info!("Auth service initialized");

    let app_state = AppState::new(catalog, auth_service, config.import.options());
    let app = api::router(app_state, config.import.max_upload_bytes);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn import_files(
    config: ServerConfig,
    user: UserId,
    files: Vec<PathBuf>,
) -> anyhow::Result<()> {
    let catalog = Arc::new(open_catalog(&config).await?);
    let importer = PlaylistImporter::new(catalog, config.import.options());

    let report = import::import_paths(&importer, user, &files).await;

    println!("{}", report.summary());
    for error in &report.errors {
        println!("  {}", error);
    }

    Ok(())
}

fn issue_token(config: &ServerConfig, user: UserId) -> anyhow::Result<()> {
    config.validate()?;

    let auth_service = AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
    );
    println!("{}", auth_service.create_access_token(user)?);

    Ok(())
}
