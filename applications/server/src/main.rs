/// Roster Server - CRUD HTTP service for user records
use clap::{Parser, Subcommand};
use roster_core::UserStore;
use roster_server::{config::ServerConfig, server};
use roster_storage::PgStorage;
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster user records HTTP service", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./roster.toml when present)
    #[arg(short, long, global = true, env = "ROSTER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Apply database migrations and exit
    Migrate,
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Values from .env act as environment variables, including RUST_LOG
    let dotenv = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster_server=info,roster_storage=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Failed to load .env: {}", e),
    }

    let cli = Cli::parse();

    // Load configuration
    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(&config).await?,
        Commands::Migrate => migrate(&config).await?,
        Commands::ListUsers => list_users(&config).await?,
    }

    Ok(())
}

async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let storage = connect(config).await?;
    tracing::info!("Database connected");

    let store: Arc<dyn UserStore> = Arc::new(storage);
    server::serve(config, store).await
}

async fn migrate(config: &ServerConfig) -> anyhow::Result<()> {
    connect(config).await?;
    tracing::info!("Database is up to date");
    Ok(())
}

async fn list_users(config: &ServerConfig) -> anyhow::Result<()> {
    let storage = connect(config).await?;
    let users = storage.list_users().await?;

    println!("Users:");
    for user in users {
        println!("  {} - {} <{}>", user.id, user.name, user.email);
    }

    Ok(())
}

/// Open the pool, validating reachability, and bring the schema up to date
async fn connect(config: &ServerConfig) -> anyhow::Result<PgStorage> {
    let pool = roster_storage::create_pool(&config.database.url, &config.pool_settings()).await?;
    roster_storage::run_migrations(&pool).await?;
    Ok(PgStorage::new(pool))
}
