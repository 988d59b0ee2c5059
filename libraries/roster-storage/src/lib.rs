//! Roster Storage
//!
//! PostgreSQL persistence layer for Roster user records.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: `users` owns its queries as free functions over a `PgPool`
//! - **Store Trait**: [`PgStorage`] adapts the slice to `roster_core::UserStore`
//! - **Embedded Migrations**: schema ships inside the binary
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_storage::{create_pool, run_migrations, PgStorage, PoolSettings};
//! use roster_core::UserStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("postgres://localhost/roster", &PoolSettings::default()).await?;
//! run_migrations(&pool).await?;
//!
//! let storage = PgStorage::new(pool);
//! let users = storage.list_users().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod users;

pub use context::PgStorage;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connection pool tuning
#[derive(Debug, Clone)]
pub struct PoolSettings {
    /// Upper bound on open connections
    pub max_connections: u32,

    /// How long a request waits for a free connection
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &PgPool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

/// Create a new PostgreSQL pool
///
/// Opens one connection eagerly so an unreachable database is reported at
/// startup rather than on the first request.
///
/// # Errors
///
/// Returns an error if the URL is empty or the connection fails
pub async fn create_pool(database_url: &str, settings: &PoolSettings) -> Result<PgPool, StorageError> {
    if database_url.trim().is_empty() {
        return Err(StorageError::InvalidUrl("database url is empty".to_string()));
    }

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(database_url)
        .await
        .map_err(StorageError::Connection)?;

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .map_err(StorageError::Connection)?;

    tracing::info!(
        max_connections = settings.max_connections,
        "Database pool created"
    );

    Ok(pool)
}
