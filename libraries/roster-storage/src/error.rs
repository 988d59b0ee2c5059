/// Storage-specific errors
use thiserror::Error;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Connection string rejected before dialing
    #[error("Invalid database URL: {0}")]
    InvalidUrl(String),

    /// Database connection error
    #[error("Database connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for roster_core::RosterError {
    fn from(err: StorageError) -> Self {
        Self::storage(err.to_string())
    }
}
