use std::path::PathBuf;

use thiserror::Error;

/// Infrastructure errors that can occur during application startup.
///
/// Display messages never include the database URL; the #[source] chain may.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Database connection failed. Check DATABASE_URL.")]
    DatabaseConnection(#[source] sqlx::Error),

    #[error("Creating the waitlist schema failed")]
    Schema(#[source] sqlx::Error),

    #[error("Cannot create log file {path}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}

impl From<sqlx::Error> for InfraError {
    fn from(e: sqlx::Error) -> Self {
        InfraError::DatabaseConnection(e)
    }
}
