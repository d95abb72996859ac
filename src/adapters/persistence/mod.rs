use std::sync::Arc;

use sqlx::SqlitePool;
use tokio::sync::Mutex;

use crate::app_error::AppError;

pub mod waitlist;

/// SQLite-backed storage handle. Cheap to clone; clones share the pool and the write lock.
#[derive(Clone)]
pub struct SqlitePersistence {
    pool: SqlitePool,
    /// Held for the whole id-generation + insert sequence so writers never interleave.
    write_lock: Arc<Mutex<()>>,
}

impl SqlitePersistence {
    pub fn new(pool: SqlitePool) -> Self {
        SqlitePersistence {
            pool,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        // Log the actual error for debugging, but don't expose details
        tracing::error!(error = ?err, "Database error");
        AppError::Database("Database operation failed".into())
    }
}
