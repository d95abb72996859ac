use std::{str::FromStr, time::Duration};

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing::info;

use crate::infra::error::InfraError;

const WAITLIST_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS waitlist (
        id          TEXT PRIMARY KEY,
        email       TEXT NOT NULL UNIQUE,
        clinic_name TEXT NOT NULL,
        clinic_size TEXT NOT NULL,
        created_at  TEXT NOT NULL
    )
"#;

/// Opens the pool and makes sure the waitlist table exists.
///
/// `sqlite::memory:` yields one shared-cache database for every connection of
/// the pool. It lives as long as one connection stays open, so the pool keeps a
/// connection forever.
pub async fn init_db(database_url: &str, max_connections: u32) -> Result<SqlitePool, InfraError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await?;

    info!("Connected to database!");

    create_schema(&pool).await.map_err(InfraError::Schema)?;
    Ok(pool)
}

pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(WAITLIST_SCHEMA).execute(pool).await?;
    Ok(())
}
