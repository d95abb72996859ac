use crate::{adapters::persistence::SqlitePersistence, infra::db::init_db};

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod setup;

pub async fn sqlite_persistence(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePersistence, error::InfraError> {
    let pool = init_db(database_url, max_connections).await?;
    let persistence = SqlitePersistence::new(pool);
    Ok(persistence)
}
