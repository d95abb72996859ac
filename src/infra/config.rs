use std::{net::SocketAddr, path::PathBuf};

use env_helpers::get_env_default;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// SQLite URL. The default in-memory database does not survive a restart.
    pub database_url: String,
    pub db_max_connections: u32,
    /// Prebuilt UI served at `/` when the directory exists.
    pub public_dir: PathBuf,
    /// Optional JSON log file next to the console output.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 8000)));
        let bind_addr = with_port_override(bind_addr, std::env::var("PORT").ok().as_deref());

        let database_url: String = get_env_default("DATABASE_URL", "sqlite::memory:".to_string());
        let db_max_connections: u32 = get_env_default("DB_MAX_CONNECTIONS", 5);
        let public_dir: String = get_env_default("PUBLIC_DIR", "public".to_string());
        let log_file: Option<PathBuf> = std::env::var("LOG_FILE").ok().map(PathBuf::from);

        Self {
            bind_addr,
            database_url,
            db_max_connections,
            public_dir: PathBuf::from(public_dir),
            log_file,
        }
    }
}

/// `PORT` wins over the port in `BIND_ADDR`, as most hosting platforms only set `PORT`.
fn with_port_override(mut bind_addr: SocketAddr, port: Option<&str>) -> SocketAddr {
    if let Some(port) = port.and_then(|p| p.trim().parse::<u16>().ok()) {
        bind_addr.set_port(port);
    }
    bind_addr
}
