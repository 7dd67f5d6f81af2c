// src/config.rs

use dotenvy::dotenv;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub rust_log: String,
    pub db_max_connections: u32,
    /// Upper bound for any single storage call. A hung backend fails the
    /// request instead of pinning it forever.
    pub query_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let listen_addr = env::var("ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let db_max_connections = env::var("DB_MAX_CONNS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let query_timeout_secs = env::var("QUERY_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Self {
            database_url,
            listen_addr,
            rust_log,
            db_max_connections,
            query_timeout: Duration::from_secs(query_timeout_secs),
        }
    }
}
