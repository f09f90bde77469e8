//! API server configuration.

use std::str::FromStr;

/// Which conversation store backs the API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL via `DATABASE_URL`.
    #[default]
    Postgres,
    /// Process-local, lost on restart.
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Postgres => "postgres",
            StoreBackend::Memory => "memory",
        }
    }
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(StoreBackend::Postgres),
            "memory" | "mem" => Ok(StoreBackend::Memory),
            other => Err(format!(
                "unknown store backend '{other}' (expected 'postgres' or 'memory')"
            )),
        }
    }
}

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8000").
    pub bind_addr: String,
    /// PostgreSQL connection URL. `None` leaves the store unconfigured.
    pub database_url: Option<String>,
    /// Database name, reported by the diagnostic endpoint.
    pub database_name: Option<String>,
    /// Maximum number of pooled database connections.
    pub max_connections: u32,
    /// Conversation store backend.
    pub store: StoreBackend,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".into(),
            database_url: None,
            database_name: None,
            max_connections: 5,
            store: StoreBackend::Postgres,
        }
    }
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                   | Default                          |
    /// |----------------------------|----------------------------------|
    /// | `BIND_ADDR`                | `127.0.0.1:8000`, or `0.0.0.0:$PORT` |
    /// | `DATABASE_URL`             | unset (store not configured)     |
    /// | `DATABASE_NAME`            | unset                            |
    /// | `DATABASE_MAX_CONNECTIONS` | `5`                              |
    /// | `PARLOR_STORE`             | `postgres`                       |
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let bind_addr = std::env::var("BIND_ADDR").ok().unwrap_or_else(|| {
            match std::env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
                Some(port) => format!("0.0.0.0:{port}"),
                None => defaults.bind_addr.clone(),
            }
        });
        Self {
            bind_addr,
            database_url: non_empty_var("DATABASE_URL"),
            database_name: non_empty_var("DATABASE_NAME"),
            max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_connections),
            store: std::env::var("PARLOR_STORE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.store),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
