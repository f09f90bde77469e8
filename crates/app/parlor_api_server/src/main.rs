//! Parlor API server binary.
//!
//! Reads configuration from the environment (and `.env`), lets CLI flags
//! override it, builds the conversation store and serves the HTTP API.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use parlor_api::config::{ApiConfig, StoreBackend};
use parlor_core::conversations::ConversationService;
use parlor_core::store::{
    ConversationStore, MemoryConversationStore, PgConversationStore, UnconfiguredStore,
};
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

/// CLI arguments. Each flag falls back to its environment variable, and
/// anything still unset keeps the value from [`ApiConfig::from_env`].
#[derive(Parser, Debug)]
#[command(name = "parlor_api_server", about = "Parlor chat API server")]
struct Args {
    /// Address to listen on (e.g. 0.0.0.0:8000).
    #[arg(long, env = "BIND_ADDR")]
    bind_addr: Option<String>,

    /// PostgreSQL connection URL.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Maximum number of database connections in the pool.
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS")]
    max_connections: Option<u32>,

    /// Conversation store backend: `postgres` or `memory`.
    #[arg(long, env = "PARLOR_STORE")]
    store: Option<StoreBackend>,
}

impl Args {
    fn apply(self, mut config: ApiConfig) -> ApiConfig {
        if let Some(bind_addr) = self.bind_addr {
            config.bind_addr = bind_addr;
        }
        if let Some(url) = self.database_url.filter(|u| !u.trim().is_empty()) {
            config.database_url = Some(url);
        }
        if let Some(max) = self.max_connections {
            config.max_connections = max;
        }
        if let Some(store) = self.store {
            config.store = store;
        }
        config
    }
}

/// Build the store selected by `config`.
///
/// The Postgres pool connects lazily, so an unreachable database does not
/// stop the server; requests report it as unavailable instead. Migrations
/// are attempted here and retried by the store until one succeeds.
async fn build_store(
    config: &ApiConfig,
) -> Result<Arc<dyn ConversationStore>, Box<dyn std::error::Error>> {
    match (config.store, &config.database_url) {
        (StoreBackend::Memory, _) => {
            info!("using in-memory conversation store");
            Ok(Arc::new(MemoryConversationStore::new()))
        }
        (StoreBackend::Postgres, None) => {
            warn!("DATABASE_URL not set; conversation endpoints will report the database as unavailable");
            Ok(Arc::new(UnconfiguredStore))
        }
        (StoreBackend::Postgres, Some(url)) => {
            info!(
                max_connections = config.max_connections,
                "configuring connection pool"
            );
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .acquire_timeout(Duration::from_secs(5))
                .connect_lazy(url)?;

            let store = PgConversationStore::new(pool);
            if let Err(e) = store.ensure_schema().await {
                warn!("database migrations failed, will retry on first request: {e}");
            }

            Ok(Arc::new(store))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,parlor_api=debug,parlor_core=debug")
            }),
        )
        .init();

    let config = Args::parse().apply(ApiConfig::from_env());

    info!(
        bind_addr = %config.bind_addr,
        store = %config.store,
        database_configured = config.database_url.is_some(),
        "starting parlor_api_server"
    );

    let store = build_store(&config).await?;
    let state = parlor_api::AppState {
        conversations: ConversationService::new(store),
        config: config.clone(),
    };
    let app = parlor_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn flags_fall_back_to_environment_variables() {
        let cmd = Args::command();
        let env_of = |id: &str| {
            cmd.get_arguments()
                .find(|a| a.get_id() == id)
                .and_then(|a| a.get_env())
                .map(OsStr::to_os_string)
        };
        assert_eq!(env_of("bind_addr").as_deref(), Some(OsStr::new("BIND_ADDR")));
        assert_eq!(
            env_of("database_url").as_deref(),
            Some(OsStr::new("DATABASE_URL"))
        );
        assert_eq!(
            env_of("max_connections").as_deref(),
            Some(OsStr::new("DATABASE_MAX_CONNECTIONS"))
        );
        assert_eq!(env_of("store").as_deref(), Some(OsStr::new("PARLOR_STORE")));
    }

    #[test]
    fn flags_override_environment_config() {
        let args = Args::parse_from([
            "parlor_api_server",
            "--bind-addr",
            "0.0.0.0:9000",
            "--store",
            "memory",
        ]);
        let config = args.apply(ApiConfig::default());
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.store, StoreBackend::Memory);
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn unset_flags_keep_base_config() {
        let base = ApiConfig {
            database_url: Some("postgres://db/parlor".into()),
            ..ApiConfig::default()
        };
        let config = Args::parse_from(["parlor_api_server"]).apply(base);
        assert_eq!(config.database_url.as_deref(), Some("postgres://db/parlor"));
        assert_eq!(config.store, StoreBackend::Postgres);
    }

    #[tokio::test]
    async fn postgres_without_url_builds_unconfigured_store() {
        let store = build_store(&ApiConfig::default()).await.expect("build");
        assert!(!store.status().await.configured);
    }

    #[tokio::test]
    async fn unreachable_database_still_builds_store() {
        let config = ApiConfig {
            database_url: Some("postgres://parlor@127.0.0.1:1/parlor".into()),
            max_connections: 1,
            ..ApiConfig::default()
        };
        let store = build_store(&config).await.expect("build");
        let service = ConversationService::new(store);
        assert!(matches!(
            service.list().await,
            Err(parlor_core::conversations::ConversationError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn memory_backend_builds_working_store() {
        let config = ApiConfig {
            store: StoreBackend::Memory,
            ..ApiConfig::default()
        };
        let store = build_store(&config).await.expect("build");
        assert!(store.status().await.connected);
    }
}
