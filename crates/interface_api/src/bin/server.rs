//! Benefit Illustration - API Server Binary
//!
//! This binary starts the HTTP API server for the benefit illustration service.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration (in-memory store, port 5000)
//! cargo run --bin illustration-api
//!
//! # Run against PostgreSQL
//! API_PORT=5000 DATABASE_URL=postgres://... cargo run --bin illustration-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 5000)
//! * `API_JWT_SECRET` - JWT signing secret
//! * `API_JWT_EXPIRATION_SECS` - Lifetime of tokens issued at login (default: 3600)
//! * `API_PASSWORD_HASH_COST` - bcrypt work factor (default: 12)
//! * `API_DATABASE_URL` / `DATABASE_URL` - PostgreSQL connection string; in-memory store when unset
//! * `API_DATABASE_MAX_CONNECTIONS` - Pool size (default: 10)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_REFERENCE_DATE` - Fixed `YYYY-MM-DD` date ages are computed against (default: today)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use domain_policy::ports::memory::InMemoryIllustrationRepository;
use domain_policy::{IllustrationRepository, IllustrationService};
use domain_user::ports::memory::InMemoryUserRepository;
use domain_user::{UserRepository, UserService};
use infra_db::{
    create_pool, run_migrations, DatabaseConfig, PgIllustrationRepository, PgUserRepository,
};
use interface_api::{config::ApiConfig, create_router};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, connects the user and
/// illustration stores, and starts the HTTP server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("failed to load configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        reference_date = ?config.reference_date,
        "Starting Benefit Illustration API Server"
    );

    let clock = config.clock().context("invalid API_REFERENCE_DATE")?;
    let stores = connect_stores(&config).await?;
    let service = IllustrationService::new(stores.illustrations, clock);
    let users = UserService::new(stores.users, config.password_hash_cost);

    let app = create_router(service, users, config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

struct Stores {
    illustrations: Arc<dyn IllustrationRepository>,
    users: Arc<dyn UserRepository>,
}

/// Picks the stores: PostgreSQL when a URL is configured, otherwise
/// process-local maps.
async fn connect_stores(config: &ApiConfig) -> anyhow::Result<Stores> {
    match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let database = DatabaseConfig::new(url).max_connections(config.database_max_connections);
            let pool = create_pool(database)
                .await
                .context("failed to connect to database")?;
            run_migrations(&pool).await.context("failed to run migrations")?;
            Ok(Stores {
                illustrations: Arc::new(PgIllustrationRepository::new(pool.clone())),
                users: Arc::new(PgUserRepository::new(pool)),
            })
        }
        None => {
            tracing::warn!("No database configured; users and illustrations are kept in memory");
            Ok(Stores {
                illustrations: Arc::new(InMemoryIllustrationRepository::new()),
                users: Arc::new(InMemoryUserRepository::new()),
            })
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// Lets in-flight requests complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
