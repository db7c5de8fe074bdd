//! HTTP server command for the album API

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use albumctl_server::db::{create_pool_with_options, pool::DEFAULT_MAX_CONNECTIONS};
use albumctl_server::{run_server, AppState, PgAlbumStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Database URL, e.g. postgres://user@localhost/db_albums
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    tracing::info!("Starting albumctl server on {}", args.bind);

    // Connecting eagerly: an unreachable database aborts startup here
    let pool = create_pool_with_options(&database_url, args.max_connections)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    let store = PgAlbumStore::new(pool);
    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    let served = run_server(AppState::new(Arc::new(store.clone())), config).await;

    store.close().await;
    tracing::info!("Database pool closed");

    served.context("Server error")
}
