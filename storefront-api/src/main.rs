//! # Storefront API Server
//!
//! Serves the storefront: HTML (or JSON/XML) pages for articles and the
//! product catalog, plus a cookie-based login and registration flow.
//!
//! ## Usage
//!
//! ```bash
//! PG_HOST=localhost PG_DB_STORE=store PG_USER=store PG_PASS=secret \
//!     cargo run -p storefront-api
//! ```

use std::sync::Arc;
use storefront_api::{
    app::{build_router, AppState},
    config::Config,
};
use storefront_shared::{
    catalog::PgProductCatalog,
    db::pool::{close_pool, create_pool, health_check},
    store::Store,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "storefront_api=debug,storefront_shared=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Storefront API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    // The pool connects lazily; an unreachable database is logged, not fatal
    let pool = create_pool(&config.database);
    if let Err(e) = health_check(&pool).await {
        tracing::warn!("Product database is unavailable: {}", e);
    }

    let catalog = PgProductCatalog::new(pool.clone(), config.database.query_timeout());
    let address = config.bind_address();
    let state = AppState::new(Store::seeded(), Arc::new(catalog), config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Server listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown signal received, exiting...");
    close_pool(pool).await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
