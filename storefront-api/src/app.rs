/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use storefront_api::{app::AppState, config::Config};
/// use storefront_shared::{catalog::PgProductCatalog, db::pool::create_pool, store::Store};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(&config.database);
/// let catalog = PgProductCatalog::new(pool, config.database.query_timeout());
/// let state = AppState::new(Store::seeded(), Arc::new(catalog), config);
/// let app = storefront_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{
    config::Config,
    middleware::{
        security::SecurityHeadersLayer,
        session::{require_anonymous, require_authenticated},
    },
};
use axum::{middleware::from_fn, routing::get, Router};
use std::sync::Arc;
use storefront_shared::{catalog::ProductCatalog, store::Store};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// In-memory articles and users
    pub store: Arc<Store>,

    /// Product catalog
    pub products: Arc<dyn ProductCatalog>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(store: Store, products: Arc<dyn ProductCatalog>, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            products,
            config: Arc::new(config),
        }
    }

    /// Whether session cookies should carry the `Secure` flag
    pub fn secure_cookies(&self) -> bool {
        self.config.api.production
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET  /                          # Article list
/// ├── GET  /products                  # Product catalog
/// ├── GET  /health                    # Health check
/// ├── /article/
/// │   ├── GET  /view/:article_id      # Single article
/// │   └── GET|POST /create            # Create article (authenticated)
/// └── /u/
///     ├── GET|POST /login             # Login (anonymous)
///     ├── GET|POST /register          # Register (anonymous)
///     └── GET|POST /logout            # Logout (authenticated)
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Session gates (per route group, 401 on denial)
/// 2. Logging (tower-http TraceLayer)
/// 3. Security headers
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Article routes; creation requires a session
    let article_routes = Router::new()
        .route("/view/:article_id", get(routes::articles::view_article))
        .merge(
            Router::new()
                .route(
                    "/create",
                    get(routes::articles::show_create_form).post(routes::articles::create_article),
                )
                .route_layer(from_fn(require_authenticated)),
        );

    // User routes for visitors without a session
    let anonymous_user_routes = Router::new()
        .route(
            "/login",
            get(routes::users::show_login_form).post(routes::users::login),
        )
        .route(
            "/register",
            get(routes::users::show_registration_form).post(routes::users::register),
        )
        .route_layer(from_fn(require_anonymous));

    // User routes for logged-in visitors
    let authenticated_user_routes = Router::new()
        .route(
            "/logout",
            get(routes::users::logout).post(routes::users::logout),
        )
        .route_layer(from_fn(require_authenticated));

    Router::new()
        .route("/", get(routes::articles::index))
        .route("/products", get(routes::products::list_products))
        .route("/health", get(routes::health::health_check))
        .nest("/article", article_routes)
        .nest("/u", anonymous_user_routes.merge(authenticated_user_routes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SecurityHeadersLayer::new(state.config.api.production))
        .with_state(state)
}
