/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - A router over a seeded in-memory store
/// - Product catalog fixtures (working, failing with a storage error or a timeout)
/// - Request builders for anonymous and logged-in visitors
/// - Response body and cookie helpers
///
/// No database is needed: the product catalog is replaced through the
/// `ProductCatalog` port.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use std::sync::Arc;
use storefront_api::{
    app::{build_router, AppState},
    config::Config,
};
use storefront_shared::{
    catalog::{FixtureProductCatalog, ProductCatalog},
    models::product::Product,
    store::{Store, StoreError},
};
use tower::ServiceExt;

/// Cookie header sent by a logged-in visitor
pub const SESSION_COOKIE_HEADER: &str = "token=123";

/// Test context containing the router and its state
pub struct TestContext {
    pub state: AppState,
    pub app: Router,
}

impl TestContext {
    /// Creates a context with the seeded store and two fixture products
    pub fn new() -> Self {
        Self::with_catalog(Arc::new(FixtureProductCatalog::new(sample_products())))
    }

    /// Creates a context with a custom product catalog
    pub fn with_catalog(catalog: Arc<dyn ProductCatalog>) -> Self {
        let config = Config::from_lookup(|_| None).expect("default config");
        let state = AppState::new(Store::seeded(), catalog, config);
        let app = build_router(state.clone());

        TestContext { state, app }
    }

    /// Sends a request through the router
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.expect("router is infallible")
    }

    /// Sends a GET request
    pub async fn get(&self, uri: &str, accept: Option<&str>, logged_in: bool) -> Response<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(accept) = accept {
            builder = builder.header(header::ACCEPT, accept);
        }
        if logged_in {
            builder = builder.header(header::COOKIE, SESSION_COOKIE_HEADER);
        }

        self.send(builder.body(Body::empty()).unwrap()).await
    }

    /// Sends a url-encoded form POST
    pub async fn post_form(
        &self,
        uri: &str,
        form: &str,
        accept: Option<&str>,
        logged_in: bool,
    ) -> Response<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(accept) = accept {
            builder = builder.header(header::ACCEPT, accept);
        }
        if logged_in {
            builder = builder.header(header::COOKIE, SESSION_COOKIE_HEADER);
        }

        self.send(builder.body(Body::from(form.to_string())).unwrap())
            .await
    }
}

/// Two products used by the default fixture catalog
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Coffee Mug".to_string(),
            description: "Ceramic, 350 ml".to_string(),
            price: 9.5,
            quantity: 12,
        },
        Product {
            id: 2,
            name: "Tea Pot".to_string(),
            description: "Cast iron".to_string(),
            price: 34.0,
            quantity: 3,
        },
    ]
}

/// Catalog whose every call fails the same way
pub struct FailingCatalog {
    timeout: bool,
}

impl FailingCatalog {
    /// Fails with a storage error
    pub fn storage() -> Self {
        FailingCatalog { timeout: false }
    }

    /// Fails with a timeout
    pub fn timeout() -> Self {
        FailingCatalog { timeout: true }
    }

    fn error(&self) -> StoreError {
        if self.timeout {
            StoreError::Timeout(5)
        } else {
            StoreError::Storage("relation \"products\" does not exist".to_string())
        }
    }
}

#[async_trait]
impl ProductCatalog for FailingCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        Err(self.error())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(self.error())
    }
}

/// Reads a response body as UTF-8 text
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Returns the `Set-Cookie` header for the session cookie, if any
pub fn session_set_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("token="))
        .map(str::to_string)
}
