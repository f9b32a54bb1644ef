/// Product catalog port
///
/// Handlers read products through the [`ProductCatalog`] trait so the
/// PostgreSQL adapter can be swapped for an in-memory fixture in tests.
///
/// # Example
///
/// ```
/// use storefront_shared::catalog::{FixtureProductCatalog, ProductCatalog};
/// use storefront_shared::models::product::Product;
///
/// # async fn example() -> Result<(), storefront_shared::store::StoreError> {
/// let catalog = FixtureProductCatalog::new(vec![Product {
///     id: 1,
///     name: "Mug".to_string(),
///     description: "Ceramic".to_string(),
///     price: 9.5,
///     quantity: 12,
/// }]);
///
/// let products = catalog.list_products().await?;
/// assert_eq!(products.len(), 1);
/// # Ok(())
/// # }
/// ```

use async_trait::async_trait;
use sqlx::PgPool;
use std::time::Duration;
use tracing::warn;

use crate::db::pool;
use crate::models::product::Product;
use crate::store::StoreError;

/// Read access to the product catalog
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Returns every product, in no particular order
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    /// Checks that the backing store is reachable
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Catalog backed by the external PostgreSQL `products` table
///
/// Every call is bounded by the configured query timeout, which also covers
/// waiting for a pooled connection.
#[derive(Debug, Clone)]
pub struct PgProductCatalog {
    pool: PgPool,
    query_timeout: Duration,
}

impl PgProductCatalog {
    /// Creates a catalog over an existing pool
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Returns the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn timed_out(&self) -> StoreError {
        let seconds = self.query_timeout.as_secs();
        warn!(timeout_seconds = seconds, "Product database query timed out");
        StoreError::Timeout(seconds)
    }
}

#[async_trait]
impl ProductCatalog for PgProductCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let products = tokio::time::timeout(self.query_timeout, Product::list_all(&self.pool))
            .await
            .map_err(|_| self.timed_out())??;

        Ok(products)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        tokio::time::timeout(self.query_timeout, pool::health_check(&self.pool))
            .await
            .map_err(|_| self.timed_out())??;

        Ok(())
    }
}

/// In-memory catalog returning a fixed product list
#[derive(Debug, Default, Clone)]
pub struct FixtureProductCatalog {
    products: Vec<Product>,
}

impl FixtureProductCatalog {
    /// Creates a fixture catalog holding `products`
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductCatalog for FixtureProductCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.clone())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
