/// Database layer for the storefront
///
/// Only the product catalog is backed by PostgreSQL; articles and users are
/// held in memory by [`crate::store`].
///
/// # Modules
///
/// - `pool`: Lazy PostgreSQL pool creation, health checks and shutdown

pub mod pool;
