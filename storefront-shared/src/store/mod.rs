/// In-memory storage for articles and users
///
/// The [`Store`] owns both collections. It is created once at startup and
/// shared with request handlers through `Arc`; there is no global state.
/// Each collection guards its own data with a `tokio::sync::RwLock`, so
/// lookups run concurrently while mutations are exclusive.
///
/// # Example
///
/// ```
/// use storefront_shared::store::Store;
///
/// # async fn example() -> Result<(), storefront_shared::store::StoreError> {
/// let store = Store::seeded();
///
/// let article = store.articles.create("Title", "Body").await;
/// assert_eq!(article.id, 3);
///
/// store.users.register("dave", "hunter2").await?;
/// assert!(store.users.validate_credentials("dave", "hunter2").await);
/// # Ok(())
/// # }
/// ```

pub mod articles;
pub mod users;

use articles::ArticleStore;
use users::UserStore;

/// Errors raised by the storage layer
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No article has the requested identifier
    #[error("Article {0} not found")]
    NotFound(u64),

    /// Registration attempted with a blank password
    #[error("The password can't be empty")]
    EmptyPassword,

    /// Registration attempted with an existing username
    #[error("The username '{0}' isn't available")]
    UsernameTaken(String),

    /// The external product database failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// The external product database did not answer in time
    #[error("Storage query timed out after {0} seconds")]
    Timeout(u64),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

/// Owned in-memory store for all locally held entities
#[derive(Debug, Default)]
pub struct Store {
    /// Article collection
    pub articles: ArticleStore,

    /// User collection
    pub users: UserStore,
}

impl Store {
    /// Creates a store with empty collections
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the demo articles and users
    pub fn seeded() -> Self {
        Self {
            articles: ArticleStore::seeded(),
            users: UserStore::seeded(),
        }
    }
}
