/// Domain models for the storefront
///
/// # Models
///
/// - `article`: Short text articles kept in memory
/// - `user`: Username/password accounts kept in memory
/// - `product`: Catalog rows read from the external PostgreSQL store
///
/// # Example
///
/// ```
/// use storefront_shared::models::article::Article;
///
/// let article = Article::new(1, "Hello", "First post");
/// assert_eq!(article.id, 1);
/// ```

pub mod article;
pub mod product;
pub mod user;
