/// Article collection
///
/// Append-only: the only mutation is [`ArticleStore::create`]. Identifiers
/// are the collection length plus one, computed under the write guard, which
/// keeps them unique and strictly increasing in creation order.

use tokio::sync::RwLock;
use tracing::debug;

use super::StoreError;
use crate::models::article::Article;

/// In-memory article list
#[derive(Debug, Default)]
pub struct ArticleStore {
    articles: RwLock<Vec<Article>>,
}

impl ArticleStore {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection holding the two demo articles
    pub fn seeded() -> Self {
        Self {
            articles: RwLock::new(vec![
                Article::new(1, "Article 1", "Article 1 body"),
                Article::new(2, "Article 2", "Article 2 body"),
            ]),
        }
    }

    /// Returns every article in creation order
    pub async fn list(&self) -> Vec<Article> {
        self.articles.read().await.clone()
    }

    /// Returns the number of articles
    pub async fn count(&self) -> usize {
        self.articles.read().await.len()
    }

    /// Looks up an article by identifier
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no article has that identifier.
    pub async fn get(&self, id: u64) -> Result<Article, StoreError> {
        self.articles
            .read()
            .await
            .iter()
            .find(|article| article.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Appends a new article and returns it
    ///
    /// Title and content are stored as given; empty text is accepted.
    pub async fn create(&self, title: impl Into<String>, content: impl Into<String>) -> Article {
        let mut articles = self.articles.write().await;

        let id = articles.len() as u64 + 1;
        let article = Article::new(id, title, content);
        articles.push(article.clone());

        debug!(article_id = id, "Created article");
        article
    }
}
