/// Article model
///
/// Articles live only in process memory. They are created through
/// [`ArticleStore::create`](crate::store::articles::ArticleStore::create)
/// and never change afterwards.

use serde::{Deserialize, Serialize};

/// A short text article
///
/// Serializes as `article` so XML representations get a lowercase element
/// name; JSON ignores the container name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "article")]
pub struct Article {
    /// Identifier, assigned as the article count plus one at creation time
    pub id: u64,

    /// Title shown in listings and as the page title
    pub title: String,

    /// Body text
    pub content: String,
}

impl Article {
    /// Builds an article record
    pub fn new(id: u64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_json_shape() {
        let article = Article::new(3, "Title", "Body");
        let json = serde_json::to_value(&article).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["title"], "Title");
        assert_eq!(json["content"], "Body");
    }
}
