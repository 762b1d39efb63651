use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "article_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ArticleCategory {
    News,
    Article,
    Announcement,
}

impl std::fmt::Display for ArticleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArticleCategory::News => write!(f, "news"),
            ArticleCategory::Article => write!(f, "article"),
            ArticleCategory::Announcement => write!(f, "announcement"),
        }
    }
}

/// Database model for news article
#[derive(Debug, Clone, FromRow)]
pub struct NewsArticle {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub author: String,
    pub category: ArticleCategory,
    pub is_published: bool,
    /// Set exactly when the article is created as published
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
