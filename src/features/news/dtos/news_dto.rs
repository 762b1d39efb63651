use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::news::models::{ArticleCategory, NewsArticle};

/// Query params for listing articles
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListNewsQuery {
    /// `true` for published only, `false` for drafts only, omit for all
    pub published: Option<bool>,
}

/// Request DTO for creating an article
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateNewsArticleDto {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    #[validate(length(max = 500, message = "Excerpt must not exceed 500 characters"))]
    pub excerpt: Option<String>,

    #[validate(url(message = "Featured image must be a valid URL"))]
    pub featured_image: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Author must be 1-255 characters"))]
    pub author: String,

    pub category: ArticleCategory,

    /// Publish immediately; defaults to a draft
    #[serde(default)]
    pub is_published: bool,
}

/// Response DTO for news article
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsArticleResponseDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub author: String,
    pub category: ArticleCategory,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NewsArticle> for NewsArticleResponseDto {
    fn from(a: NewsArticle) -> Self {
        Self {
            id: a.id,
            title: a.title,
            content: a.content,
            excerpt: a.excerpt,
            featured_image: a.featured_image,
            author: a.author,
            category: a.category,
            is_published: a.is_published,
            published_at: a.published_at,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}
