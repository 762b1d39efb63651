use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::news::dtos::{CreateNewsArticleDto, NewsArticleResponseDto};
use crate::features::news::models::NewsArticle;

const ARTICLE_COLUMNS: &str = "id, title, content, excerpt, featured_image, author, category, \
     is_published, published_at, created_at, updated_at";

/// Service for news articles
pub struct NewsService {
    pool: PgPool,
}

impl NewsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List articles newest first, optionally narrowed by published flag
    pub async fn list(&self, published: Option<bool>) -> Result<Vec<NewsArticleResponseDto>> {
        let query = format!(
            r#"
            SELECT {}
            FROM news_articles
            WHERE ($1::boolean IS NULL OR is_published = $1)
            ORDER BY created_at DESC, id DESC
            "#,
            ARTICLE_COLUMNS
        );

        let articles = sqlx::query_as::<_, NewsArticle>(&query)
            .bind(published)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list news articles: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(articles.into_iter().map(|a| a.into()).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<NewsArticleResponseDto>> {
        let query = format!("SELECT {} FROM news_articles WHERE id = $1", ARTICLE_COLUMNS);

        let article = sqlx::query_as::<_, NewsArticle>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get news article by id: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(article.map(|a| a.into()))
    }

    /// Create an article; `published_at` is stamped only when created published
    pub async fn create(&self, dto: CreateNewsArticleDto) -> Result<NewsArticleResponseDto> {
        let query = format!(
            r#"
            INSERT INTO news_articles (
                title, content, excerpt, featured_image, author, category,
                is_published, published_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, CASE WHEN $7 THEN NOW() END)
            RETURNING {}
            "#,
            ARTICLE_COLUMNS
        );

        let article = sqlx::query_as::<_, NewsArticle>(&query)
            .bind(dto.title)
            .bind(dto.content)
            .bind(dto.excerpt)
            .bind(dto.featured_image)
            .bind(dto.author)
            .bind(dto.category)
            .bind(dto.is_published)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create news article: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "News article created: id={}, category={}, published={}",
            article.id,
            article.category,
            article.is_published
        );

        Ok(article.into())
    }
}
