use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::news::dtos::{CreateNewsArticleDto, ListNewsQuery, NewsArticleResponseDto};
use crate::features::news::services::NewsService;
use crate::shared::types::ApiResponse;

/// List news articles, newest first
#[utoipa::path(
    get,
    path = "/api/news",
    params(ListNewsQuery),
    responses(
        (status = 200, description = "List of articles", body = ApiResponse<Vec<NewsArticleResponseDto>>),
        (status = 400, description = "Invalid filter")
    ),
    tag = "news"
)]
pub async fn list_news(
    State(service): State<Arc<NewsService>>,
    AppQuery(query): AppQuery<ListNewsQuery>,
) -> Result<Json<ApiResponse<Vec<NewsArticleResponseDto>>>> {
    let articles = service.list(query.published).await?;
    Ok(Json(ApiResponse::list(articles)))
}

/// Get article by ID
#[utoipa::path(
    get,
    path = "/api/news/{id}",
    params(
        ("id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Article found", body = ApiResponse<NewsArticleResponseDto>),
        (status = 404, description = "Article not found")
    ),
    tag = "news"
)]
pub async fn get_news_article(
    State(service): State<Arc<NewsService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<NewsArticleResponseDto>>> {
    let article = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("News article {} not found", id)))?;
    Ok(Json(ApiResponse::success(Some(article), None, None)))
}

/// Create a new article
#[utoipa::path(
    post,
    path = "/api/news",
    request_body = CreateNewsArticleDto,
    responses(
        (status = 201, description = "Article created", body = ApiResponse<NewsArticleResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "news"
)]
pub async fn create_news_article(
    State(service): State<Arc<NewsService>>,
    AppJson(dto): AppJson<CreateNewsArticleDto>,
) -> Result<(StatusCode, Json<ApiResponse<NewsArticleResponseDto>>)> {
    dto.validate()?;

    let article = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(article),
            Some("Artikel berhasil disimpan.".to_string()),
            None,
        )),
    ))
}
