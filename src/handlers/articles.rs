use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::db::models::{Article, ArticleDraft};
use crate::{NewsdeskError, router::NewsdeskState};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

/// POST /articles/ -> inserts a new article and echoes it back with its id.
pub async fn create_article(
    State(state): State<NewsdeskState>,
    body: Result<Json<ArticleDraft>, JsonRejection>,
) -> Result<Json<Article>, NewsdeskError> {
    let Json(draft) = body?;
    draft.validate()?;

    let id = state.storage.insert(&draft).await?;
    info!(id, category = %draft.category, "article created");
    Ok(Json(draft.into_article(id)))
}

/// GET /articles/ -> every article, optionally filtered by `?category=`.
pub async fn list_articles(
    State(state): State<NewsdeskState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Article>>, NewsdeskError> {
    let articles = state.storage.list(query.category.as_deref()).await?;
    Ok(Json(articles))
}

/// GET /articles/{id} -> the matching article, or 404.
pub async fn read_article(
    State(state): State<NewsdeskState>,
    Path(id): Path<i64>,
) -> Result<Json<Article>, NewsdeskError> {
    let article = state
        .storage
        .get_by_id(id)
        .await?
        .ok_or(NewsdeskError::ArticleNotFound(id))?;
    Ok(Json(article))
}

/// PUT /articles/{id} -> overwrites the article; the id in the body (if any)
/// is ignored in favor of the path value. 404 when no such row exists.
pub async fn update_article(
    State(state): State<NewsdeskState>,
    Path(id): Path<i64>,
    body: Result<Json<ArticleDraft>, JsonRejection>,
) -> Result<Json<Article>, NewsdeskError> {
    let Json(draft) = body?;
    draft.validate()?;

    let affected = state.storage.update(id, &draft).await?;
    if affected == 0 {
        return Err(NewsdeskError::ArticleNotFound(id));
    }
    info!(id, "article updated");
    Ok(Json(draft.into_article(id)))
}

/// DELETE /articles/{id} -> removes the article. 404 when no such row exists.
pub async fn delete_article(
    State(state): State<NewsdeskState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, NewsdeskError> {
    let affected = state.storage.delete(id).await?;
    if affected == 0 {
        return Err(NewsdeskError::ArticleNotFound(id));
    }
    info!(id, "article deleted");
    Ok(Json(json!({"message": "Article deleted successfully"})))
}
