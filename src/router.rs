use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::db::ArticleStorage;
use crate::handlers::articles;

/// Request bodies beyond this are rejected before deserialization.
const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Clone)]
pub struct NewsdeskState {
    pub storage: ArticleStorage,
}

impl NewsdeskState {
    pub fn new(storage: ArticleStorage) -> Self {
        Self { storage }
    }
}

pub fn newsdesk_router(state: NewsdeskState) -> Router {
    Router::new()
        .route(
            "/articles/",
            post(articles::create_article).get(articles::list_articles),
        )
        .route(
            "/articles/{id}",
            get(articles::read_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
