use axum::extract::rejection::JsonRejection;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum NewsdeskError {
    #[error("article {0} not found")]
    ArticleNotFound(i64),

    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("field `{0}` must be non-empty")]
    EmptyField(&'static str),

    #[error("database error: {0}")]
    Database(#[from] SqlxError),
}

impl IntoResponse for NewsdeskError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            NewsdeskError::ArticleNotFound(_) => {
                let body = ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: "Article not found.".to_string(),
                };
                (StatusCode::NOT_FOUND, body)
            }
            NewsdeskError::InvalidBody(rejection) => {
                let body = ApiErrorBody {
                    code: "INVALID_BODY".to_string(),
                    message: rejection.body_text(),
                };
                (StatusCode::UNPROCESSABLE_ENTITY, body)
            }
            NewsdeskError::EmptyField(field) => {
                let body = ApiErrorBody {
                    code: "INVALID_BODY".to_string(),
                    message: format!("Field `{field}` must be non-empty."),
                };
                (StatusCode::UNPROCESSABLE_ENTITY, body)
            }
            NewsdeskError::Database(_) => {
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
