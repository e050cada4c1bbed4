use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Already exists: {0}")]
    AlreadyExists(String),
    #[error("Store failure: {0}")]
    StoreFailure(#[from] anyhow::Error),
}

/// JSON:API error document
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub errors: Vec<JsonApiError>,
}

/// Single JSON:API error object
#[derive(Serialize, ToSchema)]
pub struct JsonApiError {
    /// HTTP status code as a string
    #[schema(example = "404")]
    pub status: String,
    #[schema(example = "Not Found")]
    pub title: String,
    #[schema(example = "Teacher with id 99 was not found")]
    pub detail: String,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyExists(_) => StatusCode::CONFLICT,
            AppError::StoreFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::AlreadyExists(msg) => msg,
            AppError::StoreFailure(e) => {
                tracing::error!("Store failure: {:?}", e);
                "Internal server error".to_string()
            }
        };

        let body = ErrorResponse {
            errors: vec![JsonApiError {
                status: status.as_u16().to_string(),
                title: status.canonical_reason().unwrap_or("Error").to_string(),
                detail,
            }],
        };

        (status, Json(body)).into_response()
    }
}
