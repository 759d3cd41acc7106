// HTTP error responses
use crate::application::builder_service::BuilderError;
use crate::domain::layout::LayoutError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn not_found(what: &str, id: &str) -> Self {
        ApiError::NotFound(format!("{} {} not found", what, id))
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BuilderError> for ApiError {
    fn from(err: BuilderError) -> Self {
        match err {
            BuilderError::Layout(LayoutError::DuplicateWidget(_)) => {
                ApiError::Conflict(err.to_string())
            }
            BuilderError::WidgetNotFound(_) => ApiError::NotFound(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {:#}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_errors_map_to_status() {
        let duplicate: ApiError =
            BuilderError::Layout(LayoutError::DuplicateWidget("w1".to_string())).into();
        assert_eq!(duplicate.status(), StatusCode::CONFLICT);
        assert_eq!(duplicate.to_string(), "widget w1 already exists in dashboard");

        let missing: ApiError = BuilderError::WidgetNotFound("w2".to_string()).into();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_error_is_500() {
        let response = ApiError::from(anyhow::anyhow!("disk full")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
