use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lexis_core::error::LexisError;

use crate::models::ErrorResponse;

/// Error returned by route handlers, rendered as `{"error": ...}`
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LexisError> for ApiError {
    fn from(e: LexisError) -> Self {
        if e.is_client_error() {
            ApiError::BadRequest(e.to_string())
        } else {
            ApiError::Internal(e.to_string())
        }
    }
}

// Malformed JSON, wrong content type and type mismatches are all the client's fault
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::BadRequest(msg) => tracing::warn!("rejected request: {msg}"),
            ApiError::Internal(msg) => tracing::error!("request failed: {msg}"),
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

#[cfg(test)]
mod tests {
    use lexis_core::types::UnknownDirection;

    use super::*;

    #[test]
    fn test_lexis_errors_map_to_status() {
        let err: ApiError = LexisError::invalid_input("text is required").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err: ApiError = LexisError::from(UnknownDirection("sideways".into())).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("sideways"));

        let err: ApiError = LexisError::Load(lexis_core::dictionary::LoadError::ParseError(
            "bad".into(),
        ))
        .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
