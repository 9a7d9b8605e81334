use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use log_store::LogError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("axum serve: {0}")]
    Serve(std::io::Error),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Log(#[from] LogError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Log(LogError::OffsetNotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Log(_) | ApiError::Bind { .. } | ApiError::Serve(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), format!("{self}\n")).into_response()
    }
}
