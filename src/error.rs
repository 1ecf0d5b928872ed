use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::api::ApiError;
use crate::views;

/// Failures a page handler can surface to the browser.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("no page at '{0}'")]
    PageNotFound(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Api(ApiError::NotFound(_)) | AppError::PageNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::Api(ApiError::InvalidBase(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Api(ApiError::Status { .. } | ApiError::Transport(_)) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::NOT_FOUND {
            warn!(error = %self, "not found");
        } else {
            error!(error = %self, "request failed");
        }
        (status, Html(views::error_page(status, &self.to_string()))).into_response()
    }
}
