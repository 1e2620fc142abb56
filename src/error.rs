use crate::models::ApiFailure;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use leptos::logging::error;
use thiserror::Error;

/// Everything an API handler can fail with, mapped onto a status code and
/// the shared failure envelope.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("session error: {0}")]
    Session(String),

    #[error("no signed-in user")]
    Unauthorized,

    #[error("nickname must not be blank")]
    InvalidNickname,
}

impl ApiError {
    /// Short machine-readable code carried in the failure envelope.
    fn code(&self) -> &'static str {
        match self {
            ApiError::Database(_) | ApiError::Session(_) => "internal",
            ApiError::Unauthorized => "unauthorized",
            ApiError::InvalidNickname => "invalid-nickname",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Database(_) | ApiError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::InvalidNickname => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        error!("[API] Request failed: {}", self);
        HttpResponse::build(self.status_code()).json(ApiFailure {
            ok: false,
            error: self.code().to_string(),
        })
    }
}
