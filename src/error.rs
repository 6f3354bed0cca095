use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Message returned to callers for every failure that is not a bad request.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("Token error: {0}")]
    TokenAcquisition(String),

    #[error("Search error: {0}")]
    UpstreamSearch(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Short tag used in log lines so token and search failures stay
    /// distinguishable even though callers see the same response.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Validation(_) => "validation",
            Error::TokenAcquisition(_) => "token_acquisition",
            Error::UpstreamSearch(_) => "upstream_search",
            Error::Config(_) => "config",
            Error::Io(_) => "io",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Error::Validation(message) => message,
            other => {
                tracing::error!(kind = other.kind(), "Error: {}", other);
                GENERIC_ERROR_MESSAGE.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = Error::Validation("Missing title or artist parameter".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.kind(), "validation");
    }

    #[test]
    fn upstream_failures_map_to_internal_error() {
        let token = Error::TokenAcquisition("401 Unauthorized".to_string());
        let search = Error::UpstreamSearch("connection reset".to_string());

        assert_eq!(token.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(search.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_ne!(token.kind(), search.kind());
    }
}
