//! Error types for the watchlist service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Watchlist Error Enum ==
/// Unified error type for the watchlist service.
///
/// Every variant is a recoverable condition reported back to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WatchlistError {
    /// Movie id is malformed or negative
    #[error("Invalid movie id: {0}")]
    InvalidId(String),

    /// Movie is already on the watchlist
    #[error("Movie with ID {0} already exists in the watchlist")]
    DuplicateEntry(u64),

    /// Movie is not on the watchlist
    #[error("Movie with ID {0} not found in the watchlist")]
    NotInWatchlist(u64),

    /// Read or removal attempted on an empty watchlist
    #[error("Watchlist is empty")]
    EmptyWatchlist,

    /// Movie repository has no record for the id
    #[error("Movie ID {0} not found in database")]
    NotFound(u64),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WatchlistError {
    /// HTTP status reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WatchlistError::InvalidId(_) | WatchlistError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            WatchlistError::DuplicateEntry(_) => StatusCode::CONFLICT,
            WatchlistError::NotInWatchlist(_)
            | WatchlistError::EmptyWatchlist
            | WatchlistError::NotFound(_) => StatusCode::NOT_FOUND,
            WatchlistError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for WatchlistError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the watchlist service.
pub type Result<T> = std::result::Result<T, WatchlistError>;
