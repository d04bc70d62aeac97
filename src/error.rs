use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::db::StoreError;

pub type AppResult<T> = Result<T, AppError>;

/// Realm advertised in the `WWW-Authenticate` challenge.
const AUTH_CHALLENGE: &str = r#"Basic realm="grocery""#;

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or invalid credentials.
    #[error("authentication required")]
    Unauthorized,

    /// Valid identity without a role permitted for the operation.
    #[error("forbidden")]
    Forbidden,

    #[error("{0} not found")]
    NotFound(String),

    /// An ordered item name with no matching inventory entry.
    #[error("{0} is not available")]
    Unavailable(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) | Self::Unavailable(_) => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Unauthorized => {
                let mut response = status.into_response();
                response.headers_mut().insert(
                    header::WWW_AUTHENTICATE,
                    HeaderValue::from_static(AUTH_CHALLENGE),
                );
                response
            }
            // The order endpoint answers in plain text, naming the first missing item.
            Self::Unavailable(_) => (status, self.to_string()).into_response(),
            Self::Store(_) | Self::Internal(_) => {
                // Details stay in the log; the client gets an empty body.
                error!(error = %self, "Request failed");
                status.into_response()
            }
            Self::Forbidden | Self::NotFound(_) => status.into_response(),
        }
    }
}
