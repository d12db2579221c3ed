use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use villa_core::error::CoreError;
use villa_core::repository::RepositoryError;

use crate::response::ApiResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`RepositoryError`] for storage
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`] so
/// every failure leaves the handler as an [`ApiResponse`] envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `villa_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure raised by the storage backend.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A domain error whose envelope status is also sent as the transport
    /// status, for outcomes that are otherwise reported in-band.
    #[error(transparent)]
    Strict(CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// `(transport status, envelope status)` for this error.
    ///
    /// Routing, input and auth outcomes use a matching transport status.
    /// Conflicts and anything raised while talking to storage are reported
    /// in-band: transport 200 with `isSuccess = false`.
    pub fn statuses(&self) -> (StatusCode, StatusCode) {
        match self {
            AppError::Core(core) => core_statuses(core),
            AppError::Strict(core) => {
                let (_, status) = core_statuses(core);
                (status, status)
            }
            AppError::Repository(repo) => match repo {
                RepositoryError::NotFound { .. } => (StatusCode::OK, StatusCode::NOT_FOUND),
                RepositoryError::AlreadyExists { .. } => (StatusCode::OK, StatusCode::CONFLICT),
                RepositoryError::Storage(_) => (StatusCode::OK, StatusCode::INTERNAL_SERVER_ERROR),
            },
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, StatusCode::BAD_REQUEST),
        }
    }
}

fn core_statuses(core: &CoreError) -> (StatusCode, StatusCode) {
    match core {
        CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, StatusCode::NOT_FOUND),
        CoreError::Validation(_) => (StatusCode::BAD_REQUEST, StatusCode::BAD_REQUEST),
        CoreError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, StatusCode::UNAUTHORIZED),
        CoreError::Forbidden(_) => (StatusCode::FORBIDDEN, StatusCode::FORBIDDEN),
        CoreError::Conflict(_) => (StatusCode::OK, StatusCode::CONFLICT),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (transport, status) = self.statuses();

        if status.is_server_error() {
            tracing::error!(error = %self, "Unexpected failure at handler boundary");
        } else if transport == StatusCode::OK {
            tracing::warn!(error = %self, status = status.as_u16(), "Operation failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let envelope = ApiResponse::<()>::failure(status, self.to_string());
        (transport, Json(envelope)).into_response()
    }
}
