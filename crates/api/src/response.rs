//! Uniform response envelope returned by every villa number operation.
//!
//! ```json
//! { "statusCode": 200, "isSuccess": true, "errorMessages": [], "result": { ... } }
//! ```
//!
//! `statusCode` is the business outcome and is independent of the transport
//! status. An envelope on its own is always sent with transport 200; error
//! paths that need a different transport status (400, 401, 403, 404) go
//! through [`crate::error::AppError`], which wraps the same envelope shape.
//! Clients must check `isSuccess` rather than relying on the transport status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Serialize, Serializer};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    #[serde(serialize_with = "serialize_status")]
    pub status_code: StatusCode,
    pub is_success: bool,
    pub error_messages: Vec<String>,
    pub result: Option<T>,
}

fn serialize_status<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}

impl<T: Serialize> ApiResponse<T> {
    /// `200` envelope carrying `result`.
    pub fn ok(result: T) -> Self {
        Self {
            status_code: StatusCode::OK,
            is_success: true,
            error_messages: Vec::new(),
            result: Some(result),
        }
    }

    /// Successful envelope with no payload and a `204` marker.
    pub fn no_content() -> Self {
        Self {
            status_code: StatusCode::NO_CONTENT,
            is_success: true,
            error_messages: Vec::new(),
            result: None,
        }
    }

    /// Failed envelope with a single error message.
    pub fn failure(status_code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code,
            is_success: false,
            error_messages: vec![message.into()],
            result: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
