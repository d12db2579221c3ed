//! Request input extraction shared by the villa number handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::Json;
use villa_core::types::VillaNo;

use crate::error::{AppError, AppResult};

/// The `{id}` path segment parsed into an explicit optional key.
///
/// Non-integer segments are rejected outright with 400. Integers that are not
/// valid villa numbers (zero or negative) become `VillaNoPath(None)` so each
/// handler decides how to treat a missing key.
#[derive(Debug, Clone, Copy)]
pub struct VillaNoPath(pub Option<VillaNo>);

impl VillaNoPath {
    /// The key, or 400 if the path did not carry a valid one.
    pub fn require(self) -> AppResult<VillaNo> {
        self.0
            .ok_or_else(|| AppError::BadRequest("id must be a positive villa number".into()))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for VillaNoPath {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let id: i32 = raw
            .parse()
            .map_err(|_| AppError::BadRequest(format!("id must be an integer, got '{raw}'")))?;

        Ok(VillaNoPath(VillaNo::new(id)))
    }
}

/// A JSON body as extracted by axum, before absence/malformation is handled.
pub type JsonBody<T> = Result<Json<Option<T>>, JsonRejection>;

/// Unwrap a [`JsonBody`], turning a missing, `null` or malformed body into 400.
pub fn require_body<T>(body: JsonBody<T>) -> AppResult<T> {
    match body {
        Ok(Json(Some(dto))) => Ok(dto),
        Ok(Json(None)) => Err(AppError::BadRequest("request body is required".into())),
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
    }
}
