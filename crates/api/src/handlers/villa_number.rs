//! Handlers for the villa number resource.
//!
//! Every handler follows the same pipeline: an auth extractor admits the caller,
//! inputs are validated, the repository is invoked, and the outcome is
//! returned as an [`ApiResponse`] envelope. Failures leave through
//! [`AppError`], which renders the same envelope shape.

use axum::extract::State;
use axum::Json;
use villa_core::error::CoreError;
use villa_core::repository::{Entity, RepositoryError};
use villa_core::types::VillaNo;
use villa_core::villa_number::{
    VillaNumber, VillaNumberCreateRequest, VillaNumberFilter, VillaNumberUpdateRequest,
    VillaNumberView,
};

use crate::error::{AppError, AppResult};
use crate::extract::{require_body, JsonBody, VillaNoPath};
use crate::middleware::auth::{AuthUser, RequireAdmin};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Fixed payload of the version 2 list endpoint.
pub const V2_LIST_PLACEHOLDER: [&str; 1] = ["val1,val2"];

/// Load a villa number by key, or 404.
async fn find_villa_number(state: &AppState, number: VillaNo) -> AppResult<VillaNumber> {
    state
        .villa_numbers
        .get(&VillaNumberFilter::Number(number))
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: VillaNumber::NAME,
            id: number.into(),
        }))
}

/// Error for a create whose number is already taken.
///
/// Reported in-band (transport 200, envelope 409) unless
/// `strict_conflict_status` is configured, in which case transport is 409.
fn duplicate(state: &AppState, number: VillaNo) -> AppError {
    let conflict = CoreError::Conflict(format!("Villa number {number} already exists"));
    if state.config.strict_conflict_status {
        AppError::Strict(conflict)
    } else {
        AppError::Core(conflict)
    }
}

/// GET /api/v1/villanumbers
///
/// List every villa number as a client view.
pub async fn list_villa_numbers(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<VillaNumberView>>> {
    let villas = state.villa_numbers.get_all().await?;

    Ok(ApiResponse::ok(
        villas.into_iter().map(VillaNumberView::from).collect(),
    ))
}

/// GET /api/v2/villanumbers
///
/// Inert compatibility shim. Returns a fixed placeholder, never real data.
pub async fn list_villa_numbers_v2() -> Json<[&'static str; 1]> {
    Json(V2_LIST_PLACEHOLDER)
}

/// GET /api/v{1,2}/villanumbers/{id}
pub async fn get_villa_number(
    _user: AuthUser,
    State(state): State<AppState>,
    id: VillaNoPath,
) -> AppResult<ApiResponse<VillaNumberView>> {
    let number = id.require()?;
    let villa = find_villa_number(&state, number).await?;

    Ok(ApiResponse::ok(VillaNumberView::from(villa)))
}

/// POST /api/v{1,2}/villanumbers
///
/// Create a villa number. A taken number is a conflict, whether the
/// pre-check sees it or storage rejects the insert after losing a race.
pub async fn create_villa_number(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    body: JsonBody<VillaNumberCreateRequest>,
) -> AppResult<ApiResponse<VillaNumber>> {
    let villa = VillaNumber::try_from(require_body(body)?)?;

    if state
        .villa_numbers
        .get(&VillaNumberFilter::Number(villa.number))
        .await?
        .is_some()
    {
        return Err(duplicate(&state, villa.number));
    }

    let created = state
        .villa_numbers
        .create(&villa)
        .await
        .map_err(|err| match err {
            RepositoryError::AlreadyExists { .. } => duplicate(&state, villa.number),
            other => other.into(),
        })?;

    tracing::info!(
        number = %created.number,
        user_id = admin.user_id,
        "Villa number created",
    );

    Ok(ApiResponse::ok(created))
}

/// PUT /api/v{1,2}/villanumbers/{id}
///
/// Full replace of `specialDetails`. The body `number` must equal the path
/// id. Existence is not pre-checked; an unknown number surfaces through the
/// repository's not-found error.
pub async fn update_villa_number(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    id: VillaNoPath,
    body: JsonBody<VillaNumberUpdateRequest>,
) -> AppResult<ApiResponse<VillaNumber>> {
    let dto = require_body(body)?;
    if id.0.map(VillaNo::get) != Some(dto.number) {
        return Err(AppError::BadRequest(format!(
            "path id does not match body number {}",
            dto.number
        )));
    }

    let villa = VillaNumber::try_from(dto)?;
    let updated = state.villa_numbers.update(&villa).await?;

    tracing::info!(
        number = %updated.number,
        user_id = admin.user_id,
        "Villa number updated",
    );

    Ok(ApiResponse::ok(updated))
}

/// DELETE /api/v{1,2}/villanumbers/{id}
pub async fn delete_villa_number(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    id: VillaNoPath,
) -> AppResult<ApiResponse<()>> {
    let number = id.require()?;
    let villa = find_villa_number(&state, number).await?;

    state.villa_numbers.remove(&villa).await?;

    tracing::info!(%number, user_id = admin.user_id, "Villa number deleted");

    Ok(ApiResponse::no_content())
}
