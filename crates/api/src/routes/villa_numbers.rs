//! Route definitions for the villa number resource.
//!
//! Both API versions serve get/create/update/delete identically; they differ
//! only in the collection `GET`.

use axum::routing::{get, MethodRouter};
use axum::Router;

use crate::handlers::villa_number;
use crate::state::AppState;

/// Routes shared by every version, with the collection `GET` supplied by the caller.
fn router(list: MethodRouter<AppState>) -> Router<AppState> {
    Router::new()
        .route("/", list.post(villa_number::create_villa_number))
        .route(
            "/{id}",
            get(villa_number::get_villa_number)
                .put(villa_number::update_villa_number)
                .delete(villa_number::delete_villa_number),
        )
}

/// Version 1 routes mounted at `/api/v1/villanumbers`.
///
/// ```text
/// GET    /        -> list_villa_numbers (auth required)
/// POST   /        -> create_villa_number (admin only)
/// GET    /{id}    -> get_villa_number (auth required)
/// PUT    /{id}    -> update_villa_number (admin only)
/// DELETE /{id}    -> delete_villa_number (admin only)
/// ```
pub fn v1_router() -> Router<AppState> {
    router(get(villa_number::list_villa_numbers))
}

/// Version 2 routes mounted at `/api/v2/villanumbers`.
///
/// ```text
/// GET    /        -> list_villa_numbers_v2 (public placeholder)
/// ```
///
/// Everything else matches [`v1_router`].
pub fn v2_router() -> Router<AppState> {
    router(get(villa_number::list_villa_numbers_v2))
}
