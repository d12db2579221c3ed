pub mod health;
pub mod villa_numbers;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /villanumbers                 list (auth), create (admin)
/// /villanumbers/{id}            get (auth), update, delete (admin)
/// ```
pub fn api_v1_routes() -> Router<AppState> {
    Router::new().nest("/villanumbers", villa_numbers::v1_router())
}

/// Build the `/api/v2` route tree.
///
/// ```text
/// /villanumbers                 placeholder list (public), create (admin)
/// /villanumbers/{id}            get (auth), update, delete (admin)
/// ```
pub fn api_v2_routes() -> Router<AppState> {
    Router::new().nest("/villanumbers", villa_numbers::v2_router())
}
