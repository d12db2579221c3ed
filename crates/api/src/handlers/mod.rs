//! Request handlers.
//!
//! Each submodule provides the async handler functions for one resource.
//! Handlers delegate to the repository held in [`crate::state::AppState`]
//! and map failures via [`crate::error::AppError`].

pub mod villa_number;
