use std::sync::Arc;

use villa_core::repository::DynRepository;
use villa_core::villa_number::VillaNumber;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). Handlers keep no
/// other state between requests.
#[derive(Clone)]
pub struct AppState {
    /// Villa number storage backend (PostgreSQL or in-memory).
    pub villa_numbers: DynRepository<VillaNumber>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
