//! Storage-agnostic repository port.
//!
//! The API layer only ever talks to `dyn Repository<E>`; the PostgreSQL and
//! in-memory backends in the `db` crate implement it.
//!
//! # Design Rules
//!
//! - No `sqlx` types in signatures
//! - CRUD-only: get_all, get, create, update, remove
//! - Entities are identified by their natural key; storage never generates it

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::types::Timestamp;

/// A persistable entity keyed by a caller-supplied natural key.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Natural key type. Ordered so backends can list in key order.
    type Key: Copy + Ord + fmt::Display + Send + Sync + 'static;

    /// Predicate type accepted by [`Repository::get`].
    type Filter: Predicate<Self>;

    /// Human-readable entity name used in error messages.
    const NAME: &'static str;

    fn key(&self) -> Self::Key;

    /// Called by backends that manage timestamps themselves, just before insert.
    fn stamp_created(&mut self, _now: Timestamp) {}

    /// Called by backends that manage timestamps themselves, just before a
    /// full replace. `previous` is the row being replaced.
    fn stamp_updated(&mut self, _previous: &Self, _now: Timestamp) {}
}

/// A single-item lookup condition.
///
/// Backends that cannot run Rust closures (SQL) translate each filter variant
/// into a query; in-memory backends call [`Predicate::matches`].
pub trait Predicate<E>: Send + Sync {
    fn matches(&self, entity: &E) -> bool;
}

/// Errors surfaced by any repository backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// No entity with the given natural key exists.
    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },

    /// An entity with the same natural key already exists.
    #[error("{entity} {key} already exists")]
    AlreadyExists { entity: &'static str, key: String },

    /// Storage backend failure (connection, query, decoding).
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RepositoryError {
    pub fn not_found<E: Entity>(key: E::Key) -> Self {
        RepositoryError::NotFound {
            entity: E::NAME,
            key: key.to_string(),
        }
    }

    pub fn already_exists<E: Entity>(key: E::Key) -> Self {
        RepositoryError::AlreadyExists {
            entity: E::NAME,
            key: key.to_string(),
        }
    }
}

/// Data-access operations over one entity kind.
///
/// All methods may suspend on I/O. Implementations must keep operations on
/// different keys independent of each other.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Every stored entity, in a stable backend-defined order.
    async fn get_all(&self) -> Result<Vec<E>, RepositoryError>;

    /// At most one entity matching `filter`; the first in storage order wins.
    async fn get(&self, filter: &E::Filter) -> Result<Option<E>, RepositoryError>;

    /// Insert a new entity.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if the natural key is
    /// taken. Backends must make this check atomic with the insert.
    async fn create(&self, entity: &E) -> Result<E, RepositoryError>;

    /// Replace all mutable fields of the entity with the same natural key.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no such key exists.
    async fn update(&self, entity: &E) -> Result<E, RepositoryError>;

    /// Delete the entity with the same natural key.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no such key exists.
    async fn remove(&self, entity: &E) -> Result<(), RepositoryError>;

    /// Cheap liveness probe for health reporting.
    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    /// Short backend label, e.g. `"postgres"` or `"memory"`.
    fn backend(&self) -> &'static str;
}

/// Shared, type-erased repository handle.
pub type DynRepository<E> = Arc<dyn Repository<E>>;
