//! Process-local repository backed by an ordered map.
//!
//! Works for any [`Entity`]. Rows are kept in natural-key order, so
//! `get_all` and `get` observe the same stable ordering as the PostgreSQL
//! backend. Every mutation holds the write lock for its whole
//! check-and-write, which makes `create` an atomic insert-if-absent.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use villa_core::repository::{Entity, Predicate, Repository, RepositoryError};

pub struct MemoryRepository<E: Entity> {
    rows: RwLock<BTreeMap<E::Key, E>>,
}

impl<E: Entity> MemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

impl<E: Entity> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for MemoryRepository<E> {
    async fn get_all(&self) -> Result<Vec<E>, RepositoryError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn get(&self, filter: &E::Filter) -> Result<Option<E>, RepositoryError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|entity| filter.matches(entity))
            .cloned())
    }

    async fn create(&self, entity: &E) -> Result<E, RepositoryError> {
        let mut rows = self.rows.write().await;
        match rows.entry(entity.key()) {
            Entry::Occupied(_) => Err(RepositoryError::already_exists::<E>(entity.key())),
            Entry::Vacant(slot) => {
                let mut stored = entity.clone();
                stored.stamp_created(chrono::Utc::now());
                slot.insert(stored.clone());
                Ok(stored)
            }
        }
    }

    async fn update(&self, entity: &E) -> Result<E, RepositoryError> {
        let mut rows = self.rows.write().await;
        let slot = rows
            .get_mut(&entity.key())
            .ok_or_else(|| RepositoryError::not_found::<E>(entity.key()))?;
        let mut stored = entity.clone();
        stored.stamp_updated(slot, chrono::Utc::now());
        *slot = stored.clone();
        Ok(stored)
    }

    async fn remove(&self, entity: &E) -> Result<(), RepositoryError> {
        self.rows
            .write()
            .await
            .remove(&entity.key())
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found::<E>(entity.key()))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
