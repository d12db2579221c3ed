//! Domain layer for the villa numbers service.
//!
//! Holds the entity and DTO shapes, the storage-agnostic repository port,
//! and the error taxonomy shared by the `db` and `api` crates. Nothing in
//! here knows about HTTP or SQL.

pub mod error;
pub mod repository;
pub mod roles;
pub mod types;
pub mod villa_number;
