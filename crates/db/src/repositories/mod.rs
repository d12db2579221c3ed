//! Repository layer.
//!
//! Each backend implements the [`villa_core::repository::Repository`] port so
//! handlers can be wired to either without caring which one is live.

pub mod memory_repo;
pub mod villa_number_repo;

pub use memory_repo::MemoryRepository;
pub use villa_number_repo::PgVillaNumberRepo;
