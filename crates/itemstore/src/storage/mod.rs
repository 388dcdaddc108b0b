//! Storage backend implementations.
//!
//! Concrete implementations of the repository trait defined in
//! `itemstore_core::storage`. SQLite is the production backend; the
//! in-memory backend exists for tests only.

#[cfg(test)]
pub mod inmemory;
pub mod sqlite;

pub use sqlite::SqliteRepository;
