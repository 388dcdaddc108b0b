//! SQLite storage backend implementation.
//!
//! This module provides a SQLite-based implementation of the repository
//! trait using `rusqlite` for synchronous operations and `tokio-rusqlite`
//! for async wrapping. A single connection serializes statements on a
//! background thread, which keeps it safe to share across concurrent
//! request handlers.

mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
