//! Persistence layer for Mediahub
//!
//! Every resource lives in its own SQLite table as one JSON document per row.
//! [`Collection`] gives typed access to a table for any [`Document`].

pub mod collection;
pub mod pool;

pub use collection::{Collection, Document};
pub use pool::{connect, connect_in_memory, migrate};
pub use sqlx::SqlitePool;
