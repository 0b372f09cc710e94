//! # clubhub-database
//!
//! Persistence for ClubHub. The [`store`] traits describe every read and
//! write the services need, including the reference-list maintenance
//! between events, boards and clubs. Two implementations exist:
//!
//! - [`repositories`]: PostgreSQL through sqlx, with multi-row writes in
//!   a single transaction.
//! - [`memory`]: a dashmap-backed store used by tests and local runs.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use store::{BoardStore, ClubStore, EventStore, StoreHealth, Stores};
