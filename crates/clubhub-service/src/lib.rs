//! # clubhub-service
//!
//! Use cases for clubs, events and boards. Services receive their stores
//! at construction time as `Arc<dyn ...>` trait objects so the same code
//! runs against PostgreSQL and the in-memory store.
//!
//! Raw identifiers from the HTTP layer are parsed here, before any store
//! call, so a malformed id is a plain "not found".

pub mod board;
pub mod club;
pub mod context;
pub mod event;

pub use board::BoardService;
pub use club::ClubService;
pub use context::RequestContext;
pub use event::EventService;
