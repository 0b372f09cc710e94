//! Club use cases.

pub mod service;

pub use service::ClubService;
