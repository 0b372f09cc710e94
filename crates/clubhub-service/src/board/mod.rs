//! Board use cases.

pub mod service;

pub use service::BoardService;
