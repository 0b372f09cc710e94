//! # clubhub-core
//!
//! Core crate for ClubHub. Contains configuration schemas, identifier
//! parsing, and the unified error system.
//!
//! This crate has **no** internal dependencies on other ClubHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
