//! HTTP request handlers organized by resource.

pub mod board;
pub mod club;
pub mod event;
pub mod health;
