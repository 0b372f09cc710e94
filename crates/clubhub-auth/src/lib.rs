//! # clubhub-auth
//!
//! ClubHub does not manage accounts. Callers authenticate with an
//! identity provider and present its HS256 token as a bearer credential;
//! this crate checks the token and yields the caller identity (`sub`).

pub mod jwt;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
