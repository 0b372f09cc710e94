//! Custom Axum extractors.

pub mod auth;
pub mod club_form;
pub mod json;

pub use auth::AuthUser;
pub use club_form::ClubForm;
pub use json::JsonBody;
