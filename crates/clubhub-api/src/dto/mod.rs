//! Request and response shapes that are not documents themselves.

pub mod request;
pub mod response;

pub use request::ClubListQuery;
pub use response::{DetailedHealthResponse, HealthResponse, StoreStatus};
