//! Identity token claims, verification and issuing.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::{Audience, Claims};
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;
