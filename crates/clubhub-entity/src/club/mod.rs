//! Club domain entities.

pub mod filter;
pub mod model;

pub use filter::ClubFilter;
pub use model::{Club, ClubPatch, ClubPreview, Logo, NewClub};
