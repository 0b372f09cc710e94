//! Event domain entities.

pub mod date;
pub mod model;

pub use model::{Event, EventPatch, EventSummary, NewEvent};
