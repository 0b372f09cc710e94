//! Board domain entities.

pub mod model;

pub use model::{Board, BoardPatch, NewBoard};
