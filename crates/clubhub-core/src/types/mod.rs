//! Core type definitions used across the ClubHub workspace.

pub mod id;

pub use id::{Resource, new_object_id, parse_object_id};
