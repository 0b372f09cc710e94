//! # clubhub-entity
//!
//! Document models for ClubHub. Every struct in this crate is either a
//! stored document (Club, Event, Board), the payload that creates or
//! patches one, or a summary projection returned by list endpoints.
//!
//! Documents serialize with the public wire names (`_id`, camelCase
//! fields) and carry their schema constraints as `validator` rules.

pub mod board;
pub mod club;
pub mod event;
pub mod validation;
