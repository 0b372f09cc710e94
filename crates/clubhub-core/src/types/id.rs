//! Document identifiers.
//!
//! Every Club, Event and Board is keyed by a UUID. Identifiers arriving from
//! clients are parsed here, before any store is consulted, so a malformed
//! identifier is reported exactly like an absent one.

use std::fmt;

use uuid::Uuid;

use crate::error::AppError;
use crate::result::AppResult;

/// The document collections addressed by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// A club profile.
    Club,
    /// A bulletin event.
    Event,
    /// A bulletin board.
    Board,
}

impl Resource {
    /// The not-found error clients see for this resource.
    pub fn not_found(self) -> AppError {
        AppError::not_found(format!("{self} not found."))
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Club => write!(f, "Club"),
            Self::Event => write!(f, "Event"),
            Self::Board => write!(f, "Board"),
        }
    }
}

/// Generate a fresh, time-ordered identifier.
pub fn new_object_id() -> Uuid {
    Uuid::now_v7()
}

/// Parse a client-supplied identifier.
///
/// Fails with the resource's not-found error when `raw` is not a UUID.
pub fn parse_object_id(raw: &str, resource: Resource) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| resource.not_found())
}
