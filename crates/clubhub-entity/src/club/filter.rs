//! Listing filter for club previews.

use serde::{Deserialize, Serialize};

use super::model::Club;

/// Criteria for the club listing.
///
/// Only validated clubs are ever listed; the remaining criteria narrow
/// that set further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubFilter {
    /// Case-insensitive literal substring of the club name.
    pub name: Option<String>,
    /// Exact genre.
    pub genre: Option<String>,
    /// Inclusive upper bound on cost.
    pub max_cost: Option<i32>,
    /// Inclusive upper bound on size.
    pub max_size: Option<i32>,
    /// When false, inactive clubs are hidden.
    pub include_inactive: bool,
    /// Restrict to featured clubs.
    pub featured_only: bool,
}

impl Default for ClubFilter {
    fn default() -> Self {
        Self {
            name: None,
            genre: None,
            max_cost: None,
            max_size: None,
            include_inactive: true,
            featured_only: false,
        }
    }
}

impl ClubFilter {
    /// Evaluate the filter against a full club document.
    pub fn matches(&self, club: &Club) -> bool {
        if !club.validation {
            return false;
        }
        if !self.include_inactive && !club.is_active {
            return false;
        }
        if self.featured_only && !club.featured {
            return false;
        }
        if let Some(name) = &self.name {
            if !club.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(genre) = &self.genre {
            if &club.genre != genre {
                return false;
            }
        }
        if self.max_cost.is_some_and(|max| club.cost > max) {
            return false;
        }
        if self.max_size.is_some_and(|max| club.size > max) {
            return false;
        }
        true
    }

    /// The name filter as an `ILIKE` pattern with wildcards escaped.
    pub fn name_pattern(&self) -> Option<String> {
        self.name.as_ref().map(|name| {
            let mut escaped = String::with_capacity(name.len() + 2);
            escaped.push('%');
            for ch in name.chars() {
                if matches!(ch, '%' | '_' | '\\') {
                    escaped.push('\\');
                }
                escaped.push(ch);
            }
            escaped.push('%');
            escaped
        })
    }
}
