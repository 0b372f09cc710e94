//! Request DTOs.

use serde::{Deserialize, Serialize};

use clubhub_entity::club::ClubFilter;

/// Query string of `GET /api/clubs`.
///
/// Values stay raw strings so that an unparseable bound is ignored
/// rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubListQuery {
    pub name: Option<String>,
    pub genre: Option<String>,
    pub cost: Option<String>,
    pub size: Option<String>,
    pub show_inactive: Option<String>,
    pub featured: Option<String>,
}

impl ClubListQuery {
    pub fn into_filter(self) -> ClubFilter {
        ClubFilter {
            name: non_empty(self.name),
            genre: non_empty(self.genre),
            max_cost: upper_bound(self.cost.as_deref()),
            max_size: upper_bound(self.size.as_deref()),
            include_inactive: !matches!(self.show_inactive.as_deref(), Some("false")),
            featured_only: matches!(self.featured.as_deref(), Some("true")),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn upper_bound(value: Option<&str>) -> Option<i32> {
    value
        .and_then(|v| v.trim().parse::<i32>().ok())
        .filter(|v| *v >= 0)
}
