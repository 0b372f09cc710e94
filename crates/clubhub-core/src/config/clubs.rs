//! Club moderation configuration.

use serde::{Deserialize, Serialize};

/// Settings applied to newly created clubs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubsConfig {
    /// Value of the `validation` flag on new clubs. Unvalidated clubs are
    /// hidden from the public listing until a moderator flips the flag.
    #[serde(default = "default_auto_validate")]
    pub auto_validate: bool,
}

impl Default for ClubsConfig {
    fn default() -> Self {
        Self {
            auto_validate: default_auto_validate(),
        }
    }
}

fn default_auto_validate() -> bool {
    true
}
