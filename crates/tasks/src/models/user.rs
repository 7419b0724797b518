use serde::{Deserialize, Serialize};

use xtrawrkx_core::{people, DbId};

/// A platform user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl User {
    /// Two-letter initials for avatar display (`"??"` when unnamed).
    pub fn initials(&self) -> String {
        people::initials(self.first_name.as_deref(), self.last_name.as_deref())
    }

    /// Full display name (`"Unknown"` when unnamed).
    pub fn display_name(&self) -> String {
        people::display_name(self.first_name.as_deref(), self.last_name.as_deref())
    }
}
