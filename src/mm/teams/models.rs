//! Team data models

use serde::{Deserialize, Serialize};

/// Team as returned by the server
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Team {
    pub id: String,
    /// Unique URL name of the team
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub email: String,
    /// "O" for open, "I" for invite only
    #[serde(rename = "type", default)]
    pub team_type: String,
    #[serde(default)]
    pub create_at: i64,
    #[serde(default)]
    pub delete_at: i64,
}
