//! Teams module - team lookups, name/ID resolution and email invites

mod api;
mod models;
mod resolver;

pub use models::Team;
pub use resolver::resolve_team;
