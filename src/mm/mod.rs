//! Mattermost API client module
//!
//! This module provides functionality to interact with the Mattermost REST API (v4).

mod client;
mod credentials;
pub mod teams;
pub mod traits;
pub mod users;

#[cfg(test)]
pub mod testing;

pub use client::{normalize_server_url, MmClient};
pub use credentials::{Connection, ConnectionResolver};
pub use teams::{resolve_team, Team};
pub use traits::ChatApi;
pub use users::{
    invite_to_teams, resolve_user, run_user_command, InviteOutcome, NewUser, User,
    INVITE_SENT_MESSAGE,
};
