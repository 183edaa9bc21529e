//! Users module - search, invite and create users

mod api;
mod commands;
mod invite;
mod models;
mod resolver;

pub use commands::run_user_command;
pub use invite::{invite_to_teams, InviteOutcome, INVITE_SENT_MESSAGE};
pub use models::{NewUser, User};
pub use resolver::resolve_user;
