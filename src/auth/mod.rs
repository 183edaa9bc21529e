//! Stored credentials module
//!
//! Named (server URL, token) pairs kept in ~/.mmctl/config.json so the
//! server does not have to be passed on every invocation.

mod commands;
mod models;
mod resolve;
mod store;

pub use commands::run_auth_command;
pub use models::{Credentials, CredentialsConfig};
pub use resolve::resolve_active_credentials;
pub use store::CredentialsStore;
