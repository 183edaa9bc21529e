//! mmctl - Remote administration for Mattermost servers
//!
//! A CLI tool to look up, invite and create users over the Mattermost REST API.
//!
//! # Features
//!
//! - Search users by email, username or ID
//! - Invite a user to several teams, given by ID or name
//! - Create users, optionally as system admins
//! - Named credentials stored in `~/.mmctl/config.json`
//! - Plain or JSON output
//!
//! # Example
//!
//! ```bash
//! # Store credentials once
//! mmctl auth login prod --url https://chat.example.com --token <TOKEN>
//!
//! # Find users
//! mmctl user search alice bob@example.com
//!
//! # Invite to teams by name or ID
//! mmctl user invite bob@example.com engineering 4xp9fdt7pbgium38k5pj3bnmir
//!
//! # Create an admin
//! mmctl user create --email ops@example.com --username ops --password S3cret! --system-admin
//! ```

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod mm;
pub mod output;
pub mod ui;

pub use auth::{run_auth_command, CredentialsStore};
pub use cli::{Cli, Command, OutputFormat, UserAction};
pub use error::{MmError, Result};
pub use mm::{run_user_command, ChatApi, Connection, ConnectionResolver, MmClient};
pub use output::Printer;
