//! CLI argument parsing

mod auth;
mod common;
mod user;

use clap::{Parser, Subcommand};

use crate::config::{credentials, defaults};

pub use auth::{AuthAction, AuthCleanArgs, AuthDeleteArgs, AuthLoginArgs, AuthNameArgs};
pub use common::OutputFormat;
pub use user::{UserAction, UserCreateArgs, UserInviteArgs, UserSearchArgs};

/// Mattermost administration CLI
#[derive(Parser, Debug)]
#[command(name = "mmctl")]
#[command(version)]
#[command(about = "Remote administration for Mattermost servers", long_about = None)]
pub struct Cli {
    /// Server URL (overrides stored credentials)
    #[arg(long, global = true, env = credentials::URL_ENV_VAR)]
    pub url: Option<String>,

    /// Personal access token (overrides stored credentials)
    #[arg(long, global = true, env = credentials::TOKEN_ENV_VAR, hide_env_values = true)]
    pub token: Option<String>,

    /// Name of the stored credentials to use
    #[arg(long, global = true, env = credentials::NAME_ENV_VAR)]
    pub credentials: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinners, no interactive prompts
    #[arg(long, global = true)]
    pub batch: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage stored credentials
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}
