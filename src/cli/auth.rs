//! Credentials management CLI arguments

use clap::{Parser, Subcommand};

/// Auth subcommands for managing stored server credentials
#[derive(Subcommand, Debug)]
pub enum AuthAction {
    /// Store credentials for a server and make them current
    #[command(after_help = "EXAMPLES:\n  \
        mmctl auth login local --url https://chat.example.com --token <TOKEN>")]
    Login(AuthLoginArgs),

    /// List stored credentials
    List,

    /// Show the current credentials
    Current,

    /// Set the current credentials
    Set(AuthNameArgs),

    /// Delete stored credentials
    Delete(AuthDeleteArgs),

    /// Remove all stored credentials
    Clean(AuthCleanArgs),
}

/// Arguments for 'auth login'
#[derive(Parser, Debug)]
pub struct AuthLoginArgs {
    /// Name for this set of credentials
    pub name: String,

    /// Server URL
    #[arg(long)]
    pub url: String,

    /// Personal access token
    #[arg(long)]
    pub token: String,
}

/// Arguments for 'auth set'
#[derive(Parser, Debug)]
pub struct AuthNameArgs {
    /// Credentials name
    pub name: String,
}

/// Arguments for 'auth delete'
#[derive(Parser, Debug)]
pub struct AuthDeleteArgs {
    /// Credentials name to delete
    pub name: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for 'auth clean'
#[derive(Parser, Debug)]
pub struct AuthCleanArgs {
    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}
