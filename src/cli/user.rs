//! User command arguments

use clap::{Parser, Subcommand};

/// User management subcommands
#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// Search for users by email, username or ID
    Search(UserSearchArgs),

    /// Send an email invite to join one or more teams
    #[command(after_help = "EXAMPLES:\n  \
        mmctl user invite user@example.com myteam\n  \
        mmctl user invite user@example.com myteam1 k8x3nqcbd7gupx1ssu1fcoyq8c")]
    Invite(UserInviteArgs),

    /// Create a user
    #[command(after_help = "EXAMPLES:\n  \
        mmctl user create --email user@example.com --username userexample --password Password1\n  \
        mmctl user create --email admin@example.com --username admin --password Password1 --system-admin")]
    Create(UserCreateArgs),
}

/// Arguments for 'user search'
#[derive(Parser, Debug)]
pub struct UserSearchArgs {
    /// Users to look up (email, username or ID)
    #[arg(required = true)]
    pub users: Vec<String>,
}

/// Arguments for 'user invite'
#[derive(Parser, Debug)]
pub struct UserInviteArgs {
    /// Email address of the user to invite
    pub email: String,

    /// Teams to invite the user to (ID or name)
    #[arg(required = true)]
    pub teams: Vec<String>,
}

/// Arguments for 'user create'
///
/// Email, username and password are checked by the command handler so the
/// missing one is reported by name.
#[derive(Parser, Debug, Default)]
pub struct UserCreateArgs {
    /// Email of the new user
    #[arg(long)]
    pub email: Option<String>,

    /// Username of the new user
    #[arg(long)]
    pub username: Option<String>,

    /// Password of the new user
    #[arg(long)]
    pub password: Option<String>,

    /// Nickname
    #[arg(long)]
    pub nickname: Option<String>,

    /// First name
    #[arg(long)]
    pub firstname: Option<String>,

    /// Last name
    #[arg(long)]
    pub lastname: Option<String>,

    /// Locale (e.g. en, fr)
    #[arg(long)]
    pub locale: Option<String>,

    /// Grant the system administrator role
    #[arg(long = "system-admin", alias = "system_admin")]
    pub system_admin: bool,
}
