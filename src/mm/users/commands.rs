//! User command handlers

use log::debug;

use crate::cli::{UserAction, UserCreateArgs, UserInviteArgs, UserSearchArgs};
use crate::config::api;
use crate::mm::ChatApi;
use crate::output::Printer;
use crate::ui::{create_spinner, finish_spinner, set_spinner_message};

use super::invite::invite_to_teams;
use super::models::NewUser;
use super::resolver::resolve_user;

/// Dispatch user subcommands
pub async fn run_user_command<C>(
    client: &C,
    action: &UserAction,
    printer: &mut Printer,
    batch: bool,
) -> Result<(), Box<dyn std::error::Error>>
where
    C: ChatApi + ?Sized,
{
    match action {
        UserAction::Search(args) => run_user_search(client, args, printer, batch).await,
        UserAction::Invite(args) => {
            run_user_invite(client, args, printer, batch).await;
            Ok(())
        }
        UserAction::Create(args) => run_user_create(client, args, printer, batch).await,
    }
}

/// Look up each user reference and print the users found
///
/// Users that cannot be found are reported on the error stream; the command
/// itself still succeeds.
async fn run_user_search<C>(
    client: &C,
    args: &UserSearchArgs,
    printer: &mut Printer,
    batch: bool,
) -> Result<(), Box<dyn std::error::Error>>
where
    C: ChatApi + ?Sized,
{
    let spinner = create_spinner("Searching users...", batch);

    for reference in &args.users {
        set_spinner_message(&spinner, &format!("Searching for '{}'...", reference));
        match resolve_user(client, reference).await {
            Some(user) => printer.print_item(&user)?,
            None => printer.print_error(format!("Unable to find user '{}'", reference)),
        }
    }

    finish_spinner(spinner);
    Ok(())
}

/// Invite a user by email to each given team
async fn run_user_invite<C>(
    client: &C,
    args: &UserInviteArgs,
    printer: &mut Printer,
    batch: bool,
) where
    C: ChatApi + ?Sized,
{
    debug!("Inviting {} to teams {:?}", args.email, args.teams);

    let spinner = create_spinner(
        &format!("Inviting {} to {} team(s)...", args.email, args.teams.len()),
        batch,
    );
    let outcomes = invite_to_teams(client, &args.email, &args.teams).await;
    finish_spinner(spinner);

    for outcome in &outcomes {
        outcome.report(&args.email, printer);
    }
}

/// Validate the create flags into a request, naming the first missing one
fn build_new_user(args: &UserCreateArgs) -> Result<NewUser, String> {
    // Blank counts as missing; present values are sent as typed
    fn required(value: &Option<String>, label: &str) -> Result<String, String> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(v.clone()),
            _ => Err(format!("{} is required", label)),
        }
    }

    Ok(NewUser {
        email: required(&args.email, "Email")?,
        username: required(&args.username, "Username")?,
        password: required(&args.password, "Password")?,
        nickname: args.nickname.clone().unwrap_or_default(),
        first_name: args.firstname.clone().unwrap_or_default(),
        last_name: args.lastname.clone().unwrap_or_default(),
        locale: args.locale.clone().unwrap_or_default(),
    })
}

/// Create a user, optionally granting system admin
async fn run_user_create<C>(
    client: &C,
    args: &UserCreateArgs,
    printer: &mut Printer,
    batch: bool,
) -> Result<(), Box<dyn std::error::Error>>
where
    C: ChatApi + ?Sized,
{
    let new_user = build_new_user(args)?;

    let spinner = create_spinner(&format!("Creating user '{}'...", new_user.username), batch);

    let user = match client.create_user(&new_user).await {
        Ok(user) => user,
        Err(e) => {
            finish_spinner(spinner);
            return Err(format!("Unable to create user. Error: {}", e).into());
        }
    };

    if args.system_admin {
        set_spinner_message(&spinner, "Granting system admin role...");
        if let Err(e) = client
            .update_user_roles(&user.id, api::SYSTEM_ADMIN_ROLES)
            .await
        {
            finish_spinner(spinner);
            return Err(format!("Unable to update user roles. Error: {}", e).into());
        }
    }

    finish_spinner(spinner);
    printer.print_item(&user)?;
    Ok(())
}
