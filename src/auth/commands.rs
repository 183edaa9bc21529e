//! Auth command handlers

use comfy_table::{presets::NOTHING, Cell, Table};
use serde::Serialize;

use crate::cli::{AuthAction, AuthLoginArgs, OutputFormat};
use crate::error::MmError;
use crate::mm::normalize_server_url;
use crate::output::{PlainRender, Printer};
use crate::ui::confirm_action;

use super::models::Credentials;
use super::store::CredentialsStore;

/// Dispatch auth subcommands
pub fn run_auth_command(
    store: &CredentialsStore,
    action: &AuthAction,
    printer: &mut Printer,
    batch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AuthAction::Login(args) => run_auth_login(store, args, printer),
        AuthAction::List => run_auth_list(store, printer),
        AuthAction::Current => run_auth_current(store, printer),
        AuthAction::Set(args) => run_auth_set(store, &args.name, printer),
        AuthAction::Delete(args) => {
            let prompt = format!("Delete credentials '{}'?", args.name);
            if !confirm_action(&prompt, args.yes, batch)? {
                printer.print_line("Cancelled");
                return Ok(());
            }
            run_auth_delete(store, &args.name, printer)
        }
        AuthAction::Clean(args) => {
            if !confirm_action("Remove all stored credentials?", args.yes, batch)? {
                printer.print_line("Cancelled");
                return Ok(());
            }
            run_auth_clean(store, printer)
        }
    }
}

/// Store credentials and make them current
fn run_auth_login(
    store: &CredentialsStore,
    args: &AuthLoginArgs,
    printer: &mut Printer,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.token.trim().is_empty() {
        return Err(MmError::Config("--token must not be empty".to_string()).into());
    }

    let mut config = store.load()?;
    let url = normalize_server_url(&args.url);

    let replaced = config
        .credentials
        .insert(
            args.name.clone(),
            Credentials {
                url: url.clone(),
                token: args.token.clone(),
            },
        )
        .is_some();
    config.current_credentials = Some(args.name.clone());
    store.save(&config)?;

    let verb = if replaced { "Updated" } else { "Stored" };
    printer.print_line(format!(
        "{} credentials '{}' for {} (now current)",
        verb, args.name, url
    ));
    Ok(())
}

/// List stored credentials
fn run_auth_list(
    store: &CredentialsStore,
    printer: &mut Printer,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = store.load()?;

    if config.credentials.is_empty() {
        printer.print_line("There are no stored credentials.");
        printer.print_line("Use 'mmctl auth login <name> --url <url> --token <token>' to add some.");
        return Ok(());
    }

    let rows: Vec<CredentialsRow> = config
        .credentials
        .iter()
        .map(|(name, creds)| CredentialsRow {
            name,
            url: &creds.url,
            token: mask_token(&creds.token),
            current: config.current_credentials.as_deref() == Some(name.as_str()),
        })
        .collect();

    if printer.format() == OutputFormat::Json {
        for row in &rows {
            printer.print_item(row)?;
        }
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(vec![
        Cell::new("CURRENT"),
        Cell::new("NAME"),
        Cell::new("URL"),
        Cell::new("TOKEN"),
    ]);
    for row in &rows {
        table.add_row(vec![
            Cell::new(if row.current { "*" } else { "" }),
            Cell::new(row.name),
            Cell::new(row.url),
            Cell::new(&row.token),
        ]);
    }

    printer.print_line(table.to_string());
    Ok(())
}

/// One stored entry as listed; the token is always masked
#[derive(Serialize)]
struct CredentialsRow<'a> {
    name: &'a str,
    url: &'a str,
    token: String,
    current: bool,
}

impl PlainRender for CredentialsRow<'_> {
    fn render_plain(&self) -> String {
        format!("{} {} {}", self.name, self.url, self.token)
    }
}

/// Show the current credentials
fn run_auth_current(
    store: &CredentialsStore,
    printer: &mut Printer,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = store.load()?;

    let current = config.current_credentials.as_ref().ok_or_else(|| {
        MmError::Config(
            "No current credentials. Use 'mmctl auth set <name>' to select some.".to_string(),
        )
    })?;

    let creds = config.credentials.get(current).ok_or_else(|| {
        MmError::Config(format!(
            "Current credentials '{}' not found. Available: {}",
            current,
            config.available_names()
        ))
    })?;

    printer.print_line(format!(
        "Found credentials '{}' for server {}",
        current, creds.url
    ));
    Ok(())
}

/// Select the current credentials
fn run_auth_set(
    store: &CredentialsStore,
    name: &str,
    printer: &mut Printer,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = store.load()?;

    if !config.credentials.contains_key(name) {
        return Err(MmError::Config(format!(
            "Credentials '{}' not found. Available: {}",
            name,
            config.available_names()
        ))
        .into());
    }

    config.current_credentials = Some(name.to_string());
    store.save(&config)?;
    printer.print_line(format!("Credentials for server '{}' set as active", name));
    Ok(())
}

/// Delete one named entry
fn run_auth_delete(
    store: &CredentialsStore,
    name: &str,
    printer: &mut Printer,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = store.load()?;

    if config.credentials.remove(name).is_none() {
        return Err(MmError::Config(format!(
            "Credentials '{}' not found. Available: {}",
            name,
            config.available_names()
        ))
        .into());
    }

    if config.current_credentials.as_deref() == Some(name) {
        config.current_credentials = None;
    }

    store.save(&config)?;
    printer.print_line(format!("Credentials for server '{}' deleted", name));
    Ok(())
}

/// Remove every stored entry
fn run_auth_clean(
    store: &CredentialsStore,
    printer: &mut Printer,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = store.load()?;
    let count = config.credentials.len();
    config.credentials.clear();
    config.current_credentials = None;
    store.save(&config)?;
    printer.print_line(format!("Removed {} stored credential(s)", count));
    Ok(())
}

/// Mask a token for display, keeping the last 4 chars
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() >= 4 {
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("****{}", tail)
    } else {
        "****".to_string()
    }
}
