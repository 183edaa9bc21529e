//! mmctl - Main entry point

use clap::Parser;
use log::{debug, info};

use mmctl::{
    run_auth_command, run_user_command, Cli, Command, ConnectionResolver, CredentialsStore,
    MmClient, Printer,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting mmctl v{}", env!("CARGO_PKG_VERSION"));

    let mut printer = Printer::new(cli.format);
    let result = run(&cli, &mut printer).await;

    if let Err(e) = printer.flush() {
        debug!("Failed to write output: {}", e);
    }

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli, printer: &mut Printer) -> Result<(), Box<dyn std::error::Error>> {
    let store = CredentialsStore::new();
    debug!("Credentials file: {}", store.path().display());

    match &cli.command {
        Command::Auth { action } => run_auth_command(&store, action, printer, cli.batch),
        Command::User { action } => {
            let connection = ConnectionResolver::new(&store, cli.credentials.as_deref())
                .resolve(cli.url.as_deref(), cli.token.as_deref())?;
            let client = MmClient::new(connection.token, connection.url);
            debug!("Using server {}", client.server_url());
            run_user_command(&client, action, printer, cli.batch).await
        }
    }
}
