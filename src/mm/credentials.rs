//! Server URL and token resolution from multiple sources

use log::debug;

use crate::auth::{resolve_active_credentials, CredentialsStore};
use crate::config::credentials;
use crate::error::{MmError, Result};

/// Where to connect and how to authenticate
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub url: String,
    pub token: String,
}

/// Connection resolution with fallback logic
pub struct ConnectionResolver<'a> {
    store: &'a CredentialsStore,
    credentials_name: Option<&'a str>,
}

impl<'a> ConnectionResolver<'a> {
    /// Create a resolver reading stored credentials from `store`, optionally
    /// pinned to one named entry
    pub fn new(store: &'a CredentialsStore, credentials_name: Option<&'a str>) -> Self {
        Self {
            store,
            credentials_name,
        }
    }

    /// Resolve url and token independently, each from:
    /// 1. CLI argument or its environment variable (MMCTL_URL / MMCTL_TOKEN)
    /// 2. Named credentials entry (--credentials / MMCTL_CREDENTIALS)
    /// 3. Current credentials entry of the store
    pub fn resolve(&self, cli_url: Option<&str>, cli_token: Option<&str>) -> Result<Connection> {
        let stored = if cli_url.is_some() && cli_token.is_some() {
            None
        } else {
            resolve_active_credentials(self.store, self.credentials_name)?
        };

        if let Some((name, _)) = &stored {
            debug!("Stored credentials '{}' available as fallback", name);
        }
        let stored = stored.map(|(_, creds)| creds);

        let url = pick(cli_url, stored.as_ref().map(|c| c.url.as_str()), "url")
            .ok_or_else(|| MmError::UrlNotFound(self.not_found_message("server URL", "--url")))?;
        let token = pick(cli_token, stored.as_ref().map(|c| c.token.as_str()), "token")
            .ok_or_else(|| {
                MmError::TokenNotFound(self.not_found_message("access token", "--token"))
            })?;

        Ok(Connection { url, token })
    }

    /// Generate helpful error message when a value is not found
    fn not_found_message(&self, what: &str, flag: &str) -> String {
        let env_var = if flag == "--url" {
            credentials::URL_ENV_VAR
        } else {
            credentials::TOKEN_ENV_VAR
        };

        format!(
            "No {} found. Please provide one using one of:\n\
             \n\
             1. CLI argument:      mmctl {} <VALUE>\n\
             2. Environment var:   export {}=<VALUE>\n\
             3. Stored login:      mmctl auth login <NAME> --url <URL> --token <TOKEN>\n\
             \n\
             Checked credentials file {}",
            what,
            flag,
            env_var,
            self.store.path().display()
        )
    }
}

fn pick(cli: Option<&str>, stored: Option<&str>, label: &str) -> Option<String> {
    match (cli.filter(|v| !v.is_empty()), stored.filter(|v| !v.is_empty())) {
        (Some(v), _) => {
            debug!("Using {} from CLI argument or environment", label);
            Some(v.to_string())
        }
        (None, Some(v)) => {
            debug!("Using {} from stored credentials", label);
            Some(v.to_string())
        }
        (None, None) => None,
    }
}
