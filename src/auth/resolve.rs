//! Active credentials resolution

use log::debug;

use crate::error::MmError;

use super::models::Credentials;
use super::store::CredentialsStore;

/// Resolve the stored credentials to use:
/// 1. the explicitly named entry (--credentials / MMCTL_CREDENTIALS), which must exist
/// 2. the current-credentials entry of the file, if any
pub fn resolve_active_credentials(
    store: &CredentialsStore,
    name: Option<&str>,
) -> Result<Option<(String, Credentials)>, MmError> {
    let config = store.load()?;

    if let Some(name) = name {
        debug!("Using credentials selected by flag: {}", name);
        return match config.credentials.get(name) {
            Some(creds) => Ok(Some((name.to_string(), creds.clone()))),
            None => Err(MmError::Config(format!(
                "Credentials '{}' not found. Available: {}",
                name,
                config.available_names()
            ))),
        };
    }

    let Some(current) = config.current_credentials.as_deref() else {
        debug!("No current credentials in {}", store.path().display());
        return Ok(None);
    };

    match config.credentials.get(current) {
        Some(creds) => {
            debug!("Using current credentials '{}': url={}", current, creds.url);
            Ok(Some((current.to_string(), creds.clone())))
        }
        None => {
            debug!("Current credentials '{}' not found in file", current);
            Ok(None)
        }
    }
}
