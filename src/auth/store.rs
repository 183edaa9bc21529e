//! On-disk credentials file
//!
//! The file holds access tokens, so it is replaced atomically and kept
//! readable by the owner only.

use std::ffi::OsString;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials as credentials_config;
use crate::error::MmError;

use super::models::CredentialsConfig;

/// Location of the credentials file and its load/save operations
pub struct CredentialsStore {
    config_path: PathBuf,
}

impl Default for CredentialsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialsStore {
    /// Store at `$MMCTL_CONFIG_DIR/config.json`, or `~/.mmctl/config.json`
    /// when the variable is unset or empty
    pub fn new() -> Self {
        Self {
            config_path: config_path_for(std::env::var_os(credentials_config::DIR_ENV_VAR)),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Read the stored credentials. A missing file is an empty store.
    pub fn load(&self) -> Result<CredentialsConfig, MmError> {
        let content = match fs::read_to_string(&self.config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(CredentialsConfig::default())
            }
            Err(e) => return Err(MmError::Credentials(failure("read", &self.config_path, e))),
        };

        serde_json::from_str(&content)
            .map_err(|e| MmError::Credentials(failure("parse", &self.config_path, e)))
    }

    /// Replace the credentials file with `config`
    pub fn save(&self, config: &CredentialsConfig) -> Result<(), MmError> {
        if let Some(dir) = self.config_path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| MmError::Config(failure("create directory for", dir, e)))?;
        }

        let json = serde_json::to_string_pretty(config)
            .map_err(|e| MmError::Config(failure("serialize", &self.config_path, e)))?;

        let staged = self.config_path.with_extension("json.tmp");
        write_owner_only(&staged, &json)
            .map_err(|e| MmError::Config(failure("write", &staged, e)))?;
        fs::rename(&staged, &self.config_path)
            .map_err(|e| MmError::Config(failure("replace", &self.config_path, e)))
    }
}

fn config_path_for(dir_override: Option<OsString>) -> PathBuf {
    let dir = match dir_override {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(credentials_config::DIR_NAME),
    };
    dir.join(credentials_config::FILE_NAME)
}

fn failure(action: &str, path: &Path, err: impl Display) -> String {
    format!("Failed to {} credentials file {}: {}", action, path.display(), err)
}

fn write_owner_only(path: &Path, contents: &str) -> std::io::Result<()> {
    fs::write(path, contents)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }
    Ok(())
}
