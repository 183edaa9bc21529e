//! Stored credentials data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level credentials file
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct CredentialsConfig {
    /// Name of the credentials used when none is selected explicitly
    #[serde(rename = "current-credentials", skip_serializing_if = "Option::is_none")]
    pub current_credentials: Option<String>,
    /// Map of name to credentials
    #[serde(default)]
    pub credentials: BTreeMap<String, Credentials>,
}

/// Server URL and access token for one server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub url: String,
    pub token: String,
}

impl CredentialsConfig {
    /// Comma-separated list of stored names, for error messages
    pub fn available_names(&self) -> String {
        if self.credentials.is_empty() {
            "<none>".to_string()
        } else {
            self.credentials.keys().cloned().collect::<Vec<_>>().join(", ")
        }
    }
}
