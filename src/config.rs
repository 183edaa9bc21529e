/// Configuration constants for the Mattermost REST API
pub mod api {
    /// Base path for API v4
    pub const BASE_PATH: &str = "/api/v4";

    /// Users endpoint
    pub const USERS: &str = "users";

    /// Teams endpoint
    pub const TEAMS: &str = "teams";

    /// Roles granted to a system administrator
    pub const SYSTEM_ADMIN_ROLES: &str = "system_user system_admin";

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable for the server URL
    pub const URL_ENV_VAR: &str = "MMCTL_URL";

    /// Environment variable for the access token
    pub const TOKEN_ENV_VAR: &str = "MMCTL_TOKEN";

    /// Environment variable selecting a named credentials entry
    pub const NAME_ENV_VAR: &str = "MMCTL_CREDENTIALS";

    /// Environment variable overriding the config directory
    pub const DIR_ENV_VAR: &str = "MMCTL_CONFIG_DIR";

    /// Config directory name (relative to HOME)
    pub const DIR_NAME: &str = ".mmctl";

    /// Config file name
    pub const FILE_NAME: &str = "config.json";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
