//! User API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::mm::MmClient;

use super::models::{NewUser, UpdateRolesRequest, User};

impl MmClient {
    /// Get a user by email address
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let path = format!("/{}/email/{}", api::USERS, urlencoding::encode(email));
        self.fetch_resource_by_path::<User>(&path, &format!("user with email '{}'", email))
            .await
    }

    /// Get a user by username
    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let path = format!("/{}/username/{}", api::USERS, urlencoding::encode(username));
        self.fetch_resource_by_path::<User>(&path, &format!("user '{}'", username))
            .await
    }

    /// Get a user by ID
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        let path = format!("/{}/{}", api::USERS, urlencoding::encode(user_id));
        self.fetch_resource_by_path::<User>(&path, &format!("user ID '{}'", user_id))
            .await
    }

    /// Create a user
    pub async fn create_user(&self, user: &NewUser) -> Result<User> {
        let url = format!("{}/{}", self.base_url(), api::USERS);

        debug!("Creating user {} <{}>", user.username, user.email);

        let response = self.post(&url).json(user).send().await?;
        let created: User = self
            .parse_api_response(response, &format!("create user '{}'", user.username))
            .await?;

        debug!("Created user {} (ID {})", created.username, created.id);
        Ok(created)
    }

    /// Replace a user's roles (space-separated role names)
    pub async fn update_user_roles(&self, user_id: &str, roles: &str) -> Result<()> {
        let url = format!(
            "{}/{}/{}/roles",
            self.base_url(),
            api::USERS,
            urlencoding::encode(user_id)
        );

        debug!("Setting roles of user {} to '{}'", user_id, roles);

        let response = self
            .put(&url)
            .json(&UpdateRolesRequest { roles })
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::api_error(
                response,
                &format!("Failed to update roles of user '{}'", user_id),
            )
            .await)
        }
    }
}
