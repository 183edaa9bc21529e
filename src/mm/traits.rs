//! The server operations the command handlers depend on

use async_trait::async_trait;

use crate::error::Result;
use crate::mm::teams::Team;
use crate::mm::users::{NewUser, User};
use crate::mm::MmClient;

/// Remote operations used by the user commands
///
/// `MmClient` implements this against the REST API; tests substitute a
/// recording fake. Lookups return `Ok(None)` when the server has no match.
#[async_trait]
pub trait ChatApi: Send + Sync {
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    async fn get_user(&self, user_id: &str) -> Result<Option<User>>;

    async fn get_team(&self, team_id: &str) -> Result<Option<Team>>;

    async fn get_team_by_name(&self, name: &str) -> Result<Option<Team>>;

    /// Ask the server to send email invites. The server does not report
    /// whether any email was delivered.
    async fn invite_users_to_team(&self, team_id: &str, emails: &[String]) -> Result<()>;

    async fn create_user(&self, user: &NewUser) -> Result<User>;

    async fn update_user_roles(&self, user_id: &str, roles: &str) -> Result<()>;
}

#[async_trait]
impl ChatApi for MmClient {
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        MmClient::get_user_by_email(self, email).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        MmClient::get_user_by_username(self, username).await
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        MmClient::get_user(self, user_id).await
    }

    async fn get_team(&self, team_id: &str) -> Result<Option<Team>> {
        MmClient::get_team(self, team_id).await
    }

    async fn get_team_by_name(&self, name: &str) -> Result<Option<Team>> {
        MmClient::get_team_by_name(self, name).await
    }

    async fn invite_users_to_team(&self, team_id: &str, emails: &[String]) -> Result<()> {
        MmClient::invite_users_to_team(self, team_id, emails).await
    }

    async fn create_user(&self, user: &NewUser) -> Result<User> {
        MmClient::create_user(self, user).await
    }

    async fn update_user_roles(&self, user_id: &str, roles: &str) -> Result<()> {
        MmClient::update_user_roles(self, user_id, roles).await
    }
}
