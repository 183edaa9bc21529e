//! In-memory `ChatApi` that records every call, for handler tests

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{MmError, Result};
use crate::mm::teams::Team;
use crate::mm::users::{NewUser, User};
use crate::mm::ChatApi;

/// One recorded remote call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetUserByEmail(String),
    GetUserByUsername(String),
    GetUser(String),
    GetTeam(String),
    GetTeamByName(String),
    InviteUsersToTeam(String, Vec<String>),
    CreateUser(NewUser),
    UpdateUserRoles(String, String),
}

#[derive(Default)]
pub struct FakeChatApi {
    teams: Vec<Team>,
    users: Vec<User>,
    /// References whose every lookup fails
    failing_lookups: HashSet<String>,
    /// References whose ID lookup fails
    failing_id_lookups: HashSet<String>,
    /// Team IDs whose invite fails
    failing_invites: HashSet<String>,
    create_error: Option<String>,
    roles_error: Option<String>,
    calls: Mutex<Vec<Call>>,
}

fn remote_error(message: &str) -> MmError {
    MmError::Api {
        status: 500,
        message: message.to_string(),
    }
}

impl FakeChatApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_team(mut self, id: &str, name: &str) -> Self {
        self.teams.push(Team {
            id: id.to_string(),
            name: name.to_string(),
            display_name: name.to_string(),
            ..Default::default()
        });
        self
    }

    pub fn with_user(mut self, id: &str, username: &str, email: &str) -> Self {
        self.users.push(User {
            id: id.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            ..Default::default()
        });
        self
    }

    pub fn with_lookup_error(mut self, reference: &str) -> Self {
        self.failing_lookups.insert(reference.to_string());
        self
    }

    pub fn with_id_lookup_error(mut self, reference: &str) -> Self {
        self.failing_id_lookups.insert(reference.to_string());
        self
    }

    pub fn with_invite_error(mut self, team_id: &str) -> Self {
        self.failing_invites.insert(team_id.to_string());
        self
    }

    pub fn with_create_error(mut self, message: &str) -> Self {
        self.create_error = Some(message.to_string());
        self
    }

    pub fn with_roles_error(mut self, message: &str) -> Self {
        self.roles_error = Some(message.to_string());
        self
    }

    /// All calls made so far, in order
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Invite calls made so far, as (team ID, emails)
    pub fn invites(&self) -> Vec<(String, Vec<String>)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::InviteUsersToTeam(team_id, emails) => Some((team_id, emails)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn lookup<T: Clone>(
        &self,
        reference: &str,
        by_id: bool,
        items: &[T],
        matches: impl Fn(&T) -> bool,
    ) -> Result<Option<T>> {
        if self.failing_lookups.contains(reference)
            || (by_id && self.failing_id_lookups.contains(reference))
        {
            return Err(remote_error("lookup failed"));
        }
        Ok(items.iter().find(|item| matches(item)).cloned())
    }
}

#[async_trait]
impl ChatApi for FakeChatApi {
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.record(Call::GetUserByEmail(email.to_string()));
        self.lookup(email, false, &self.users, |u| u.email == email)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.record(Call::GetUserByUsername(username.to_string()));
        self.lookup(username, false, &self.users, |u| u.username == username)
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        self.record(Call::GetUser(user_id.to_string()));
        self.lookup(user_id, true, &self.users, |u| u.id == user_id)
    }

    async fn get_team(&self, team_id: &str) -> Result<Option<Team>> {
        self.record(Call::GetTeam(team_id.to_string()));
        self.lookup(team_id, true, &self.teams, |t| t.id == team_id)
    }

    async fn get_team_by_name(&self, name: &str) -> Result<Option<Team>> {
        self.record(Call::GetTeamByName(name.to_string()));
        self.lookup(name, false, &self.teams, |t| t.name == name)
    }

    async fn invite_users_to_team(&self, team_id: &str, emails: &[String]) -> Result<()> {
        self.record(Call::InviteUsersToTeam(team_id.to_string(), emails.to_vec()));
        if self.failing_invites.contains(team_id) {
            return Err(remote_error("Mock Error"));
        }
        Ok(())
    }

    async fn create_user(&self, user: &NewUser) -> Result<User> {
        self.record(Call::CreateUser(user.clone()));
        if let Some(message) = &self.create_error {
            return Err(remote_error(message));
        }
        Ok(User {
            id: "newUserId".to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            nickname: user.nickname.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            locale: user.locale.clone(),
            roles: "system_user".to_string(),
            ..Default::default()
        })
    }

    async fn update_user_roles(&self, user_id: &str, roles: &str) -> Result<()> {
        self.record(Call::UpdateUserRoles(user_id.to_string(), roles.to_string()));
        if let Some(message) = &self.roles_error {
            return Err(remote_error(message));
        }
        Ok(())
    }
}
