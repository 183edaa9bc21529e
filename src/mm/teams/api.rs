//! Team API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::mm::MmClient;

use super::models::Team;

impl MmClient {
    /// Get a team by ID
    pub async fn get_team(&self, team_id: &str) -> Result<Option<Team>> {
        let path = format!("/{}/{}", api::TEAMS, urlencoding::encode(team_id));
        self.fetch_resource_by_path::<Team>(&path, &format!("team '{}'", team_id))
            .await
    }

    /// Get a team by its unique name
    pub async fn get_team_by_name(&self, name: &str) -> Result<Option<Team>> {
        let path = format!("/{}/name/{}", api::TEAMS, urlencoding::encode(name));
        self.fetch_resource_by_path::<Team>(&path, &format!("team named '{}'", name))
            .await
    }

    /// Send email invites to join a team
    pub async fn invite_users_to_team(&self, team_id: &str, emails: &[String]) -> Result<()> {
        let url = format!(
            "{}/{}/{}/invite/email",
            self.base_url(),
            api::TEAMS,
            urlencoding::encode(team_id)
        );

        debug!("Inviting {:?} to team {}", emails, team_id);

        let response = self.post(&url).json(emails).send().await?;

        if response.status().is_success() {
            debug!("Invite request for team {} accepted", team_id);
            Ok(())
        } else {
            Err(Self::api_error(
                response,
                &format!("Failed to invite users to team '{}'", team_id),
            )
            .await)
        }
    }
}
