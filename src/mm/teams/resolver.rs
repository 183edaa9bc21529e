//! Team resolution utilities
//!
//! A team reference may be either a team ID or a team name; there is no
//! syntax that tells them apart, so both lookups are tried.

use log::debug;

use super::models::Team;
use crate::mm::ChatApi;

/// Resolve a team reference (ID or name) to a team
///
/// Tries the ID lookup first and falls back to the name lookup. A failed
/// request counts as "not found" for either lookup, so `None` covers both a
/// missing team and an unreachable server.
pub async fn resolve_team<C>(client: &C, reference: &str) -> Option<Team>
where
    C: ChatApi + ?Sized,
{
    match client.get_team(reference).await {
        Ok(Some(team)) => {
            debug!("Resolved team '{}' by ID", reference);
            return Some(team);
        }
        Ok(None) => debug!("No team with ID '{}', trying name", reference),
        Err(e) => debug!("Team ID lookup for '{}' failed, trying name: {}", reference, e),
    }

    match client.get_team_by_name(reference).await {
        Ok(Some(team)) => {
            debug!("Resolved team '{}' by name (ID {})", reference, team.id);
            Some(team)
        }
        Ok(None) => {
            debug!("No team named '{}'", reference);
            None
        }
        Err(e) => {
            debug!("Team name lookup for '{}' failed: {}", reference, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mm::testing::{Call, FakeChatApi};

    #[tokio::test]
    async fn test_resolve_by_id_skips_name_lookup() {
        let api = FakeChatApi::new().with_team("teamId", "teamName");

        let team = resolve_team(&api, "teamId").await.unwrap();

        assert_eq!(team.id, "teamId");
        assert_eq!(api.calls(), vec![Call::GetTeam("teamId".to_string())]);
    }

    #[tokio::test]
    async fn test_resolve_by_name_after_id_miss() {
        let api = FakeChatApi::new().with_team("teamId", "teamName");

        let team = resolve_team(&api, "teamName").await.unwrap();

        assert_eq!(team.id, "teamId");
        assert_eq!(
            api.calls(),
            vec![
                Call::GetTeam("teamName".to_string()),
                Call::GetTeamByName("teamName".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_unresolved_reference() {
        let api = FakeChatApi::new().with_team("teamId", "teamName");

        assert!(resolve_team(&api, "unexistent").await.is_none());
        assert_eq!(api.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_lookup_error_counts_as_not_found() {
        let api = FakeChatApi::new()
            .with_team("teamId", "teamName")
            .with_id_lookup_error("teamName");

        // ID lookup errors, name lookup still runs and succeeds
        let team = resolve_team(&api, "teamName").await;
        assert_eq!(team.map(|t| t.id), Some("teamId".to_string()));
    }

    #[tokio::test]
    async fn test_lookup_errors_on_both_paths() {
        let api = FakeChatApi::new().with_lookup_error("down");

        assert!(resolve_team(&api, "down").await.is_none());
        assert_eq!(api.calls().len(), 2);
    }
}
