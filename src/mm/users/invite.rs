//! Inviting one user to several teams
//!
//! Every team reference yields exactly one outcome, in input order. A failure
//! for one team never stops the others.

use log::debug;

use crate::mm::teams::resolve_team;
use crate::mm::ChatApi;
use crate::output::Printer;

/// Line printed for every accepted invite. The server does not confirm
/// delivery, hence the hedge.
pub const INVITE_SENT_MESSAGE: &str = "Invites may or may not have been sent.";

/// Result of inviting the user to one team reference
#[derive(Debug, Clone, PartialEq)]
pub enum InviteOutcome {
    /// The server accepted the invite request
    Sent,
    /// Neither an ID nor a name lookup found the team
    TeamNotFound { reference: String },
    /// The team was found but the invite request failed
    InviteFailed { team_name: String, detail: String },
}

impl InviteOutcome {
    /// Write this outcome as one line on the success or error stream
    pub fn report(&self, email: &str, printer: &mut Printer) {
        match self {
            InviteOutcome::Sent => printer.print_line(INVITE_SENT_MESSAGE),
            InviteOutcome::TeamNotFound { reference } => {
                printer.print_error(format!("Can't find team '{}'", reference))
            }
            InviteOutcome::InviteFailed { team_name, detail } => {
                printer.print_error(format!(
                    "Unable to invite user with email {} to team {}. Error: {}",
                    email, team_name, detail
                ))
            }
        }
    }
}

/// Invite `email` to each referenced team, one team at a time
///
/// Unresolved references make no invite call.
pub async fn invite_to_teams<C>(
    client: &C,
    email: &str,
    references: &[String],
) -> Vec<InviteOutcome>
where
    C: ChatApi + ?Sized,
{
    let mut outcomes = Vec::with_capacity(references.len());
    let emails = [email.to_string()];

    for reference in references {
        let outcome = match resolve_team(client, reference).await {
            None => InviteOutcome::TeamNotFound {
                reference: reference.clone(),
            },
            Some(team) => match client.invite_users_to_team(&team.id, &emails).await {
                Ok(()) => {
                    debug!("Invite for {} to team {} accepted", email, team.id);
                    InviteOutcome::Sent
                }
                Err(e) => InviteOutcome::InviteFailed {
                    team_name: team.name,
                    detail: e.to_string(),
                },
            },
        };
        outcomes.push(outcome);
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::mm::testing::{Call, FakeChatApi};

    const EMAIL: &str = "example@example.com";

    fn refs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn report_all(outcomes: &[InviteOutcome]) -> Printer {
        let mut printer = Printer::new(OutputFormat::Plain);
        for outcome in outcomes {
            outcome.report(EMAIL, &mut printer);
        }
        printer
    }

    #[tokio::test]
    async fn test_invite_by_id() {
        let api = FakeChatApi::new().with_team("teamId", "teamName");

        let outcomes = invite_to_teams(&api, EMAIL, &refs(&["teamId"])).await;

        assert_eq!(outcomes, vec![InviteOutcome::Sent]);
        assert_eq!(
            api.calls(),
            vec![
                Call::GetTeam("teamId".to_string()),
                Call::InviteUsersToTeam("teamId".to_string(), vec![EMAIL.to_string()]),
            ]
        );
    }

    #[tokio::test]
    async fn test_invite_by_name_uses_resolved_id() {
        let api = FakeChatApi::new().with_team("teamId", "teamName");

        let outcomes = invite_to_teams(&api, EMAIL, &refs(&["teamName"])).await;

        assert_eq!(outcomes, vec![InviteOutcome::Sent]);
        assert_eq!(
            api.invites(),
            vec![("teamId".to_string(), vec![EMAIL.to_string()])]
        );
    }

    #[tokio::test]
    async fn test_unresolved_team_makes_no_invite_call() {
        let api = FakeChatApi::new();

        let outcomes = invite_to_teams(&api, EMAIL, &refs(&["unexistent"])).await;

        assert_eq!(
            outcomes,
            vec![InviteOutcome::TeamNotFound {
                reference: "unexistent".to_string()
            }]
        );
        assert!(api.invites().is_empty());

        let printer = report_all(&outcomes);
        assert!(printer.lines().is_empty());
        assert_eq!(printer.error_lines(), ["Can't find team 'unexistent'"]);
    }

    #[tokio::test]
    async fn test_failed_invite_reports_team_name() {
        let api = FakeChatApi::new()
            .with_team("teamId", "teamName")
            .with_invite_error("teamId");

        let outcomes = invite_to_teams(&api, EMAIL, &refs(&["teamId"])).await;
        let printer = report_all(&outcomes);

        assert!(printer.lines().is_empty());
        assert_eq!(
            printer.error_lines(),
            ["Unable to invite user with email example@example.com to team teamName. \
              Error: API error (status 500): Mock Error"]
        );
    }

    #[tokio::test]
    async fn test_several_teams_by_name_and_id() {
        let api = FakeChatApi::new()
            .with_team("teamId1", "teamName1")
            .with_team("teamId2", "teamName2")
            .with_team("teamId3", "teamName3")
            .with_team("teamId4", "teamName4");

        let references = refs(&["teamName1", "teamId2", "teamId3", "teamName4"]);
        let outcomes = invite_to_teams(&api, EMAIL, &references).await;

        assert_eq!(outcomes, vec![InviteOutcome::Sent; 4]);
        let invited: Vec<String> = api.invites().into_iter().map(|(id, _)| id).collect();
        assert_eq!(invited, refs(&["teamId1", "teamId2", "teamId3", "teamId4"]));

        let printer = report_all(&outcomes);
        assert_eq!(printer.lines().len(), 4);
        for line in printer.lines() {
            assert_eq!(line.as_text(), Some(INVITE_SENT_MESSAGE));
        }
        assert!(printer.error_lines().is_empty());
    }

    #[tokio::test]
    async fn test_mixed_teams_keep_order_and_continue_after_failures() {
        let api = FakeChatApi::new()
            .with_team("teamId1", "teamName1")
            .with_team("teamId3", "teamName3")
            .with_team("teamId4", "teamName4")
            .with_team("reject", "rejectName")
            .with_team("teamId6", "teamName6")
            .with_invite_error("reject");

        let references = refs(&[
            "teamName1",
            "unexistent",
            "teamId3",
            "teamName4",
            "reject",
            "teamId6",
        ]);
        let outcomes = invite_to_teams(&api, EMAIL, &references).await;

        assert_eq!(outcomes.len(), references.len());
        assert_eq!(
            outcomes[1],
            InviteOutcome::TeamNotFound {
                reference: "unexistent".to_string()
            }
        );
        assert!(matches!(
            &outcomes[4],
            InviteOutcome::InviteFailed { team_name, .. } if team_name == "rejectName"
        ));

        // ID hits skip the name lookup; name hits do one miss then one hit
        let name_lookups: Vec<Call> = api
            .calls()
            .into_iter()
            .filter(|c| matches!(c, Call::GetTeamByName(_)))
            .collect();
        assert_eq!(
            name_lookups,
            vec![
                Call::GetTeamByName("teamName1".to_string()),
                Call::GetTeamByName("unexistent".to_string()),
                Call::GetTeamByName("teamName4".to_string()),
            ]
        );

        let invited: Vec<String> = api.invites().into_iter().map(|(id, _)| id).collect();
        assert_eq!(
            invited,
            refs(&["teamId1", "teamId3", "teamId4", "reject", "teamId6"])
        );

        let printer = report_all(&outcomes);
        assert_eq!(printer.lines().len(), 4);
        assert_eq!(printer.error_lines().len(), 2);
        assert_eq!(printer.error_lines()[0], "Can't find team 'unexistent'");
        assert_eq!(
            printer.error_lines()[1],
            "Unable to invite user with email example@example.com to team rejectName. \
             Error: API error (status 500): Mock Error"
        );
    }

    #[tokio::test]
    async fn test_lookup_failure_is_reported_as_not_found() {
        let api = FakeChatApi::new().with_lookup_error("teamX");

        let outcomes = invite_to_teams(&api, EMAIL, &refs(&["teamX"])).await;

        assert_eq!(
            outcomes,
            vec![InviteOutcome::TeamNotFound {
                reference: "teamX".to_string()
            }]
        );
        assert!(api.invites().is_empty());
    }
}
