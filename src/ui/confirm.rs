//! User confirmation prompts for destructive operations

use dialoguer::Confirm;

/// Ask the user to confirm an action
///
/// Returns `true` without prompting when `assume_yes` is set. In batch mode
/// without `assume_yes` the action is declined.
pub fn confirm_action(
    prompt: &str,
    assume_yes: bool,
    batch: bool,
) -> Result<bool, dialoguer::Error> {
    if assume_yes {
        return Ok(true);
    }
    if batch {
        eprintln!("{} declined in batch mode (use --yes to confirm)", prompt);
        return Ok(false);
    }
    Confirm::new().with_prompt(prompt).default(false).interact()
}
