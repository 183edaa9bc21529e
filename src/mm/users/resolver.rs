//! User resolution utilities

use log::debug;

use super::models::User;
use crate::error::Result;
use crate::mm::ChatApi;

/// Ways a user reference is looked up, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookup {
    Email,
    Username,
    Id,
}

impl Lookup {
    const ORDER: [Lookup; 3] = [Lookup::Email, Lookup::Username, Lookup::Id];

    async fn run<C>(self, client: &C, reference: &str) -> Result<Option<User>>
    where
        C: ChatApi + ?Sized,
    {
        match self {
            Lookup::Email => client.get_user_by_email(reference).await,
            Lookup::Username => client.get_user_by_username(reference).await,
            Lookup::Id => client.get_user(reference).await,
        }
    }
}

/// Resolve a user reference by email, then username, then ID
///
/// The first lookup that returns a user wins. A failed request counts as no
/// match and the next lookup is tried.
pub async fn resolve_user<C>(client: &C, reference: &str) -> Option<User>
where
    C: ChatApi + ?Sized,
{
    for lookup in Lookup::ORDER {
        match lookup.run(client, reference).await {
            Ok(Some(user)) => {
                debug!("Resolved user '{}' by {:?}", reference, lookup);
                return Some(user);
            }
            Ok(None) => debug!("No user with {:?} '{}'", lookup, reference),
            Err(e) => debug!("User {:?} lookup for '{}' failed: {}", lookup, reference, e),
        }
    }
    None
}
