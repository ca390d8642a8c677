//! Member-id resolution over the session payload.
//!
//! Priority order is a hard contract: an id embedded in the session payload
//! always wins over a searched one, which always wins over the raw session
//! id. The embedded value is the most likely to be authoritative; the raw
//! session id is the most likely to be a different namespace entirely.

use super::model::SessionIdentity;
use crate::error::{ChitError, Result};
use crate::member::{MemberDirectory, MemberId};
use serde_json::Value;

/// A named probe for a member id embedded somewhere in the session payload.
type Accessor = (&'static str, fn(&SessionIdentity) -> Option<&Value>);

/// Known spellings/nestings of the embedded member id, tried in order.
const EMBEDDED_ID_ACCESSORS: &[Accessor] = &[
    ("memberId", |s| s.extra.get("memberId")),
    ("memberID", |s| s.extra.get("memberID")),
    ("member.id", |s| s.extra.get("member").and_then(|m| m.get("id"))),
];

/// Resolves the canonical backend member id for an authenticated session.
///
/// Tries, in strict order, short-circuiting on first success:
/// 1. An id embedded in the session payload (see [`EMBEDDED_ID_ACCESSORS`]).
/// 2. A username search through `directory`; the first match wins. Any
///    directory error is swallowed and treated as "no match".
/// 3. The session's own opaque id.
///
/// Every candidate must parse to a finite integer strictly greater than
/// zero. When all three sources fail, returns [`ChitError::Resolution`] —
/// callers must not fall back to a zero or invented id.
pub async fn resolve_member_id(
    session: &SessionIdentity,
    directory: &dyn MemberDirectory,
) -> Result<MemberId> {
    if let Some(id) = embedded_member_id(session) {
        return Ok(id);
    }

    if let Some(id) = searched_member_id(session, directory).await {
        return Ok(id);
    }

    if let Some(id) = MemberId::from_value(&session.id) {
        tracing::debug!(member_id = %id, "falling back to session id as member id");
        return Ok(id);
    }

    Err(ChitError::resolution(format!(
        "no valid member id in session payload, search, or session id (username: '{}')",
        session.username
    )))
}

/// First valid id found among the known embedded-field spellings.
fn embedded_member_id(session: &SessionIdentity) -> Option<MemberId> {
    EMBEDDED_ID_ACCESSORS.iter().find_map(|(field, accessor)| {
        let id = accessor(session).and_then(MemberId::from_value)?;
        tracing::debug!(member_id = %id, field, "using member id embedded in session payload");
        Some(id)
    })
}

/// First search match with a valid id, or `None` on miss or lookup failure.
async fn searched_member_id(
    session: &SessionIdentity,
    directory: &dyn MemberDirectory,
) -> Option<MemberId> {
    if session.username.trim().is_empty() {
        return None;
    }

    let matches = match directory.search_by_username(&session.username).await {
        Ok(matches) => matches,
        Err(err) => {
            tracing::warn!(username = %session.username, error = %err, "member search failed, continuing fallback chain");
            return None;
        }
    };

    if matches.len() > 1 {
        tracing::warn!(
            username = %session.username,
            count = matches.len(),
            "username search returned multiple members, taking the first"
        );
    }

    // Only the first match is consulted; an invalid id there means the
    // whole search step fails, not a retry with the second match.
    let id = matches.first().and_then(|m| m.member_id)?;
    tracing::debug!(member_id = %id, "resolved member id via username search");
    Some(id)
}
