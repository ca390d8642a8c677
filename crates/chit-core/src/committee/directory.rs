//! Committee directory port.

use super::model::{Committee, CommitteeId};
use crate::error::Result;
use crate::member::MemberId;
use async_trait::async_trait;

/// An abstract directory for committee lookups.
///
/// Implementations talk to the backend REST API; tests substitute fixtures.
/// Each call may fail independently — callers degrade to an empty list and
/// surface the error message rather than aborting sibling fetches.
#[async_trait]
pub trait CommitteeDirectory: Send + Sync {
    /// Lists committees the given member participates in.
    async fn list_by_member(&self, member_id: MemberId) -> Result<Vec<Committee>>;

    /// Lists committees the given member owns.
    async fn list_by_owner(&self, owner_id: MemberId) -> Result<Vec<Committee>>;

    /// Fetches a single committee by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Committee))`: Committee found
    /// - `Ok(None)`: No committee with that id
    /// - `Err(_)`: Lookup failed
    async fn get_by_id(&self, committee_id: CommitteeId) -> Result<Option<Committee>>;
}
