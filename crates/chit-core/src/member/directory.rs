//! Member directory port.
//!
//! Defines the interface for member lookups against the backend.

use super::model::MemberSummary;
use crate::committee::CommitteeId;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract directory for member lookups.
///
/// This trait decouples identity resolution and dashboard aggregation from
/// the specific transport (REST API, in-memory fixture, etc.).
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// Searches members by exact username.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<MemberSummary>)`: Matching members, possibly empty
    /// - `Err(_)`: Lookup failed; callers decide whether this is fatal
    async fn search_by_username(&self, username: &str) -> Result<Vec<MemberSummary>>;

    /// Lists the members enrolled in a committee.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<MemberSummary>)`: The committee's members, possibly empty
    /// - `Err(_)`: Lookup failed
    async fn list_by_committee(&self, committee_id: CommitteeId) -> Result<Vec<MemberSummary>>;
}
