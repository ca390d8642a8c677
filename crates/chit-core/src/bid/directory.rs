//! Bid directory port.

use super::model::Bid;
use crate::committee::CommitteeId;
use crate::error::Result;
use crate::member::MemberId;
use async_trait::async_trait;

/// An abstract directory for bid lookups.
///
/// Same degrade-to-empty contract as [`crate::committee::CommitteeDirectory`]:
/// a failed call surfaces an error message but never blocks sibling fetches.
#[async_trait]
pub trait BidDirectory: Send + Sync {
    /// Lists bids across the committees the given member participates in.
    async fn list_by_member(&self, member_id: MemberId) -> Result<Vec<Bid>>;

    /// Lists the bids placed within a single committee.
    async fn list_by_committee(&self, committee_id: CommitteeId) -> Result<Vec<Bid>>;
}
