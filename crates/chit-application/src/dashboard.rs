//! Dashboard use case: concurrent fetch orchestration with partial-failure
//! tolerance.
//!
//! The three primary fetches run concurrently and degrade independently: a
//! failed source contributes an empty collection and a retained error
//! message, never discarding what the sibling fetches returned. Member-count
//! fetches fan out per committee; a failed count contributes zero.

use chit_core::activity::{ActivityEntry, build_recent_activity, group_bids_by_committee};
use chit_core::bid::{Bid, BidDirectory};
use chit_core::committee::{Committee, CommitteeDirectory, CommitteeId};
use chit_core::error::Result;
use chit_core::member::{MemberDirectory, MemberId};
use futures::future::join_all;
use std::collections::BTreeMap;
use std::sync::Arc;

/// How many entries the recent-activity feed keeps.
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Everything the dashboard screen renders from one load.
///
/// `errors` carries the messages of sources that failed; the remaining
/// fields hold whatever loaded successfully.
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// Committees the member participates in
    pub committees: Vec<Committee>,
    /// Committees the member owns
    pub owned_committees: Vec<Committee>,
    /// The member's bids, ungrouped
    pub bids: Vec<Bid>,
    /// Bids grouped by committee, each group ordered by round number descending
    pub grouped_bids: BTreeMap<CommitteeId, Vec<Bid>>,
    /// Sum of member counts across the member's committees
    pub total_members: u64,
    /// Merged feed, newest first, capped at [`RECENT_ACTIVITY_LIMIT`]
    pub recent_activity: Vec<ActivityEntry>,
    /// Messages from sources that failed to load
    pub errors: Vec<String>,
}

/// Use case assembling the dashboard from the directory ports.
pub struct DashboardUseCase {
    committees: Arc<dyn CommitteeDirectory>,
    bids: Arc<dyn BidDirectory>,
    members: Arc<dyn MemberDirectory>,
}

impl DashboardUseCase {
    pub fn new(
        committees: Arc<dyn CommitteeDirectory>,
        bids: Arc<dyn BidDirectory>,
        members: Arc<dyn MemberDirectory>,
    ) -> Self {
        Self {
            committees,
            bids,
            members,
        }
    }

    /// Loads the dashboard for a resolved member.
    ///
    /// Taking a [`MemberId`] makes the "valid id before any fetch" guard a
    /// type-level fact; resolution failures surface earlier, from
    /// [`crate::session::SessionService::current_member_id`].
    pub async fn load(&self, member_id: MemberId) -> DashboardView {
        let (member_result, owner_result, bids_result) = tokio::join!(
            self.committees.list_by_member(member_id),
            self.committees.list_by_owner(member_id),
            self.bids.list_by_member(member_id),
        );

        let mut errors = Vec::new();
        let committees = degrade(member_result, "committees by member", &mut errors);
        let owned_committees = degrade(owner_result, "committees by owner", &mut errors);
        let bids = degrade(bids_result, "bids by member", &mut errors);

        let total_members = self.total_members(&committees).await;
        let recent_activity = build_recent_activity(&committees, &bids, RECENT_ACTIVITY_LIMIT);
        let grouped_bids = group_bids_by_committee(bids.clone());

        DashboardView {
            committees,
            owned_committees,
            bids,
            grouped_bids,
            total_members,
            recent_activity,
            errors,
        }
    }

    /// Sums member counts across committees, one fetch per committee, all
    /// in flight at once. A failed fetch counts that committee as zero.
    async fn total_members(&self, committees: &[Committee]) -> u64 {
        let counts = join_all(committees.iter().map(|committee| {
            let members = Arc::clone(&self.members);
            let id = committee.id;
            async move {
                match members.list_by_committee(id).await {
                    Ok(list) => list.len() as u64,
                    Err(err) => {
                        tracing::warn!(committee_id = %id, error = %err, "member count fetch failed, counting zero");
                        0
                    }
                }
            }
        }))
        .await;
        counts.into_iter().sum()
    }
}

/// Unwraps a fetch result, degrading a failure to an empty collection and
/// recording its message.
fn degrade<T>(result: Result<Vec<T>>, source: &str, errors: &mut Vec<String>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(source, error = %err, "fetch failed, degrading to empty");
            errors.push(format!("{source}: {err}"));
            Vec::new()
        }
    }
}
