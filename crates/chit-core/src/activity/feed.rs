//! Bid grouping and the merged recent-activity feed.

use super::model::ActivityEntry;
use crate::bid::Bid;
use crate::committee::{Committee, CommitteeId};
use std::collections::BTreeMap;

/// Partitions bids by owning committee.
///
/// Within each group, bids are ordered by committee sequence number
/// descending; a missing number sorts last. The sort is stable, so bids with
/// equal (or equally missing) numbers keep their input order. No bid is
/// dropped or deduplicated — a bid naming an unknown committee still forms
/// its own group.
pub fn group_bids_by_committee(bids: Vec<Bid>) -> BTreeMap<CommitteeId, Vec<Bid>> {
    let mut grouped: BTreeMap<CommitteeId, Vec<Bid>> = BTreeMap::new();
    for bid in bids {
        grouped.entry(bid.committee_id).or_default().push(bid);
    }
    for group in grouped.values_mut() {
        // Missing sequence numbers as negative infinity
        group.sort_by_key(|b| std::cmp::Reverse(b.committee_number.unwrap_or(i64::MIN)));
    }
    grouped
}

/// Builds the merged recent-activity feed.
///
/// Emits one entry per committee and per bid that carries a creation
/// timestamp; records without one are skipped, never an error. Entries are
/// ordered by timestamp descending and truncated to `limit`. For equal
/// timestamps, committee entries come before bid entries — an ordering
/// guarantee only, with no business meaning.
pub fn build_recent_activity(
    committees: &[Committee],
    bids: &[Bid],
    limit: usize,
) -> Vec<ActivityEntry> {
    let mut entries = Vec::with_capacity(committees.len() + bids.len());

    for committee in committees {
        if let Some(timestamp) = committee.created_at {
            entries.push(ActivityEntry::CommitteeCreated {
                committee_name: committee.name.clone(),
                timestamp,
            });
        }
    }

    for bid in bids {
        let Some(timestamp) = bid.created_at else {
            continue;
        };
        let matching = committees.iter().find(|c| c.id == bid.committee_id);
        let committee_name = match &bid.committee_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => matching
                .map(|c| c.name.clone())
                .unwrap_or_else(|| bid.committee_label()),
        };
        entries.push(ActivityEntry::BidSubmitted {
            bidder_name: bid
                .bidder_name
                .clone()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| "unknown bidder".to_string()),
            committee_name,
            amount: bid.amount,
            monthly_share: bid.monthly_share,
            bids_ratio: matching.and_then(|c| c.bids_ratio.clone()),
            timestamp,
        });
    }

    // Stable sort keeps committees-before-bids for equal timestamps
    entries.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    entries.truncate(limit);
    entries
}
