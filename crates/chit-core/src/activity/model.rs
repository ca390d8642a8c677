//! Activity feed models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the recent-activity feed.
///
/// Ephemeral: created fresh on every aggregation call, discarded once
/// rendered. Only records with a parseable timestamp ever become entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActivityEntry {
    /// A committee was created.
    CommitteeCreated {
        committee_name: String,
        timestamp: DateTime<Utc>,
    },
    /// A bid was submitted in one of the member's committees.
    BidSubmitted {
        /// Winning bidder, or "unknown bidder" when the backend omitted it
        bidder_name: String,
        committee_name: String,
        amount: f64,
        /// Monthly share for the remaining cycle, when known
        monthly_share: Option<f64>,
        /// The committee's "3/12"-style summary, when a matching committee
        /// record was in the input
        bids_ratio: Option<String>,
        timestamp: DateTime<Utc>,
    },
}

impl ActivityEntry {
    /// Timestamp the feed is ordered by.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::CommitteeCreated { timestamp, .. } => *timestamp,
            Self::BidSubmitted { timestamp, .. } => *timestamp,
        }
    }

    /// Human-readable one-line message for display.
    pub fn message(&self) -> String {
        match self {
            Self::CommitteeCreated { committee_name, .. } => {
                format!("Committee created: {committee_name}")
            }
            Self::BidSubmitted {
                bidder_name,
                committee_name,
                amount,
                ..
            } => {
                format!("{bidder_name} won {committee_name} at ₹{amount}")
            }
        }
    }
}
