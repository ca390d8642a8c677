//! Bid domain model.

use crate::committee::CommitteeId;
use crate::member::MemberId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Backend-assigned bid identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BidId(pub u64);

impl std::fmt::Display for BidId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A settled claim for a committee's payout round.
///
/// Committee name and sequence number are denormalized copies sent by the
/// backend; either may be missing on older records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bid {
    pub id: BidId,
    pub committee_id: CommitteeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committee_name: Option<String>,
    /// Round number within the committee cycle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committee_number: Option<i64>,
    pub bidder_id: MemberId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bidder_name: Option<String>,
    /// Winning bid amount
    pub amount: f64,
    /// Monthly share for the remaining cycle after this bid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_share: Option<f64>,
    /// When the bid was placed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid_date: Option<DateTime<Utc>>,
    /// When the record was created; `None` when missing or unparseable upstream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Bid {
    /// Committee label for display: the denormalized name when present,
    /// otherwise `Committee #<id>`.
    pub fn committee_label(&self) -> String {
        match &self.committee_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("Committee #{}", self.committee_id),
        }
    }
}
