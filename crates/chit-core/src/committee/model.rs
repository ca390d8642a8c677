//! Committee domain model.

use crate::member::MemberId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Backend-assigned committee identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CommitteeId(pub u64);

impl std::fmt::Display for CommitteeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A periodic group-savings/bidding pool.
///
/// Share and payout figures are computed by the backend; this model only
/// carries them for display. Fields the backend may omit are optional and
/// never invented on this side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Committee {
    pub id: CommitteeId,
    /// Display name; the server-calculated name when one exists
    pub name: String,
    pub owner_id: MemberId,
    /// Owner display name; blank on some backend versions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    /// Enrolled member count
    pub members_count: u32,
    /// Creation timestamp; `None` when missing or unparseable upstream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Total pool amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_amount: Option<f64>,
    /// Per-member monthly share for the current cycle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_share: Option<f64>,
    /// Number of rounds already bid out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bids_count: Option<u32>,
    /// Summary like "3/12": rounds bid out of total rounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bids_ratio: Option<String>,
}

impl Committee {
    /// Owner label for grouping and display: the owner name when the backend
    /// sent a non-blank one, otherwise the owner id rendered as text.
    pub fn owner_label(&self) -> String {
        match &self.owner_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => self.owner_id.to_string(),
        }
    }
}
