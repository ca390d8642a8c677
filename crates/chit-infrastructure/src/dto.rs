//! Backend DTOs and their mapping into domain models.
//!
//! The Spring backend spells "committee" as `comitte` throughout its JSON;
//! the renames here keep that quirk at the wire boundary only. Mapping is
//! lenient: malformed timestamps become `None`, a record with an unusable
//! id maps to `None` and is dropped by the caller.

use chit_core::bid::{Bid, BidId};
use chit_core::committee::{Committee, CommitteeId};
use chit_core::member::{MemberId, MemberSummary};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// `GET /comittes/...` response item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComitteResponseDto {
    pub comitte_id: u64,
    pub owner_id: Value,
    #[serde(default)]
    pub owner_name: Option<String>,
    pub comitte_name: String,
    #[serde(default)]
    pub calculated_comitte_name: Option<String>,
    /// ISO date (LocalDate on the backend)
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub full_amount: Option<f64>,
    #[serde(default)]
    pub members_count: Option<u32>,
    #[serde(default)]
    pub full_share: Option<f64>,
    #[serde(default)]
    pub bids_count: Option<u32>,
    /// String on current backends, bare number on older ones
    #[serde(default)]
    pub bids_ratio: Option<Value>,
    #[serde(default)]
    pub created_timestamp: Option<String>,
    #[serde(default)]
    pub updated_timestamp: Option<String>,
}

/// `GET /comittes/{id}/bids` and `/bids/member/{id}` response item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidResponseDto {
    pub bid_id: u64,
    pub comitte_id: u64,
    #[serde(default)]
    pub comitte_name: Option<String>,
    #[serde(default)]
    pub comitte_number: Option<i64>,
    pub final_bidder_id: Value,
    #[serde(default)]
    pub final_bidder_name: Option<String>,
    pub final_bid_amt: f64,
    /// Monthly share for the remaining cycle after this bid
    #[serde(default)]
    pub full_share: Option<f64>,
    #[serde(default)]
    pub bid_date: Option<String>,
    #[serde(default)]
    pub created_timestamp: Option<String>,
    #[serde(default)]
    pub updated_timestamp: Option<String>,
}

/// `GET /members/search` and `/comittes/{id}/members` response item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponseDto {
    pub member_id: Value,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub created_timestamp: Option<String>,
}

/// Parses backend timestamps leniently.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.fff]`, and a bare
/// `YYYY-MM-DD` date (taken as midnight UTC). Anything else is `None`.
pub fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    None
}

fn ratio_to_string(ratio: &Value) -> Option<String> {
    match ratio {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl ComitteResponseDto {
    /// Maps into the domain model.
    ///
    /// The server-calculated name is preferred over the raw one. The
    /// creation timestamp falls back to the start date when the backend
    /// omitted `createdTimestamp` (the original client listed committees by
    /// start date for the same reason). Returns `None` when the owner id is
    /// unusable.
    pub fn into_domain(self) -> Option<Committee> {
        let owner_id = MemberId::from_value(&self.owner_id)?;
        let created_at = parse_timestamp(self.created_timestamp.as_deref())
            .or_else(|| parse_timestamp(self.start_date.as_deref()));
        Some(Committee {
            id: CommitteeId(self.comitte_id),
            name: self
                .calculated_comitte_name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or(self.comitte_name),
            owner_id,
            owner_name: self.owner_name.filter(|n| !n.trim().is_empty()),
            members_count: self.members_count.unwrap_or(0),
            created_at,
            full_amount: self.full_amount,
            monthly_share: self.full_share,
            bids_count: self.bids_count,
            bids_ratio: self.bids_ratio.as_ref().and_then(ratio_to_string),
        })
    }
}

impl BidResponseDto {
    /// Maps into the domain model; `None` when the bidder id is unusable.
    pub fn into_domain(self) -> Option<Bid> {
        let bidder_id = MemberId::from_value(&self.final_bidder_id)?;
        Some(Bid {
            id: BidId(self.bid_id),
            committee_id: CommitteeId(self.comitte_id),
            committee_name: self.comitte_name.filter(|n| !n.trim().is_empty()),
            committee_number: self.comitte_number,
            bidder_id,
            bidder_name: self.final_bidder_name.filter(|n| !n.trim().is_empty()),
            amount: self.final_bid_amt,
            monthly_share: self.full_share,
            bid_date: parse_timestamp(self.bid_date.as_deref()),
            created_at: parse_timestamp(self.created_timestamp.as_deref()),
        })
    }
}

impl MemberResponseDto {
    /// Maps into the domain model. The id is validated but kept optional so
    /// the identity resolver can apply its own failure semantics.
    pub fn into_domain(self) -> MemberSummary {
        MemberSummary {
            member_id: MemberId::from_value(&self.member_id),
            username: self.username,
            name: self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn committee_dto(value: Value) -> ComitteResponseDto {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_committee_prefers_calculated_name() {
        let committee = committee_dto(json!({
            "comitteId": 1,
            "ownerId": 9,
            "comitteName": "raw",
            "calculatedComitteName": "Jan24 x 12"
        }))
        .into_domain()
        .unwrap();

        assert_eq!(committee.name, "Jan24 x 12");
        assert_eq!(committee.id, CommitteeId(1));
    }

    #[test]
    fn test_committee_blank_owner_name_dropped() {
        let committee = committee_dto(json!({
            "comitteId": 1,
            "ownerId": 9,
            "ownerName": "  ",
            "comitteName": "raw"
        }))
        .into_domain()
        .unwrap();

        assert_eq!(committee.owner_name, None);
        assert_eq!(committee.owner_label(), "9");
    }

    #[test]
    fn test_committee_created_at_falls_back_to_start_date() {
        let committee = committee_dto(json!({
            "comitteId": 1,
            "ownerId": 9,
            "comitteName": "raw",
            "startDate": "2024-01-15"
        }))
        .into_domain()
        .unwrap();

        let created = committee.created_at.unwrap();
        assert_eq!(created.to_rfc3339(), "2024-01-15T00:00:00+00:00");
    }

    #[test]
    fn test_committee_numeric_bids_ratio_becomes_string() {
        let committee = committee_dto(json!({
            "comitteId": 1,
            "ownerId": 9,
            "comitteName": "raw",
            "bidsRatio": 3
        }))
        .into_domain()
        .unwrap();

        assert_eq!(committee.bids_ratio.as_deref(), Some("3"));
    }

    #[test]
    fn test_committee_invalid_owner_id_is_dropped() {
        let dto = committee_dto(json!({
            "comitteId": 1,
            "ownerId": "not-a-number",
            "comitteName": "raw"
        }));
        assert!(dto.into_domain().is_none());
    }

    #[test]
    fn test_bid_maps_malformed_timestamp_to_none() {
        let bid: BidResponseDto = serde_json::from_value(json!({
            "bidId": 5,
            "comitteId": 1,
            "finalBidderId": 3,
            "finalBidAmt": 90000.0,
            "createdTimestamp": "last tuesday"
        }))
        .unwrap();

        let bid = bid.into_domain().unwrap();
        assert_eq!(bid.created_at, None);
        assert_eq!(bid.amount, 90000.0);
    }

    #[test]
    fn test_member_invalid_id_kept_as_none() {
        let member: MemberResponseDto = serde_json::from_value(json!({
            "memberId": 0,
            "username": "alice",
            "name": "Alice"
        }))
        .unwrap();

        let summary = member.into_domain();
        assert_eq!(summary.member_id, None);
        assert_eq!(summary.username, "alice");
    }

    #[test]
    fn test_parse_timestamp_variants() {
        assert!(parse_timestamp(Some("2024-01-15T10:30:00Z")).is_some());
        assert!(parse_timestamp(Some("2024-01-15T10:30:00.123")).is_some());
        assert!(parse_timestamp(Some("2024-01-15 10:30:00")).is_some());
        assert!(parse_timestamp(Some("2024-01-15")).is_some());
        assert!(parse_timestamp(Some("")).is_none());
        assert!(parse_timestamp(Some("garbage")).is_none());
        assert!(parse_timestamp(None).is_none());
    }
}
