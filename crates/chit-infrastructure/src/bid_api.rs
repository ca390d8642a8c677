//! REST implementation of the bid directory.

use crate::api_client::ApiClient;
use crate::dto::BidResponseDto;
use chit_core::bid::{Bid, BidDirectory};
use chit_core::committee::CommitteeId;
use chit_core::error::Result;
use chit_core::member::MemberId;
use async_trait::async_trait;

/// Bid directory backed by the `/bids` and `/comittes/{id}/bids` routes.
pub struct ApiBidDirectory {
    client: ApiClient,
}

impl ApiBidDirectory {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn map_list(dtos: Vec<BidResponseDto>) -> Vec<Bid> {
        dtos.into_iter()
            .filter_map(|dto| {
                let id = dto.bid_id;
                let bid = dto.into_domain();
                if bid.is_none() {
                    tracing::warn!(bid_id = id, "dropping bid record with unusable bidder id");
                }
                bid
            })
            .collect()
    }
}

#[async_trait]
impl BidDirectory for ApiBidDirectory {
    async fn list_by_member(&self, member_id: MemberId) -> Result<Vec<Bid>> {
        let dtos: Vec<BidResponseDto> = self
            .client
            .get_json(&format!("/bids/member/{member_id}"))
            .await?;
        Ok(Self::map_list(dtos))
    }

    async fn list_by_committee(&self, committee_id: CommitteeId) -> Result<Vec<Bid>> {
        let dtos: Vec<BidResponseDto> = self
            .client
            .get_json(&format!("/comittes/{committee_id}/bids"))
            .await?;
        Ok(Self::map_list(dtos))
    }
}
