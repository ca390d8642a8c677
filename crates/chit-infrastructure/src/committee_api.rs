//! REST implementation of the committee directory.

use crate::api_client::ApiClient;
use crate::dto::ComitteResponseDto;
use chit_core::committee::{Committee, CommitteeDirectory, CommitteeId};
use chit_core::error::{ChitError, Result};
use chit_core::member::MemberId;
use async_trait::async_trait;

/// Committee directory backed by the `/comittes` routes.
pub struct ApiCommitteeDirectory {
    client: ApiClient,
}

impl ApiCommitteeDirectory {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn map_list(dtos: Vec<ComitteResponseDto>) -> Vec<Committee> {
        dtos.into_iter()
            .filter_map(|dto| {
                let id = dto.comitte_id;
                let committee = dto.into_domain();
                if committee.is_none() {
                    tracing::warn!(comitte_id = id, "dropping committee record with unusable owner id");
                }
                committee
            })
            .collect()
    }
}

#[async_trait]
impl CommitteeDirectory for ApiCommitteeDirectory {
    async fn list_by_member(&self, member_id: MemberId) -> Result<Vec<Committee>> {
        let dtos: Vec<ComitteResponseDto> = self
            .client
            .get_json(&format!("/comittes/member/{member_id}"))
            .await?;
        Ok(Self::map_list(dtos))
    }

    async fn list_by_owner(&self, owner_id: MemberId) -> Result<Vec<Committee>> {
        let dtos: Vec<ComitteResponseDto> = self
            .client
            .get_json(&format!("/comittes/owner/{owner_id}"))
            .await?;
        Ok(Self::map_list(dtos))
    }

    async fn get_by_id(&self, committee_id: CommitteeId) -> Result<Option<Committee>> {
        let result: Result<ComitteResponseDto> = self
            .client
            .get_json(&format!("/comittes/{committee_id}"))
            .await;
        match result {
            Ok(dto) => Ok(dto.into_domain()),
            Err(ChitError::Api {
                status: Some(404), ..
            }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
