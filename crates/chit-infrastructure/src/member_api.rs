//! REST implementation of the member directory.

use crate::api_client::ApiClient;
use crate::dto::MemberResponseDto;
use chit_core::committee::CommitteeId;
use chit_core::error::Result;
use chit_core::member::{MemberDirectory, MemberSummary};
use async_trait::async_trait;

/// Member directory backed by the `/members` and `/comittes/{id}/members`
/// routes.
pub struct ApiMemberDirectory {
    client: ApiClient,
}

impl ApiMemberDirectory {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MemberDirectory for ApiMemberDirectory {
    async fn search_by_username(&self, username: &str) -> Result<Vec<MemberSummary>> {
        let dtos: Vec<MemberResponseDto> = self
            .client
            .get_json_with_query("/members/search", &[("username", username)])
            .await?;
        Ok(dtos.into_iter().map(MemberResponseDto::into_domain).collect())
    }

    async fn list_by_committee(&self, committee_id: CommitteeId) -> Result<Vec<MemberSummary>> {
        let dtos: Vec<MemberResponseDto> = self
            .client
            .get_json(&format!("/comittes/{committee_id}/members"))
            .await?;
        Ok(dtos.into_iter().map(MemberResponseDto::into_domain).collect())
    }
}
