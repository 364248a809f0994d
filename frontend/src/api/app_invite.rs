use super::{
    app_types::{InviteCode, InviteStats, InvitedUser},
    client::ApiClient,
    types::{ApiError, PageQuery, PagedCollection},
};

impl ApiClient {
    pub async fn invite_stats(&self) -> Result<InviteStats, ApiError> {
        self.request_empty("/app/invite/stats").await
    }

    pub async fn my_invites(
        &self,
        query: &PageQuery,
    ) -> Result<PagedCollection<InvitedUser>, ApiError> {
        self.request("/app/invite/my-invites", query).await
    }

    pub async fn invite_code(&self) -> Result<InviteCode, ApiError> {
        self.request_empty("/app/invite/get-code").await
    }
}
