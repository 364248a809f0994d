use super::{
    client::ApiClient,
    types::{
        ApiError, ChallengeConfig, ChallengeDraft, IdRequest, ListRequest, NoFilter, PageQuery,
        PagedCollection, WithId,
    },
};

impl ApiClient {
    pub async fn list_challenge_configs(
        &self,
        query: &PageQuery,
    ) -> Result<PagedCollection<ChallengeConfig>, ApiError> {
        let body = ListRequest {
            query,
            filter: &NoFilter {},
        };
        self.request("/admin/challenge/list", &body).await
    }

    pub async fn get_challenge_config(&self, id: i64) -> Result<ChallengeConfig, ApiError> {
        self.request("/admin/challenge/get", &IdRequest { id }).await
    }

    pub async fn create_challenge_config(&self, draft: &ChallengeDraft) -> Result<(), ApiError> {
        self.execute("/admin/challenge/create", draft).await.map(|_| ())
    }

    pub async fn update_challenge_config(
        &self,
        id: i64,
        draft: &ChallengeDraft,
    ) -> Result<(), ApiError> {
        self.execute("/admin/challenge/update", &WithId { id, draft })
            .await
            .map(|_| ())
    }

    pub async fn delete_challenge_config(&self, id: i64) -> Result<(), ApiError> {
        self.execute("/admin/challenge/delete", &IdRequest { id })
            .await
            .map(|_| ())
    }
}
