use async_trait::async_trait;
use std::rc::Rc;

use crate::{
    api::{ApiClient, ApiError, ChallengeConfig, ChallengeDraft, NoFilter, PageQuery, PagedCollection},
    pages::crud::CrudRepository,
    validation::ensure_valid,
};

#[derive(Clone)]
pub struct ChallengeConfigRepository {
    client: Rc<ApiClient>,
}

impl ChallengeConfigRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl CrudRepository for ChallengeConfigRepository {
    type Item = ChallengeConfig;
    type Filter = NoFilter;
    type Draft = ChallengeDraft;

    const LIST_PATH: &'static str = "/challenge/list";

    fn item_id(item: &ChallengeConfig) -> i64 {
        item.id
    }

    fn draft_from(item: &ChallengeConfig) -> ChallengeDraft {
        ChallengeDraft::from(item)
    }

    fn validate(&self, draft: &ChallengeDraft) -> Result<(), ApiError> {
        ensure_valid(draft)
    }

    async fn list(
        &self,
        query: &PageQuery,
        _filter: &NoFilter,
    ) -> Result<PagedCollection<ChallengeConfig>, ApiError> {
        self.client.list_challenge_configs(query).await
    }

    async fn get(&self, id: i64) -> Result<ChallengeConfig, ApiError> {
        self.client.get_challenge_config(id).await
    }

    async fn create(&self, draft: &ChallengeDraft) -> Result<(), ApiError> {
        self.client.create_challenge_config(draft).await
    }

    async fn update(&self, id: i64, draft: &ChallengeDraft) -> Result<(), ApiError> {
        self.client.update_challenge_config(id, draft).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_challenge_config(id).await
    }
}
