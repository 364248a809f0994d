use async_trait::async_trait;
use std::rc::Rc;

use crate::{
    api::{ApiClient, ApiError, ManagedUser, PageQuery, PagedCollection, UserDraft, UserFilter},
    pages::crud::CrudRepository,
    validation::ensure_valid,
};

#[derive(Clone)]
pub struct UserRepository {
    client: Rc<ApiClient>,
}

impl UserRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn reset_password(&self, id: i64, new_password: &str) -> Result<(), ApiError> {
        self.client.reset_user_password(id, new_password).await
    }
}

#[async_trait(?Send)]
impl CrudRepository for UserRepository {
    type Item = ManagedUser;
    type Filter = UserFilter;
    type Draft = UserDraft;

    const LIST_PATH: &'static str = "/user";

    fn item_id(item: &ManagedUser) -> i64 {
        item.id
    }

    fn draft_from(item: &ManagedUser) -> UserDraft {
        UserDraft::from(item)
    }

    fn validate(&self, draft: &UserDraft) -> Result<(), ApiError> {
        ensure_valid(draft)
    }

    async fn list(
        &self,
        query: &PageQuery,
        filter: &UserFilter,
    ) -> Result<PagedCollection<ManagedUser>, ApiError> {
        let filter = UserFilter {
            username: filter
                .username
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            status: filter.status,
        };
        self.client.list_users(query, &filter).await
    }

    async fn get(&self, id: i64) -> Result<ManagedUser, ApiError> {
        self.client.get_user(id).await
    }

    async fn create(&self, draft: &UserDraft) -> Result<(), ApiError> {
        self.client.create_user(draft).await
    }

    async fn update(&self, id: i64, draft: &UserDraft) -> Result<(), ApiError> {
        self.client.update_user(id, draft).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_user(id).await
    }
}
