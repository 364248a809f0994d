use super::{
    client::ApiClient,
    types::{
        ApiError, IdRequest, ListRequest, ManagedUser, PageQuery, PagedCollection,
        ResetPasswordRequest, UserDraft, UserFilter, WithId,
    },
};
use crate::validation::rules;

impl ApiClient {
    pub async fn list_users(
        &self,
        query: &PageQuery,
        filter: &UserFilter,
    ) -> Result<PagedCollection<ManagedUser>, ApiError> {
        self.request("/admin/user/list", &ListRequest { query, filter })
            .await
    }

    pub async fn get_user(&self, id: i64) -> Result<ManagedUser, ApiError> {
        self.request("/admin/user/get", &IdRequest { id }).await
    }

    pub async fn create_user(&self, draft: &UserDraft) -> Result<(), ApiError> {
        self.execute("/admin/user/create", draft).await.map(|_| ())
    }

    pub async fn update_user(&self, id: i64, draft: &UserDraft) -> Result<(), ApiError> {
        self.execute("/admin/user/update", &WithId { id, draft })
            .await
            .map(|_| ())
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.execute("/admin/user/delete", &IdRequest { id })
            .await
            .map(|_| ())
    }

    pub async fn reset_user_password(&self, id: i64, new_password: &str) -> Result<(), ApiError> {
        rules::validate_password_strength(new_password)?;
        let body = ResetPasswordRequest {
            id,
            new_password: new_password.to_string(),
        };
        self.execute("/admin/user/reset-password", &body)
            .await
            .map(|_| ())
    }
}
