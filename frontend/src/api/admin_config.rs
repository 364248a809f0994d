use super::{
    client::ApiClient,
    types::{
        ApiError, ConfigDraft, ConfigFilter, IdRequest, ListRequest, PageQuery, PagedCollection,
        SysConfigEntry, WithId,
    },
};

impl ApiClient {
    pub async fn list_configs(
        &self,
        query: &PageQuery,
        filter: &ConfigFilter,
    ) -> Result<PagedCollection<SysConfigEntry>, ApiError> {
        self.request("/admin/config/list", &ListRequest { query, filter })
            .await
    }

    pub async fn get_config(&self, id: i64) -> Result<SysConfigEntry, ApiError> {
        self.request("/admin/config/get", &IdRequest { id }).await
    }

    pub async fn create_config(&self, draft: &ConfigDraft) -> Result<(), ApiError> {
        self.execute("/admin/config/create", draft).await.map(|_| ())
    }

    pub async fn update_config(&self, id: i64, draft: &ConfigDraft) -> Result<(), ApiError> {
        self.execute("/admin/config/update", &WithId { id, draft })
            .await
            .map(|_| ())
    }

    pub async fn delete_config(&self, id: i64) -> Result<(), ApiError> {
        self.execute("/admin/config/delete", &IdRequest { id })
            .await
            .map(|_| ())
    }
}
