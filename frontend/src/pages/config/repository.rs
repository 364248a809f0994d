use async_trait::async_trait;
use std::rc::Rc;

use crate::{
    api::{
        ApiClient, ApiError, ConfigDraft, ConfigFilter, PageQuery, PagedCollection, SysConfigEntry,
    },
    pages::crud::CrudRepository,
    validation::ensure_valid,
};

#[derive(Clone)]
pub struct SysConfigRepository {
    client: Rc<ApiClient>,
}

impl SysConfigRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }
}

/// Blank search boxes are dropped rather than sent as empty strings.
pub fn normalize_filter(filter: &ConfigFilter) -> ConfigFilter {
    let keep = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };
    ConfigFilter {
        config_name: keep(&filter.config_name),
        config_key: keep(&filter.config_key),
    }
}

#[async_trait(?Send)]
impl CrudRepository for SysConfigRepository {
    type Item = SysConfigEntry;
    type Filter = ConfigFilter;
    type Draft = ConfigDraft;

    const LIST_PATH: &'static str = "/config/list";

    fn item_id(item: &SysConfigEntry) -> i64 {
        item.id
    }

    fn draft_from(item: &SysConfigEntry) -> ConfigDraft {
        ConfigDraft::from(item)
    }

    fn validate(&self, draft: &ConfigDraft) -> Result<(), ApiError> {
        ensure_valid(draft)
    }

    async fn list(
        &self,
        query: &PageQuery,
        filter: &ConfigFilter,
    ) -> Result<PagedCollection<SysConfigEntry>, ApiError> {
        self.client.list_configs(query, &normalize_filter(filter)).await
    }

    async fn get(&self, id: i64) -> Result<SysConfigEntry, ApiError> {
        self.client.get_config(id).await
    }

    async fn create(&self, draft: &ConfigDraft) -> Result<(), ApiError> {
        self.client.create_config(draft).await
    }

    async fn update(&self, id: i64, draft: &ConfigDraft) -> Result<(), ApiError> {
        self.client.update_config(id, draft).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_config(id).await
    }
}
