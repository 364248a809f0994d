use async_trait::async_trait;

use crate::api::{ApiError, PageQuery, PagedCollection};

/// Data access for one back-office resource.
#[async_trait(?Send)]
pub trait CrudRepository {
    type Item: Clone + PartialEq + 'static;
    type Filter: Clone + Default + PartialEq + 'static;
    type Draft: Clone + Default + PartialEq + 'static;

    /// Where the edit screen returns after a successful save.
    const LIST_PATH: &'static str;

    fn item_id(item: &Self::Item) -> i64;

    /// Editable fields of a fetched record.
    fn draft_from(item: &Self::Item) -> Self::Draft;

    fn validate(&self, _draft: &Self::Draft) -> Result<(), ApiError> {
        Ok(())
    }

    async fn list(
        &self,
        query: &PageQuery,
        filter: &Self::Filter,
    ) -> Result<PagedCollection<Self::Item>, ApiError>;

    async fn get(&self, id: i64) -> Result<Self::Item, ApiError>;

    async fn create(&self, draft: &Self::Draft) -> Result<(), ApiError>;

    async fn update(&self, id: i64, draft: &Self::Draft) -> Result<(), ApiError>;

    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}
