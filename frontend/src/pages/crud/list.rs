use leptos::*;
use std::rc::Rc;

use super::repository::CrudRepository;
use crate::{
    api::{ApiError, PageQuery},
    state::paged::PagedStore,
};

pub const LOAD_FAILED: &str = "Failed to load data";
pub const DELETE_FAILED: &str = "Delete failed";

/// State and actions behind a paged list screen.
///
/// Every fetch goes through the store's request tickets, so when page
/// clicks overlap only the newest request lands.
pub struct ListViewModel<R: CrudRepository> {
    repository: Rc<R>,
    pub store: PagedStore<R::Item>,
    pub query: RwSignal<PageQuery>,
    pub filter: RwSignal<R::Filter>,
    pub error: RwSignal<Option<String>>,
    /// Row awaiting delete confirmation.
    pub pending_delete: RwSignal<Option<i64>>,
}

impl<R: CrudRepository> Clone for ListViewModel<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Rc::clone(&self.repository),
            store: self.store.clone(),
            query: self.query,
            filter: self.filter,
            error: self.error,
            pending_delete: self.pending_delete,
        }
    }
}

impl<R: CrudRepository + 'static> ListViewModel<R> {
    pub fn new(repository: R) -> Self {
        Self::with_store(repository, PagedStore::new())
    }

    pub fn with_store(repository: R, store: PagedStore<R::Item>) -> Self {
        Self {
            repository: Rc::new(repository),
            store,
            query: create_rw_signal(PageQuery::default()),
            filter: create_rw_signal(R::Filter::default()),
            error: create_rw_signal(None),
            pending_delete: create_rw_signal(None),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Fetches the current page with the current filter.
    pub async fn reload(&self) -> Result<(), ApiError> {
        let query = self.query.get_untracked();
        let filter = self.filter.get_untracked();
        let ticket = self.store.begin_request();

        match self.repository.list(&query, &filter).await {
            Ok(page) => {
                if self.store.apply(ticket, page.conform_to(&query)) {
                    self.error.set(None);
                }
                Ok(())
            }
            Err(err) => {
                log::warn!("List fetch for page {} failed: {}", query.page, err);
                if self.store.is_current(ticket) {
                    self.error.set(Some(err.user_message(LOAD_FAILED)));
                }
                self.store.finish(ticket);
                Err(err)
            }
        }
    }

    pub async fn go_to_page(&self, page: u32) -> Result<(), ApiError> {
        self.query
            .update(|q| *q = PageQuery::new(page, q.page_size));
        self.reload().await
    }

    /// Changing the page size starts over from page 1.
    pub async fn set_page_size(&self, page_size: u32) -> Result<(), ApiError> {
        self.query
            .set(PageQuery::new(PageQuery::DEFAULT_PAGE, page_size));
        self.reload().await
    }

    pub async fn apply_filter(&self, filter: R::Filter) -> Result<(), ApiError> {
        self.filter.set(filter);
        self.query
            .update(|q| *q = PageQuery::new(PageQuery::DEFAULT_PAGE, q.page_size));
        self.reload().await
    }

    pub async fn reset_filter(&self) -> Result<(), ApiError> {
        self.apply_filter(R::Filter::default()).await
    }

    pub fn request_delete(&self, id: i64) {
        self.pending_delete.set(Some(id));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    /// Deletes the row awaiting confirmation. Returns `false` when nothing was pending.
    pub async fn confirm_delete(&self) -> Result<bool, ApiError> {
        let Some(id) = self.pending_delete.get_untracked() else {
            return Ok(false);
        };
        self.pending_delete.set(None);
        self.delete(id).await.map(|_| true)
    }

    /// Deletes `id` and re-fetches. When the current page comes back empty
    /// while rows remain, steps back to the last page that still has rows.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        if let Err(err) = self.repository.delete(id).await {
            self.error.set(Some(err.user_message(DELETE_FAILED)));
            return Err(err);
        }
        self.reload().await?;

        let state = self.store.snapshot();
        let query = self.query.get_untracked();
        if state.collection.is_empty() && state.collection.total > 0 {
            let last = query.last_page_for(state.collection.total);
            if last < query.page {
                log::debug!("Page {} emptied by delete; moving to {}", query.page, last);
                return self.go_to_page(last).await;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        fixtures::Row,
        helpers::{with_runtime, FakeRepository, RowFilter},
    };
    use futures::{channel::oneshot, executor::block_on};

    fn loaded(rows: usize) -> ListViewModel<FakeRepository> {
        ListViewModel::new(FakeRepository::with_rows(rows))
    }

    #[test]
    fn reload_fills_store_and_clears_error() {
        with_runtime(|| {
            let vm = loaded(25);
            vm.error.set(Some("old".into()));
            block_on(vm.reload()).unwrap();

            let state = vm.store.snapshot();
            assert_eq!(state.collection.items.len(), 10);
            assert_eq!(state.collection.total, 25);
            assert!(!state.loading);
            assert_eq!(vm.error.get_untracked(), None);
        });
    }

    #[test]
    fn page_size_and_filter_changes_return_to_first_page() {
        with_runtime(|| {
            let vm = loaded(60);
            block_on(vm.go_to_page(3)).unwrap();
            assert_eq!(vm.store.snapshot().collection.page, 3);

            block_on(vm.set_page_size(20)).unwrap();
            assert_eq!(vm.query.get_untracked(), PageQuery::new(1, 20));
            assert_eq!(vm.store.items().len(), 20);

            block_on(vm.go_to_page(2)).unwrap();
            block_on(vm.apply_filter(RowFilter { even_only: true })).unwrap();
            assert_eq!(vm.query.get_untracked().page, 1);
            assert_eq!(vm.store.total(), 30);
            assert!(vm.store.items().iter().all(|row| row.id % 2 == 0));
        });
    }

    #[test]
    fn oversized_page_is_clamped() {
        with_runtime(|| {
            let repo = FakeRepository::with_rows(30);
            repo.ignore_page_size();
            let vm = ListViewModel::new(repo);
            block_on(vm.reload()).unwrap();
            assert_eq!(vm.store.items().len(), 10);
            assert_eq!(vm.store.total(), 30);
        });
    }

    #[test]
    fn failed_fetch_keeps_previous_rows() {
        with_runtime(|| {
            let vm = loaded(15);
            block_on(vm.reload()).unwrap();
            let before = vm.store.snapshot();

            vm.repository().fail_next(ApiError::transport(Some(500), "boom"));
            assert!(block_on(vm.go_to_page(2)).is_err());

            let after = vm.store.snapshot();
            assert_eq!(after.collection, before.collection);
            assert!(!after.loading);
            assert_eq!(vm.error.get_untracked().as_deref(), Some("Network error"));
        });
    }

    #[test]
    fn deleting_only_row_on_last_page_steps_back() {
        with_runtime(|| {
            let vm = loaded(21);
            block_on(vm.go_to_page(3)).unwrap();
            assert_eq!(vm.store.items(), vec![Row::new(21)]);

            block_on(vm.delete(21)).unwrap();

            let state = vm.store.snapshot();
            assert_eq!(state.collection.total, 20);
            assert_eq!(state.collection.page, 2);
            assert_eq!(state.collection.items.len(), 10);
            assert_eq!(vm.query.get_untracked().page, 2);
            assert_eq!(
                vm.repository().calls(),
                vec!["list 3", "delete 21", "list 3", "list 2"]
            );
        });
    }

    #[test]
    fn deleting_from_a_full_page_refetches_in_place() {
        with_runtime(|| {
            let vm = loaded(25);
            block_on(vm.delete(3)).unwrap();
            let state = vm.store.snapshot();
            assert_eq!(state.collection.page, 1);
            assert_eq!(state.collection.total, 24);
            assert!(!state.collection.items.contains(&Row::new(3)));
        });
    }

    #[test]
    fn delete_needs_confirmation() {
        with_runtime(|| {
            let vm = loaded(5);
            assert!(!block_on(vm.confirm_delete()).unwrap());

            vm.request_delete(2);
            vm.cancel_delete();
            assert!(!block_on(vm.confirm_delete()).unwrap());

            vm.request_delete(2);
            assert!(block_on(vm.confirm_delete()).unwrap());
            assert_eq!(vm.store.total(), 4);
            assert_eq!(vm.pending_delete.get_untracked(), None);
        });
    }

    #[test]
    fn failed_delete_skips_refetch() {
        with_runtime(|| {
            let vm = loaded(5);
            vm.repository()
                .fail_next(ApiError::application(9, "row is locked"));
            let err = block_on(vm.delete(1)).unwrap_err();
            assert!(err.is_expected());
            assert_eq!(vm.error.get_untracked().as_deref(), Some("row is locked"));
            assert_eq!(vm.repository().calls(), vec!["delete 1"]);
        });
    }

    #[test]
    fn out_of_order_pages_settle_on_newest_request() {
        with_runtime(|| {
            let vm = loaded(30);
            let (release_two, gate_two) = oneshot::channel();
            let (release_three, gate_three) = oneshot::channel();
            vm.repository().gate_page(2, gate_two);
            vm.repository().gate_page(3, gate_three);

            let (to_two, to_three, ()) = block_on(async {
                futures::join!(vm.go_to_page(2), vm.go_to_page(3), async {
                    // page 3 answers first, page 2 after it
                    let _ = release_three.send(());
                    futures::pending!();
                    let _ = release_two.send(());
                })
            });

            assert!(to_two.is_ok());
            assert!(to_three.is_ok());
            let state = vm.store.snapshot();
            assert_eq!(state.collection.page, 3);
            assert_eq!(state.collection.items.first(), Some(&Row::new(21)));
            assert_eq!(vm.query.get_untracked().page, 3);
            assert!(!state.loading);
        });
    }
}
