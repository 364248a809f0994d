use leptos::*;
use std::{cell::Cell, rc::Rc};

use crate::api::{ManagedUser, PagedCollection};

#[derive(Debug, Clone, PartialEq)]
pub struct PagedState<T> {
    pub collection: PagedCollection<T>,
    pub loading: bool,
}

impl<T> Default for PagedState<T> {
    fn default() -> Self {
        Self {
            collection: PagedCollection::default(),
            loading: false,
        }
    }
}

/// Identifies one list fetch; only the newest ticket may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Holds the most recent page of a list screen.
///
/// `set_collection` is a plain last-write-wins setter. Fetches that can
/// overlap go through `begin_request` / `apply`, which drop any response
/// older than the newest request issued.
pub struct PagedStore<T: Clone + 'static> {
    state: RwSignal<PagedState<T>>,
    issued: Rc<Cell<u64>>,
}

impl<T: Clone + 'static> Clone for PagedStore<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            issued: Rc::clone(&self.issued),
        }
    }
}

impl<T: Clone + 'static> PagedStore<T> {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(PagedState::default()),
            issued: Rc::new(Cell::new(0)),
        }
    }

    pub fn state(&self) -> ReadSignal<PagedState<T>> {
        self.state.read_only()
    }

    pub fn snapshot(&self) -> PagedState<T> {
        self.state.get_untracked()
    }

    pub fn items(&self) -> Vec<T> {
        self.state.with_untracked(|s| s.collection.items.clone())
    }

    pub fn total(&self) -> u64 {
        self.state.with_untracked(|s| s.collection.total)
    }

    pub fn set_collection(&self, collection: PagedCollection<T>) {
        let collection = clamp_to_page_size(collection);
        self.state.update(|s| s.collection = collection);
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.update(|s| s.loading = loading);
    }

    pub fn begin_request(&self) -> RequestTicket {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        self.set_loading(true);
        RequestTicket(next)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.issued.get()
    }

    /// Writes `collection` if `ticket` is still the newest request.
    pub fn apply(&self, ticket: RequestTicket, collection: PagedCollection<T>) -> bool {
        if !self.is_current(ticket) {
            log::debug!(
                "Dropping stale page {} (request {} < {})",
                collection.page,
                ticket.0,
                self.issued.get()
            );
            return false;
        }
        let collection = clamp_to_page_size(collection);
        self.state.update(|s| {
            s.collection = collection;
            s.loading = false;
        });
        true
    }

    /// Ends a failed request; the previous page stays in place.
    pub fn finish(&self, ticket: RequestTicket) {
        if self.is_current(ticket) {
            self.set_loading(false);
        }
    }

    pub fn reset(&self) {
        self.issued.set(self.issued.get() + 1);
        self.state.set(PagedState::default());
    }
}

impl<T: Clone + 'static> Default for PagedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_to_page_size<T>(mut collection: PagedCollection<T>) -> PagedCollection<T> {
    let limit = collection.page_size as usize;
    if limit > 0 && collection.items.len() > limit {
        log::warn!(
            "Page holds {} rows for page size {}; truncating",
            collection.items.len(),
            limit
        );
        collection.items.truncate(limit);
    }
    collection
}

pub type UserListStore = PagedStore<ManagedUser>;
