use leptos::*;
use std::rc::Rc;

use super::repository::CrudRepository;
use crate::{api::ApiError, utils::navigation::NavigatorHandle};

pub const SAVE_FAILED: &str = "Save failed";

/// Create/update form. With an id the form is seeded from the server
/// record and submitting updates it; without one submitting creates.
pub struct EditViewModel<R: CrudRepository> {
    repository: Rc<R>,
    navigator: NavigatorHandle,
    pub id: Option<i64>,
    pub draft: RwSignal<R::Draft>,
    pub loading: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<R: CrudRepository> Clone for EditViewModel<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Rc::clone(&self.repository),
            navigator: self.navigator.clone(),
            id: self.id,
            draft: self.draft,
            loading: self.loading,
            submitting: self.submitting,
            error: self.error,
        }
    }
}

impl<R: CrudRepository + 'static> EditViewModel<R> {
    pub fn new(repository: R, id: Option<i64>, navigator: NavigatorHandle) -> Self {
        Self {
            repository: Rc::new(repository),
            navigator,
            id,
            draft: create_rw_signal(R::Draft::default()),
            loading: create_rw_signal(false),
            submitting: create_rw_signal(false),
            error: create_rw_signal(None),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub async fn load(&self) -> Result<(), ApiError> {
        let Some(id) = self.id else {
            self.draft.set(R::Draft::default());
            return Ok(());
        };
        self.loading.set(true);
        let result = self.repository.get(id).await;
        self.loading.set(false);
        match result {
            Ok(item) => {
                self.draft.set(R::draft_from(&item));
                Ok(())
            }
            Err(err) => {
                self.error.set(Some(err.user_message(super::list::LOAD_FAILED)));
                Err(err)
            }
        }
    }

    pub fn update_draft(&self, f: impl FnOnce(&mut R::Draft)) {
        self.draft.update(f);
    }

    /// Validates, saves, and on success returns to the list screen.
    pub async fn submit(&self) -> Result<(), ApiError> {
        let draft = self.draft.get_untracked();
        if let Err(err) = self.repository.validate(&draft) {
            self.error.set(Some(err.user_message(SAVE_FAILED)));
            return Err(err);
        }

        self.submitting.set(true);
        let result = match self.id {
            Some(id) => self.repository.update(id, &draft).await,
            None => self.repository.create(&draft).await,
        };
        self.submitting.set(false);

        match result {
            Ok(()) => {
                self.error.set(None);
                self.navigator.navigate(R::LIST_PATH);
                Ok(())
            }
            Err(err) => {
                self.error.set(Some(err.user_message(SAVE_FAILED)));
                Err(err)
            }
        }
    }
}
