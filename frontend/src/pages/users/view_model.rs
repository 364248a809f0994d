use leptos::*;
use std::rc::Rc;

use super::repository::UserRepository;
use crate::{
    api::ApiError,
    app::use_api_client,
    pages::crud::{EditViewModel, ListViewModel},
    state::paged::UserListStore,
    utils::navigation::use_navigator,
};

pub const RESET_FAILED: &str = "Password reset failed";

/// User list plus the reset-password dialog.
#[derive(Clone)]
pub struct UserListViewModel {
    pub list: ListViewModel<UserRepository>,
    /// User whose password dialog is open.
    pub resetting: RwSignal<Option<i64>>,
    pub reset_message: RwSignal<Option<Result<String, String>>>,
}

impl UserListViewModel {
    pub fn new(repository: UserRepository, store: UserListStore) -> Self {
        Self {
            list: ListViewModel::with_store(repository, store),
            resetting: create_rw_signal(None),
            reset_message: create_rw_signal(None),
        }
    }

    pub fn open_reset(&self, id: i64) {
        self.reset_message.set(None);
        self.resetting.set(Some(id));
    }

    pub fn close_reset(&self) {
        self.resetting.set(None);
    }

    pub async fn submit_reset(&self, new_password: &str) -> Result<(), ApiError> {
        let Some(id) = self.resetting.get_untracked() else {
            return Ok(());
        };
        match self.list.repository().reset_password(id, new_password).await {
            Ok(()) => {
                self.resetting.set(None);
                self.reset_message
                    .set(Some(Ok("Password has been reset".to_string())));
                Ok(())
            }
            Err(err) => {
                self.reset_message
                    .set(Some(Err(err.user_message(RESET_FAILED))));
                Err(err)
            }
        }
    }
}

/// The list store comes from context so the last page survives navigation.
pub fn use_user_list_view_model() -> UserListViewModel {
    let store = use_context::<UserListStore>().unwrap_or_default();
    UserListViewModel::new(
        UserRepository::new_with_client(Rc::new(use_api_client())),
        store,
    )
}

pub fn use_user_edit_view_model(id: Option<i64>) -> EditViewModel<UserRepository> {
    EditViewModel::new(
        UserRepository::new_with_client(Rc::new(use_api_client())),
        id,
        use_navigator(),
    )
}
