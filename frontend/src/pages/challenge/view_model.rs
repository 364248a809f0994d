use std::rc::Rc;

use super::repository::ChallengeConfigRepository;
use crate::{
    app::use_api_client,
    pages::crud::{EditViewModel, ListViewModel},
    utils::navigation::use_navigator,
};

pub type ChallengeListViewModel = ListViewModel<ChallengeConfigRepository>;
pub type ChallengeEditViewModel = EditViewModel<ChallengeConfigRepository>;

pub fn use_challenge_list_view_model() -> ChallengeListViewModel {
    let repository = ChallengeConfigRepository::new_with_client(Rc::new(use_api_client()));
    ListViewModel::new(repository)
}

pub fn use_challenge_edit_view_model(id: Option<i64>) -> ChallengeEditViewModel {
    let repository = ChallengeConfigRepository::new_with_client(Rc::new(use_api_client()));
    EditViewModel::new(repository, id, use_navigator())
}
