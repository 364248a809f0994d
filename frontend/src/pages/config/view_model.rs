use std::rc::Rc;

use super::repository::SysConfigRepository;
use crate::{
    app::use_api_client,
    pages::crud::{EditViewModel, ListViewModel},
    utils::navigation::use_navigator,
};

pub type ConfigListViewModel = ListViewModel<SysConfigRepository>;
pub type ConfigEditViewModel = EditViewModel<SysConfigRepository>;

pub fn use_config_list_view_model() -> ConfigListViewModel {
    ListViewModel::new(SysConfigRepository::new_with_client(Rc::new(use_api_client())))
}

pub fn use_config_edit_view_model(id: Option<i64>) -> ConfigEditViewModel {
    EditViewModel::new(
        SysConfigRepository::new_with_client(Rc::new(use_api_client())),
        id,
        use_navigator(),
    )
}
