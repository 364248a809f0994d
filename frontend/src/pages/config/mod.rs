pub mod repository;
pub mod view_model;

pub use repository::SysConfigRepository;
pub use view_model::{use_config_edit_view_model, use_config_list_view_model};
