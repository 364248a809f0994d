pub mod repository;
pub mod view_model;

pub use repository::UserRepository;
pub use view_model::{use_user_edit_view_model, use_user_list_view_model, UserListViewModel};
