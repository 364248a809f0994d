//! Generic paged list / edit screens shared by the back-office resources.

pub mod edit;
pub mod list;
pub mod repository;

pub use edit::EditViewModel;
pub use list::ListViewModel;
pub use repository::CrudRepository;
