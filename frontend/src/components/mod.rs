pub mod confirm_delete;
pub mod feedback;
pub mod guard;
