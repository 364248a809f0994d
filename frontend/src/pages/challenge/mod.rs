pub mod repository;
pub mod view_model;

pub use repository::ChallengeConfigRepository;
pub use view_model::{use_challenge_edit_view_model, use_challenge_list_view_model};
