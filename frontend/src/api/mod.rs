mod admin_auth;
mod admin_challenge;
mod admin_config;
mod admin_user;
mod app_auth;
mod app_challenge;
mod app_checkin;
mod app_invite;
mod app_ranking;
pub mod app_types;
mod app_wallet;
pub mod client;
pub mod types;

pub use app_ranking::RankingBoard;
pub use app_types::*;
pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
