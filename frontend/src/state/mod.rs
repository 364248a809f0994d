pub mod app;
pub mod auth;
pub mod challenge;
pub mod checkin;
pub mod invite;
pub mod paged;
pub mod wallet;
