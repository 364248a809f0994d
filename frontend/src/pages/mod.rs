//! Back-office screens: each resource plugs a repository into the shared
//! paged list / edit view models.

pub mod challenge;
pub mod config;
pub mod crud;
pub mod users;
