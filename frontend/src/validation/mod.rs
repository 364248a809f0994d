//! Client-side checks run on form drafts before anything reaches the network.

pub mod rules;

pub use validator::Validate;

use crate::api::ApiError;

/// Validates `payload`, turning any violation into [`ApiError::Validation`].
pub fn ensure_valid<T: Validate>(payload: &T) -> Result<(), ApiError> {
    payload.validate().map_err(ApiError::from)
}
