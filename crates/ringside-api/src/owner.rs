//! Extractor for the authenticated owner.
//!
//! The API never authenticates on its own. Whatever sits in front of it (see
//! `ringside-server`) must insert an [`OwnerId`] into the request extensions;
//! requests without one are rejected.

use axum::{extract::FromRequestParts, http::request::Parts};
use ringside_core::OwnerId;

use crate::error::ApiError;

/// The owner every store call in a handler is scoped by.
pub struct Owner(pub OwnerId);

impl<St> FromRequestParts<St> for Owner
where
  St: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    _state: &St,
  ) -> Result<Self, Self::Rejection> {
    parts
      .extensions
      .get::<OwnerId>()
      .cloned()
      .map(Owner)
      .ok_or(ApiError::Unauthorized)
  }
}
