//! `GET /export` and `POST /import`.

use std::sync::Arc;

use axum::{Json, extract::State};
use ringside_core::{
  service::dataset::{self, Dataset, ImportReport},
  store::EntityStore,
};
use serde_json::Value;

use crate::{error::ApiError, owner::Owner};

pub async fn export<S: EntityStore>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
) -> Result<Json<Dataset>, ApiError> {
  Ok(Json(dataset::export(store.as_ref(), &owner).await?))
}

/// Takes a raw JSON value so that one malformed record is counted in the
/// report instead of rejecting the whole body.
pub async fn import<S: EntityStore>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Json(document): Json<Value>,
) -> Result<Json<ImportReport>, ApiError> {
  Ok(Json(dataset::import(store.as_ref(), &owner, &document).await?))
}
