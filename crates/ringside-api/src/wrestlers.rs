//! Handlers for the roster endpoints under `/wrestlers`.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use ringside_core::{
  championship::Championship,
  service::roster,
  store::EntityStore,
  wrestler::{RosterFilter, Wrestler},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{error::ApiError, owner::Owner};

/// `GET /wrestlers[?brand=&alignment=&gender=&free_agent=&injured=&available=]`
pub async fn list<S: EntityStore>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Query(filter): Query<RosterFilter>,
) -> Result<Json<Vec<Wrestler>>, ApiError> {
  Ok(Json(roster::list_roster(store.as_ref(), &owner, &filter).await?))
}

/// `POST /wrestlers/{id}/release`
pub async fn release<S: EntityStore>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Path(id): Path<Uuid>,
) -> Result<Json<Wrestler>, ApiError> {
  Ok(Json(roster::release(store.as_ref(), &owner, id).await?))
}

#[derive(Debug, Deserialize)]
pub struct SignBody {
  pub brand: String,
}

/// `POST /wrestlers/{id}/sign` with body `{"brand":"Red"}`
pub async fn sign<S: EntityStore>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Path(id): Path<Uuid>,
  Json(body): Json<SignBody>,
) -> Result<Json<Wrestler>, ApiError> {
  Ok(Json(roster::sign(store.as_ref(), &owner, id, &body.brand).await?))
}

/// `GET /wrestlers/{id}/titles`
pub async fn titles<S: EntityStore>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Path(id): Path<Uuid>,
) -> Result<Json<Vec<Championship>>, ApiError> {
  Ok(Json(roster::titles_held(store.as_ref(), &owner, id).await?))
}
