//! Handlers for `/championships` and the reign ledger operations.
//!
//! Dates default to today (UTC) wherever the body may omit them.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use chrono::{NaiveDate, Utc};
use ringside_core::{
  championship::{Championship, Reign, Standing},
  service::{championships, records},
  store::EntityStore,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::ApiError, owner::Owner};

fn today() -> NaiveDate { Utc::now().date_naive() }

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  pub brand: Option<String>,
}

/// `GET /championships[?brand=<brand>]`
pub async fn list<S: EntityStore>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Championship>>, ApiError> {
  let mut titles: Vec<Championship> =
    records::list(store.as_ref(), &owner).await?;
  if let Some(brand) = params.brand.as_deref() {
    titles.retain(|t| t.brand.eq_ignore_ascii_case(brand));
  }
  Ok(Json(titles))
}

// ─── Status ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct StatusParams {
  pub as_of: Option<NaiveDate>,
}

/// `GET /championships/{id}/status[?as_of=2024-02-01]`
pub async fn status<S: EntityStore>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Path(id): Path<Uuid>,
  Query(params): Query<StatusParams>,
) -> Result<Json<Standing>, ApiError> {
  let as_of = params.as_of.unwrap_or_else(today);
  Ok(Json(championships::standing(store.as_ref(), &owner, id, as_of).await?))
}

// ─── Assign ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AssignBody {
  pub champion: String,
  #[serde(default)]
  pub event:    String,
  pub date:     Option<NaiveDate>,
}

/// `POST /championships/{id}/assign`
pub async fn assign<S: EntityStore>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Path(id): Path<Uuid>,
  Json(body): Json<AssignBody>,
) -> Result<Json<Championship>, ApiError> {
  let title = championships::assign_title(
    store.as_ref(),
    &owner,
    id,
    &body.champion,
    &body.event,
    body.date.unwrap_or_else(today),
  )
  .await?;
  Ok(Json(title))
}

// ─── Vacate ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct VacateBody {
  pub date: Option<NaiveDate>,
}

/// `POST /championships/{id}/vacate` with body `{}` or `{"date":"2024-02-01"}`
pub async fn vacate<S: EntityStore>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Path(id): Path<Uuid>,
  Json(body): Json<VacateBody>,
) -> Result<Json<Championship>, ApiError> {
  let date = body.date.unwrap_or_else(today);
  Ok(Json(
    championships::vacate_title(store.as_ref(), &owner, id, date).await?,
  ))
}

// ─── History ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ReignRemoved {
  pub championship: Championship,
  pub removed:      Reign,
}

/// `DELETE /championships/{id}/history/{index}`
pub async fn delete_reign<S: EntityStore>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<ReignRemoved>, ApiError> {
  let (championship, removed) =
    championships::delete_reign(store.as_ref(), &owner, id, index).await?;
  Ok(Json(ReignRemoved { championship, removed }))
}
