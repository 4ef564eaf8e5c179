//! Handlers for rivalries and storylines: filtered listing, timeline appends
//! and status transitions.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use chrono::{NaiveDate, Utc};
use ringside_core::{
  rivalry::{Rivalry, RivalryStatus},
  service::{chronicle, records},
  store::EntityStore,
  storyline::{Storyline, StorylineStatus},
  timeline::{Chronicle, TimelineEvent},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{error::ApiError, owner::Owner};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StatusFilter<T> {
  pub status: Option<T>,
}

/// `GET /rivalries[?status=active|dormant|concluded]`
pub async fn list_rivalries<S: EntityStore>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Query(params): Query<StatusFilter<RivalryStatus>>,
) -> Result<Json<Vec<Rivalry>>, ApiError> {
  let mut all: Vec<Rivalry> = records::list(store.as_ref(), &owner).await?;
  if let Some(status) = params.status {
    all.retain(|r| r.status == status);
  }
  Ok(Json(all))
}

/// `GET /storylines[?status=planned|active|concluded]`
pub async fn list_storylines<S: EntityStore>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Query(params): Query<StatusFilter<StorylineStatus>>,
) -> Result<Json<Vec<Storyline>>, ApiError> {
  let mut all: Vec<Storyline> = records::list(store.as_ref(), &owner).await?;
  if let Some(status) = params.status {
    all.retain(|s| s.status == status);
  }
  Ok(Json(all))
}

// ─── Timeline ─────────────────────────────────────────────────────────────────

/// `POST /{rivalries,storylines}/{id}/timeline` with a [`TimelineEvent`] body.
pub async fn append<S, R>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Path(id): Path<Uuid>,
  Json(event): Json<TimelineEvent>,
) -> Result<Json<R>, ApiError>
where
  S: EntityStore,
  R: Chronicle,
{
  Ok(Json(
    chronicle::append_event::<S, R>(store.as_ref(), &owner, id, event).await?,
  ))
}

// ─── Status ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ConcludeBody {
  pub date: Option<NaiveDate>,
}

/// `POST /rivalries/{id}/conclude`
pub async fn conclude_rivalry<S: EntityStore>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Path(id): Path<Uuid>,
  Json(body): Json<ConcludeBody>,
) -> Result<Json<Rivalry>, ApiError> {
  let date = body.date.unwrap_or_else(|| Utc::now().date_naive());
  Ok(Json(
    chronicle::conclude::<S, Rivalry>(store.as_ref(), &owner, id, date).await?,
  ))
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
  pub status: StorylineStatus,
  pub date:   Option<NaiveDate>,
}

/// `POST /storylines/{id}/status` with body `{"status":"active"}`
pub async fn set_storyline_status<S: EntityStore>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Path(id): Path<Uuid>,
  Json(body): Json<StatusBody>,
) -> Result<Json<Storyline>, ApiError> {
  let date = body.date.unwrap_or_else(|| Utc::now().date_naive());
  let storyline =
    chronicle::set_storyline_status(store.as_ref(), &owner, id, body.status, date)
      .await?;
  Ok(Json(storyline))
}
