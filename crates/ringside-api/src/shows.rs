//! Handlers for `/shows`: listing, cascade delete, materialisation and match
//! booking.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::NaiveDate;
use ringside_core::{
  service::{BulkReport, records, shows},
  show::{Match, Show},
  store::EntityStore,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{error::ApiError, owner::Owner};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  pub brand:     Option<String>,
  /// `true` for templates only, `false` for instances only.
  pub templates: Option<bool>,
}

/// `GET /shows[?brand=<brand>&templates=<bool>]`
pub async fn list<S: EntityStore>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Show>>, ApiError> {
  let all: Vec<Show> = records::list(store.as_ref(), &owner).await?;
  let shows = all
    .into_iter()
    .filter(|s| {
      params.brand.as_deref().is_none_or(|b| s.brand.eq_ignore_ascii_case(b))
        && params.templates.is_none_or(|t| s.is_template == t)
    })
    .collect();
  Ok(Json(shows))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /shows/{id}`. Deleting a template deletes its instances too.
///
/// Responds 200 with the report when every delete succeeded and 207 when some
/// did not.
pub async fn delete<S: EntityStore>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
  let report: BulkReport = shows::delete_show(store.as_ref(), &owner, id).await?;
  let status = if report.is_clean() {
    StatusCode::OK
  } else {
    StatusCode::MULTI_STATUS
  };
  Ok((status, Json(report)))
}

// ─── Instances ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct InstanceBody {
  pub date: NaiveDate,
}

/// `POST /shows/{id}/instances` with body `{"date":"2024-06-08"}`
pub async fn materialize<S: EntityStore>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Path(id): Path<Uuid>,
  Json(body): Json<InstanceBody>,
) -> Result<Json<Show>, ApiError> {
  let template: Show = records::fetch(store.as_ref(), &owner, id).await?;
  let instance =
    shows::materialize_instance(store.as_ref(), &owner, &template, body.date)
      .await?;
  Ok(Json(instance))
}

// ─── Matches ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BookBody {
  /// Required when booking against a template.
  pub date:     Option<NaiveDate>,
  #[serde(rename = "match")]
  pub booking:  Match,
}

/// `POST /shows/{id}/matches`; returns the instance the match landed on.
pub async fn book<S: EntityStore>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Path(id): Path<Uuid>,
  Json(body): Json<BookBody>,
) -> Result<impl IntoResponse, ApiError> {
  let show =
    shows::book_match(store.as_ref(), &owner, id, body.date, body.booking)
      .await?;
  Ok((StatusCode::CREATED, Json(show)))
}

/// `DELETE /shows/{id}/matches/{match_id}`
pub async fn remove_match<S: EntityStore>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Path((id, match_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Show>, ApiError> {
  Ok(Json(shows::remove_match(store.as_ref(), &owner, id, match_id).await?))
}
