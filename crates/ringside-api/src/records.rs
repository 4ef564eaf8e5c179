//! Generic read, create, update and delete handlers shared by every table.
//!
//! | Method   | Path           | Notes                              |
//! |----------|----------------|------------------------------------|
//! | `POST`   | `/<table>`      | 201 with the stored record         |
//! | `GET`    | `/<table>/{id}` | 404 if not found                   |
//! | `PUT`    | `/<table>/{id}` | id in the path wins over the body  |
//! | `DELETE` | `/<table>/{id}` | 204; 404 if nothing was deleted    |
//!
//! List endpoints are per table because each has its own filters.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use ringside_core::{Record, service::records, store::EntityStore};
use uuid::Uuid;

use crate::{error::ApiError, owner::Owner};

// ─── Create ───────────────────────────────────────────────────────────────────

pub async fn create<S, R>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Json(record): Json<R>,
) -> Result<impl IntoResponse, ApiError>
where
  S: EntityStore,
  R: Record,
{
  let record = records::create(store.as_ref(), &owner, record).await?;
  Ok((StatusCode::CREATED, Json(record)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

pub async fn get_one<S, R>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Path(id): Path<Uuid>,
) -> Result<Json<R>, ApiError>
where
  S: EntityStore,
  R: Record,
{
  Ok(Json(records::fetch(store.as_ref(), &owner, id).await?))
}

// ─── Update ───────────────────────────────────────────────────────────────────

pub async fn update<S, R>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Path(id): Path<Uuid>,
  Json(mut record): Json<R>,
) -> Result<Json<R>, ApiError>
where
  S: EntityStore,
  R: Record,
{
  record.set_id(id);
  Ok(Json(records::update(store.as_ref(), &owner, record).await?))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

pub async fn delete<S, R>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: EntityStore,
  R: Record,
{
  records::remove::<S, R>(store.as_ref(), &owner, id).await?;
  Ok(StatusCode::NO_CONTENT)
}
