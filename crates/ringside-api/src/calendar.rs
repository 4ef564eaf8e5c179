//! Calendar reads.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/calendar?date=2024-06-08` | every show occurring that day |
//! | `GET`  | `/calendar/month?year=2024&month=6[&cap=3]` | one entry per day |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use chrono::NaiveDate;
use ringside_core::{
  occurrence::{CalendarDay, DEFAULT_DAY_CAP},
  service::shows,
  show::Show,
  store::EntityStore,
};
use serde::Deserialize;

use crate::{error::ApiError, owner::Owner};

#[derive(Debug, Deserialize)]
pub struct DayParams {
  pub date: NaiveDate,
}

pub async fn day<S: EntityStore>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Query(params): Query<DayParams>,
) -> Result<Json<Vec<Show>>, ApiError> {
  Ok(Json(shows::occurrences_on(store.as_ref(), &owner, params.date).await?))
}

#[derive(Debug, Deserialize)]
pub struct MonthParams {
  pub year:  i32,
  pub month: u32,
  pub cap:   Option<usize>,
}

pub async fn month<S: EntityStore>(
  State(store): State<Arc<S>>,
  Owner(owner): Owner,
  Query(params): Query<MonthParams>,
) -> Result<Json<Vec<CalendarDay>>, ApiError> {
  let days = shows::month_view(
    store.as_ref(),
    &owner,
    params.year,
    params.month,
    params.cap.unwrap_or(DEFAULT_DAY_CAP),
  )
  .await?;
  Ok(Json(days))
}
