//! Persisted reign-ledger operations.
//!
//! Each operation works on a freshly loaded copy; the ledger change becomes
//! visible only through the record returned after a successful write.

use chrono::NaiveDate;
use uuid::Uuid;

use super::records;
use crate::{
  OwnerId, Result,
  championship::{Championship, Reign, Standing},
  store::EntityStore,
};

pub async fn assign_title<S: EntityStore>(
  store: &S,
  owner: &OwnerId,
  championship_id: Uuid,
  champion: &str,
  event: &str,
  date: NaiveDate,
) -> Result<Championship> {
  let mut title: Championship =
    records::fetch(store, owner, championship_id).await?;
  title.assign(champion, event, date)?;
  let title = records::update(store, owner, title).await?;
  tracing::info!(title = %title.name, champion, %date, "title changed hands");
  Ok(title)
}

pub async fn vacate_title<S: EntityStore>(
  store: &S,
  owner: &OwnerId,
  championship_id: Uuid,
  date: NaiveDate,
) -> Result<Championship> {
  let mut title: Championship =
    records::fetch(store, owner, championship_id).await?;
  title.vacate(date)?;
  let title = records::update(store, owner, title).await?;
  tracing::info!(title = %title.name, %date, "title vacated");
  Ok(title)
}

/// Delete history entry `index`; returns the updated championship and the
/// removed reign.
pub async fn delete_reign<S: EntityStore>(
  store: &S,
  owner: &OwnerId,
  championship_id: Uuid,
  index: usize,
) -> Result<(Championship, Reign)> {
  let mut title: Championship =
    records::fetch(store, owner, championship_id).await?;
  let removed = title.delete_history_entry(index)?;
  let title = records::update(store, owner, title).await?;
  Ok((title, removed))
}

/// Holder state and running reign length as of `as_of`.
pub async fn standing<S: EntityStore>(
  store: &S,
  owner: &OwnerId,
  championship_id: Uuid,
  as_of: NaiveDate,
) -> Result<Standing> {
  let title: Championship =
    records::fetch(store, owner, championship_id).await?;
  Ok(title.standing(as_of))
}
