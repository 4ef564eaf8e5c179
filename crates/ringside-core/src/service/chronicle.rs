//! Timeline appends and status transitions for rivalries and storylines.

use chrono::NaiveDate;
use uuid::Uuid;

use super::records;
use crate::{
  OwnerId, Result,
  storyline::{Storyline, StorylineStatus},
  store::EntityStore,
  timeline::{Chronicle, TimelineEvent},
};

pub async fn append_event<S, R>(
  store: &S,
  owner: &OwnerId,
  id: Uuid,
  event: TimelineEvent,
) -> Result<R>
where
  S: EntityStore,
  R: Chronicle,
{
  let mut record: R = records::fetch(store, owner, id).await?;
  record.record_event(event)?;
  records::update(store, owner, record).await
}

pub async fn conclude<S, R>(
  store: &S,
  owner: &OwnerId,
  id: Uuid,
  date: NaiveDate,
) -> Result<R>
where
  S: EntityStore,
  R: Chronicle,
{
  let mut record: R = records::fetch(store, owner, id).await?;
  record.conclude(date);
  records::update(store, owner, record).await
}

pub async fn set_storyline_status<S: EntityStore>(
  store: &S,
  owner: &OwnerId,
  id: Uuid,
  status: StorylineStatus,
  date: NaiveDate,
) -> Result<Storyline> {
  let mut storyline: Storyline = records::fetch(store, owner, id).await?;
  storyline.transition(status, date);
  records::update(store, owner, storyline).await
}
