//! Show materialisation, match booking, cascade deletion and calendar reads.

use chrono::NaiveDate;
use uuid::Uuid;

use super::{BulkReport, records};
use crate::{
  Error, OwnerId, Record, Result,
  occurrence::{self, CalendarDay},
  show::{BOOKING_MIN_PARTICIPANTS, Match, Show},
  store::EntityStore,
};

/// Return the instance of `template` on `date`, creating and persisting it if
/// none exists yet. Calling this twice for the same pair yields one instance.
pub async fn materialize_instance<S: EntityStore>(
  store: &S,
  owner: &OwnerId,
  template: &Show,
  date: NaiveDate,
) -> Result<Show> {
  if !template.is_template {
    return Err(Error::Validation(format!(
      "show {} is an instance, not a template",
      template.id
    )));
  }

  let shows: Vec<Show> = records::list(store, owner).await?;
  if let Some(existing) =
    shows.into_iter().find(|s| s.is_instance_of(template.id, date))
  {
    return Ok(existing);
  }

  let instance =
    records::create(store, owner, template.instance_for(date)).await?;
  tracing::info!(
    template = %template.id,
    instance = %instance.id,
    %date,
    "materialised show instance"
  );
  Ok(instance)
}

/// Book `new_match` on a show.
///
/// Booking against a template materialises the instance for `date` first
/// (`date` is then required); booking against an instance appends directly.
/// Returns the updated instance.
pub async fn book_match<S: EntityStore>(
  store: &S,
  owner: &OwnerId,
  show_id: Uuid,
  date: Option<NaiveDate>,
  mut new_match: Match,
) -> Result<Show> {
  new_match.normalize();
  new_match.validate(BOOKING_MIN_PARTICIPANTS)?;

  let show: Show = records::fetch(store, owner, show_id).await?;
  let mut instance = if show.is_template {
    let date = date.ok_or_else(|| {
      Error::validation("a date is required to book against a template")
    })?;
    materialize_instance(store, owner, &show, date).await?
  } else {
    show
  };

  instance.matches.push(new_match);
  records::update(store, owner, instance).await
}

/// Remove a match from a show by id.
pub async fn remove_match<S: EntityStore>(
  store: &S,
  owner: &OwnerId,
  show_id: Uuid,
  match_id: Uuid,
) -> Result<Show> {
  let mut show: Show = records::fetch(store, owner, show_id).await?;
  let before = show.matches.len();
  show.matches.retain(|m| m.id != match_id);
  if show.matches.len() == before {
    return Err(Error::MatchNotFound { show_id, match_id });
  }
  records::update(store, owner, show).await
}

/// Delete a show. Deleting a template also deletes its instances, one record
/// at a time; the report counts every delete, including the show itself.
///
/// A failed instance delete does not stop the cascade and leaves that
/// instance orphaned.
pub async fn delete_show<S: EntityStore>(
  store: &S,
  owner: &OwnerId,
  show_id: Uuid,
) -> Result<BulkReport> {
  let show: Show = records::fetch(store, owner, show_id).await?;
  let mut report = BulkReport::default();

  if show.is_template {
    let shows: Vec<Show> = records::list(store, owner).await?;
    for instance in shows
      .iter()
      .filter(|s| !s.is_template && s.base_show_id == Some(show.id))
    {
      report.record(records::remove::<S, Show>(store, owner, instance.id()).await);
    }
  }
  report.record(records::remove::<S, Show>(store, owner, show.id).await);

  if !report.is_clean() {
    tracing::warn!(
      show = %show_id,
      failed = report.failed,
      "cascade delete left orphaned records"
    );
  }
  Ok(report)
}

/// Every show occurring on `date`.
pub async fn occurrences_on<S: EntityStore>(
  store: &S,
  owner: &OwnerId,
  date: NaiveDate,
) -> Result<Vec<Show>> {
  let shows: Vec<Show> = records::list(store, owner).await?;
  Ok(occurrence::occurrences_on(&shows, date).into_iter().cloned().collect())
}

pub async fn month_view<S: EntityStore>(
  store: &S,
  owner: &OwnerId,
  year: i32,
  month: u32,
  cap: usize,
) -> Result<Vec<CalendarDay>> {
  let shows: Vec<Show> = records::list(store, owner).await?;
  occurrence::month_view(&shows, year, month, cap)
}
