//! Calendar occurrence resolution.
//!
//! Given every show record an owner has, decide which ones appear on a
//! calendar date. Booked instances always win over the template they were
//! copied from; templates are projected forward by their [`Frequency`].

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::{
  Error, Result,
  show::{Frequency, Show},
};

/// How many shows a calendar cell lists before collapsing into an overflow
/// count.
pub const DEFAULT_DAY_CAP: usize = 3;

/// True if `template` recurs on `date`, ignoring whether an instance has
/// already been materialised there.
///
/// Weekly templates repeat every seven days from the anchor. Monthly
/// templates repeat on the anchor's day-of-month, so an anchor on the 31st
/// skips shorter months. Quarterly and yearly templates only match the anchor
/// itself.
pub fn recurs_on(template: &Show, date: NaiveDate) -> bool {
  let anchor = template.date;
  if date < anchor {
    return false;
  }
  match template.frequency {
    Frequency::Weekly => (date - anchor).num_days() % 7 == 0,
    Frequency::Monthly => date.day() == anchor.day(),
    Frequency::OneTime | Frequency::Quarterly | Frequency::Yearly => {
      date == anchor
    }
  }
}

/// The shows occurring on `date`, in input order.
///
/// - Instances dated `date` appear only once at least one match is booked.
/// - Templates appear when they recur on `date` and no instance of them
///   exists for that date yet.
pub fn occurrences_on(shows: &[Show], date: NaiveDate) -> Vec<&Show> {
  shows
    .iter()
    .filter(|show| {
      if show.is_template {
        recurs_on(show, date)
          && !shows.iter().any(|s| s.is_instance_of(show.id, date))
      } else {
        show.instance_date == Some(date) && !show.matches.is_empty()
      }
    })
    .collect()
}

// ─── Month view ──────────────────────────────────────────────────────────────

/// One cell of a month calendar.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay {
  pub date:     NaiveDate,
  /// At most `cap` shows, in input order.
  pub shows:    Vec<Show>,
  /// How many further shows were cut by the cap.
  pub overflow: usize,
}

/// Resolve every day of `year`-`month`, listing at most `cap` shows per day.
pub fn month_view(
  shows: &[Show],
  year: i32,
  month: u32,
  cap: usize,
) -> Result<Vec<CalendarDay>> {
  let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
    Error::Validation(format!("{year}-{month:02} is not a calendar month"))
  })?;

  Ok(
    first
      .iter_days()
      .take_while(|d| d.month() == month)
      .map(|date| {
        let hits = occurrences_on(shows, date);
        let overflow = hits.len().saturating_sub(cap);
        CalendarDay {
          date,
          shows: hits.into_iter().take(cap).cloned().collect(),
          overflow,
        }
      })
      .collect(),
  )
}
