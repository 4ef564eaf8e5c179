//! Championships and the reign ledger.
//!
//! A championship is either vacant or held. Its history is append-only in
//! normal operation: every change of holder closes the open reign and opens a
//! new one. At most one reign is open (has no `end`) at any time, and when a
//! champion is set that open reign belongs to them.
//!
//! Ledger operations validate before they mutate, so a rejected call leaves
//! the championship untouched. Callers that persist should apply the
//! operation to a copy and only adopt it once the write succeeds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Error, Result,
  record::{Record, Table},
};

// ─── Reign ───────────────────────────────────────────────────────────────────

/// One entry in a championship's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reign {
  pub champion: String,
  pub start:    NaiveDate,
  /// `None` while the reign is ongoing.
  #[serde(default)]
  pub end:      Option<NaiveDate>,
  /// Whole days between `start` and `end`; 0 while open.
  #[serde(default)]
  pub days:     u32,
  /// The event the title changed hands at.
  #[serde(default)]
  pub event:    String,
}

impl Reign {
  fn open(champion: String, start: NaiveDate, event: String) -> Self {
    Self { champion, start, end: None, days: 0, event }
  }

  pub fn is_open(&self) -> bool { self.end.is_none() }
}

/// Whole days from `start` to `end`.
pub fn reign_length(start: NaiveDate, end: NaiveDate) -> Result<u32> {
  u32::try_from((end - start).num_days())
    .map_err(|_| Error::InvalidDateRange { start, end })
}

// ─── Championship ────────────────────────────────────────────────────────────

/// Holder state plus the running reign length, as of a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
  pub championship_id: Uuid,
  pub as_of:           NaiveDate,
  pub status:          TitleStatus,
  /// `None` while vacant, or when `as_of` precedes the reign start.
  pub reign_days:      Option<u32>,
}

/// Derived holder state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TitleStatus {
  Vacant,
  Held { champion: String, since: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Championship {
  #[serde(default)]
  pub id:               Uuid,
  pub name:             String,
  #[serde(default)]
  pub brand:            String,
  #[serde(default)]
  pub current_champion: Option<String>,
  #[serde(default)]
  pub reign_start:      Option<NaiveDate>,
  #[serde(default)]
  pub history:          Vec<Reign>,
}

impl Championship {
  /// A new, vacant championship with no history.
  pub fn new(name: impl Into<String>, brand: impl Into<String>) -> Self {
    Self {
      id: Uuid::nil(),
      name: name.into(),
      brand: brand.into(),
      current_champion: None,
      reign_start: None,
      history: Vec::new(),
    }
  }

  pub fn status(&self) -> TitleStatus {
    match (&self.current_champion, self.reign_start) {
      (Some(champion), Some(since)) => {
        TitleStatus::Held { champion: champion.clone(), since }
      }
      _ => TitleStatus::Vacant,
    }
  }

  pub fn open_reign(&self) -> Option<&Reign> {
    self.history.iter().rev().find(|r| r.is_open())
  }

  /// Running length of the current reign as of `as_of`.
  pub fn reign_days(&self, as_of: NaiveDate) -> Option<u32> {
    self
      .open_reign()
      .and_then(|r| reign_length(r.start, as_of).ok())
  }

  pub fn standing(&self, as_of: NaiveDate) -> Standing {
    Standing {
      championship_id: self.id,
      as_of,
      status: self.status(),
      reign_days: self.reign_days(as_of),
    }
  }

  /// Index and computed length of the open reign if it were closed on `date`.
  fn closing(&self, date: NaiveDate) -> Result<Option<(usize, u32)>> {
    match self.history.iter().rposition(Reign::is_open) {
      Some(i) => Ok(Some((i, reign_length(self.history[i].start, date)?))),
      None => Ok(None),
    }
  }

  fn close_open_reign(&mut self, closing: Option<(usize, u32)>, date: NaiveDate) {
    if let Some((i, days)) = closing {
      let reign = &mut self.history[i];
      reign.end = Some(date);
      reign.days = days;
    }
  }

  /// Crown `champion` at `event` on `date`.
  ///
  /// Closes the open reign, if any, and opens a new one. Assigning the
  /// reigning champion again starts a fresh reign.
  pub fn assign(
    &mut self,
    champion: &str,
    event: &str,
    date: NaiveDate,
  ) -> Result<()> {
    let champion = champion.trim();
    if champion.is_empty() {
      return Err(Error::validation("champion name is required"));
    }
    let closing = self.closing(date)?;

    self.close_open_reign(closing, date);
    self
      .history
      .push(Reign::open(champion.to_owned(), date, event.trim().to_owned()));
    self.current_champion = Some(champion.to_owned());
    self.reign_start = Some(date);
    Ok(())
  }

  /// Strip the title on `date`, leaving it vacant.
  pub fn vacate(&mut self, date: NaiveDate) -> Result<()> {
    let closing = self.closing(date)?;
    self.close_open_reign(closing, date);
    self.current_champion = None;
    self.reign_start = None;
    Ok(())
  }

  /// Remove a history entry and return it.
  ///
  /// Removing the last entry while it belongs to the current champion
  /// re-derives the holder from the new last entry: an open entry becomes the
  /// current reign, anything else leaves the title vacant. Removing any other
  /// entry touches nothing else; neighbouring day counts are not revisited.
  pub fn delete_history_entry(&mut self, index: usize) -> Result<Reign> {
    let len = self.history.len();
    if index >= len {
      return Err(Error::HistoryIndexOutOfRange { index, len });
    }
    let removed = self.history.remove(index);

    let was_current = index == len - 1
      && self.current_champion.as_deref() == Some(removed.champion.as_str());
    if was_current {
      match self.history.last() {
        Some(last) if last.is_open() => {
          self.current_champion = Some(last.champion.clone());
          self.reign_start = Some(last.start);
        }
        _ => {
          self.current_champion = None;
          self.reign_start = None;
        }
      }
    }
    Ok(removed)
  }
}

impl Record for Championship {
  const TABLE: Table = Table::Championships;

  fn id(&self) -> Uuid { self.id }

  fn set_id(&mut self, id: Uuid) { self.id = id; }

  /// Besides the name, checks the ledger shape: closed reigns carry their
  /// true length, at most one reign is open and it must be the latest, and
  /// `current_champion`/`reign_start` mirror that open reign exactly (both
  /// unset when there is none).
  fn validate(&self) -> Result<()> {
    if self.name.trim().is_empty() {
      return Err(Error::validation("championship name is required"));
    }

    for reign in &self.history {
      if reign.champion.trim().is_empty() {
        return Err(Error::validation("every reign needs a champion"));
      }
      let expected = match reign.end {
        Some(end) => reign_length(reign.start, end)?,
        None => 0,
      };
      if reign.days != expected {
        return Err(Error::Validation(format!(
          "reign of {} starting {} lasts {expected} days, not {}",
          reign.champion, reign.start, reign.days
        )));
      }
    }

    let open: Vec<usize> = self
      .history
      .iter()
      .enumerate()
      .filter(|(_, r)| r.is_open())
      .map(|(i, _)| i)
      .collect();
    match open.as_slice() {
      [] => {
        if self.current_champion.is_some() || self.reign_start.is_some() {
          return Err(Error::validation(
            "a title with no open reign cannot have a current champion",
          ));
        }
      }
      [i] => {
        let reign = &self.history[*i];
        if *i != self.history.len() - 1 {
          return Err(Error::validation("the open reign must be the latest entry"));
        }
        if self.current_champion.as_deref() != Some(reign.champion.as_str())
          || self.reign_start != Some(reign.start)
        {
          return Err(Error::validation(
            "current champion and reign start must match the open reign",
          ));
        }
      }
      _ => {
        return Err(Error::validation("a championship can have only one open reign"));
      }
    }
    Ok(())
  }
}
