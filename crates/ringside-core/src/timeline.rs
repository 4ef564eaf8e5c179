//! Append-only timelines shared by rivalries and storylines.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, record::Record};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TimelineKind {
  Promo,
  Match,
  Attack,
  Segment,
  Interview,
  #[default]
  Other,
}

/// A dated beat in a rivalry or storyline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
  pub date:        NaiveDate,
  #[serde(default, rename = "type")]
  pub kind:        TimelineKind,
  pub description: String,
}

impl TimelineEvent {
  pub fn validate(&self) -> Result<()> {
    if self.description.trim().is_empty() {
      return Err(Error::validation("timeline event needs a description"));
    }
    Ok(())
  }
}

/// A record that carries a timeline and can be concluded.
pub trait Chronicle: Record {
  fn timeline_mut(&mut self) -> &mut Vec<TimelineEvent>;

  fn is_concluded(&self) -> bool;

  /// Mark concluded as of `date`.
  fn conclude(&mut self, date: NaiveDate);

  /// Append `event`. Concluded records are closed to new events.
  fn record_event(&mut self, event: TimelineEvent) -> Result<()> {
    event.validate()?;
    if self.is_concluded() {
      return Err(Error::validation(format!(
        "{} record {} is concluded",
        Self::TABLE,
        self.id()
      )));
    }
    self.timeline_mut().push(event);
    Ok(())
  }
}

/// Participants must be present, non-empty, and unique once trimmed.
pub(crate) fn validate_participants(
  participants: &[String],
  min: usize,
) -> Result<()> {
  if participants.len() < min {
    return Err(Error::Validation(format!(
      "at least {min} participant(s) required, got {}",
      participants.len()
    )));
  }
  let mut seen = HashSet::new();
  for p in participants {
    let name = p.trim();
    if name.is_empty() {
      return Err(Error::validation("participant names must not be empty"));
    }
    if !seen.insert(name) {
      return Err(Error::Validation(format!("{name:?} listed twice")));
    }
  }
  Ok(())
}
