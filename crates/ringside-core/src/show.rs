//! Shows and the matches booked on them.
//!
//! A show record is either a recurring *template* or a concrete calendar
//! *instance*. Instances are copies of a template made the first time a
//! match is booked for a given date; afterwards they live on independently.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Error, Result,
  record::{Record, Table},
  timeline::validate_participants,
};

/// Minimum participants when booking a new match.
pub const BOOKING_MIN_PARTICIPANTS: usize = 2;

/// Minimum participants when editing an already-booked match.
pub const EDIT_MIN_PARTICIPANTS: usize = 1;

// ─── Frequency ───────────────────────────────────────────────────────────────

/// How often a show template recurs.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Frequency {
  #[default]
  OneTime,
  Weekly,
  Monthly,
  Quarterly,
  Yearly,
}

// ─── Match ───────────────────────────────────────────────────────────────────

/// The bout style of a match.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MatchType {
  #[default]
  Singles,
  TagTeam,
  TripleThreat,
  FatalFourWay,
  BattleRoyal,
  Handicap,
  Ladder,
  SteelCage,
  TablesLaddersChairs,
  NoDisqualification,
  Submission,
  Other,
}

/// A single match on a show card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
  #[serde(default)]
  pub id:           Uuid,
  /// Wrestler names in billing order. Free strings, not foreign keys.
  pub participants: Vec<String>,
  #[serde(default, rename = "type")]
  pub kind:         MatchType,
  /// Name of the championship on the line, if any.
  #[serde(default)]
  pub championship: Option<String>,
  #[serde(default)]
  pub stipulation:  Option<String>,
  #[serde(default)]
  pub notes:        Option<String>,
}

impl Match {
  pub fn new(kind: MatchType, participants: Vec<String>) -> Self {
    Self {
      id: Uuid::nil(),
      participants,
      kind,
      championship: None,
      stipulation: None,
      notes: None,
    }
  }

  /// Trim participant names and assign an id if none is set.
  pub fn normalize(&mut self) {
    for p in &mut self.participants {
      *p = p.trim().to_owned();
    }
    if self.id.is_nil() {
      self.id = Uuid::new_v4();
    }
  }

  pub fn validate(&self, min_participants: usize) -> Result<()> {
    validate_participants(&self.participants, min_participants)
  }
}

// ─── Show ────────────────────────────────────────────────────────────────────

fn default_true() -> bool { true }

/// A show template or a materialised instance of one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
  #[serde(default)]
  pub id:            Uuid,
  pub name:          String,
  #[serde(default)]
  pub brand:         String,
  #[serde(default)]
  pub frequency:     Frequency,
  #[serde(default)]
  pub venue:         Option<String>,
  #[serde(default)]
  pub description:   Option<String>,
  /// Anchor (first) date for templates; the calendar date for instances.
  pub date:          NaiveDate,
  #[serde(default = "default_true")]
  pub is_template:   bool,
  /// The template this instance was generated from.
  #[serde(default)]
  pub base_show_id:  Option<Uuid>,
  #[serde(default)]
  pub instance_date: Option<NaiveDate>,
  #[serde(default)]
  pub matches:       Vec<Match>,
}

impl Show {
  /// A new recurring template anchored on `date`.
  pub fn template(
    name: impl Into<String>,
    brand: impl Into<String>,
    frequency: Frequency,
    date: NaiveDate,
  ) -> Self {
    Self {
      id: Uuid::nil(),
      name: name.into(),
      brand: brand.into(),
      frequency,
      venue: None,
      description: None,
      date,
      is_template: true,
      base_show_id: None,
      instance_date: None,
      matches: Vec::new(),
    }
  }

  /// Copy this template's display fields into an unbooked instance for
  /// `date`. The copy has a nil id until it is stored.
  pub fn instance_for(&self, date: NaiveDate) -> Self {
    Self {
      id: Uuid::nil(),
      name: self.name.clone(),
      brand: self.brand.clone(),
      frequency: self.frequency,
      venue: self.venue.clone(),
      description: self.description.clone(),
      date,
      is_template: false,
      base_show_id: Some(self.id),
      instance_date: Some(date),
      matches: Vec::new(),
    }
  }

  /// True if this record is the materialised instance of `template_id` on
  /// `date`.
  pub fn is_instance_of(&self, template_id: Uuid, date: NaiveDate) -> bool {
    !self.is_template
      && self.base_show_id == Some(template_id)
      && self.instance_date == Some(date)
  }
}

impl Record for Show {
  const TABLE: Table = Table::Shows;

  fn id(&self) -> Uuid { self.id }

  fn set_id(&mut self, id: Uuid) { self.id = id; }

  fn validate(&self) -> Result<()> {
    if self.name.trim().is_empty() {
      return Err(Error::validation("show name is required"));
    }
    if self.is_template {
      if self.instance_date.is_some() {
        return Err(Error::validation("a template cannot have an instance date"));
      }
    } else if self.instance_date.is_none() {
      return Err(Error::validation("a show instance needs an instance date"));
    }
    for m in &self.matches {
      m.validate(EDIT_MIN_PARTICIPANTS)?;
    }
    Ok(())
  }
}
