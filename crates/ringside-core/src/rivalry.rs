use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Error, Result,
  record::{Record, Table},
  timeline::{Chronicle, TimelineEvent, validate_participants},
};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RivalryStatus {
  #[default]
  Active,
  Dormant,
  Concluded,
}

/// A feud between two or more wrestlers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rivalry {
  #[serde(default)]
  pub id:           Uuid,
  pub title:        String,
  pub participants: Vec<String>,
  #[serde(default)]
  pub status:       RivalryStatus,
  #[serde(default)]
  pub description:  Option<String>,
  #[serde(default)]
  pub start_date:   Option<NaiveDate>,
  #[serde(default)]
  pub end_date:     Option<NaiveDate>,
  #[serde(default)]
  pub timeline:     Vec<TimelineEvent>,
}

impl Rivalry {
  pub fn new(title: impl Into<String>, participants: Vec<String>) -> Self {
    Self {
      id: Uuid::nil(),
      title: title.into(),
      participants,
      status: RivalryStatus::Active,
      description: None,
      start_date: None,
      end_date: None,
      timeline: Vec::new(),
    }
  }
}

impl Record for Rivalry {
  const TABLE: Table = Table::Rivalries;

  fn id(&self) -> Uuid { self.id }

  fn set_id(&mut self, id: Uuid) { self.id = id; }

  fn validate(&self) -> Result<()> {
    if self.title.trim().is_empty() {
      return Err(Error::validation("rivalry title is required"));
    }
    validate_participants(&self.participants, 2)
  }
}

impl Chronicle for Rivalry {
  fn timeline_mut(&mut self) -> &mut Vec<TimelineEvent> { &mut self.timeline }

  fn is_concluded(&self) -> bool { self.status == RivalryStatus::Concluded }

  fn conclude(&mut self, date: NaiveDate) {
    self.status = RivalryStatus::Concluded;
    self.end_date = Some(date);
  }
}
