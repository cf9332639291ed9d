//! # Domain Model
//!
//! This module defines the data structures for bloom: the stored [`Plant`]
//! record and the ephemeral values derived from it ([`DerivedStatus`],
//! [`Task`], [`PlantView`]).
//!
//! ## Stored vs Derived
//!
//! A [`Plant`] is the only thing that lives in a collection snapshot. Everything
//! about *when* it needs water is derived on demand against an explicit
//! "today", because the answer changes at midnight even though the record does
//! not:
//!
//! ```text
//! Plant { last_watered, watering_interval_days }
//!        │
//!        ▼  status::status_for(plant, today)
//! DerivedStatus { due_date, days_until_due, classification }
//!        │
//!        ├──▶ Task       (+ name, location)        tasks::derive_tasks
//!        └──▶ PlantView  (+ plant, display index)  commands::list
//! ```
//!
//! ## Optional Fields
//!
//! `species`, `location` and `notes` are `Option<String>`. The draft boundary
//! turns blank input into `None`, so consumers never have to distinguish
//! between "missing" and "empty".
//!
//! ## Watering Interval
//!
//! `watering_interval_days` is stored as given. `None` and `Some(0)` are both
//! legal and mean "use the fallback interval"; the substitution happens in
//! [`crate::status`], never here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::BloomError;

/// Opaque plant identifier, assigned once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantId(Uuid);

impl PlantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, enough to tell plants apart in a listing.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for PlantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlantId {
    type Err = BloomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| BloomError::InvalidArgument(format!("not a plant id: {}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    pub name: String,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub last_watered: NaiveDate,
    #[serde(default)]
    pub watering_interval_days: Option<u32>,
}

impl Plant {
    pub fn new(name: impl Into<String>, last_watered: NaiveDate, interval: Option<u32>) -> Self {
        Self {
            id: PlantId::new(),
            name: name.into(),
            species: None,
            location: None,
            notes: None,
            last_watered,
            watering_interval_days: interval,
        }
    }

    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Text that free-text search runs against: name, species and location,
    /// absent fields skipped, joined by a single space.
    pub fn search_haystack(&self) -> String {
        [
            Some(self.name.as_str()),
            self.species.as_deref(),
            self.location.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Watering health of a plant relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    Overdue,
    DueSoon,
    Healthy,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueSoon => "due-soon",
            Self::Healthy => "healthy",
        }
    }

    /// Human label used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overdue => "Overdue",
            Self::DueSoon => "Due soon",
            Self::Healthy => "Healthy",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Watering state of one plant, computed against a specific "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedStatus {
    pub plant_id: PlantId,
    pub due_date: NaiveDate,
    /// 0 = due today, negative = overdue by that many days.
    pub days_until_due: i64,
    pub classification: Classification,
}

/// An entry in the upcoming-watering view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    #[serde(flatten)]
    pub status: DerivedStatus,
    pub name: String,
    pub location: Option<String>,
}

impl Task {
    pub fn plant_id(&self) -> PlantId {
        self.status.plant_id
    }

    pub fn due_date(&self) -> NaiveDate {
        self.status.due_date
    }

    pub fn days_until_due(&self) -> i64 {
        self.status.days_until_due
    }

    pub fn classification(&self) -> Classification {
        self.status.classification
    }
}

/// A plant paired with its derived status and its position in the default
/// listing (1-based), so every client shows the same numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlantView {
    pub index: usize,
    pub plant: Plant,
    pub status: DerivedStatus,
}
