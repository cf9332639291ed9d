//! # Input Boundary
//!
//! Operators enter plants as loosely typed field values. A [`PlantDraft`]
//! holds those values until submission, where they are normalized into a
//! [`Plant`]:
//!
//! - **Name** is trimmed; an empty name rejects the submission silently
//!   ([`PlantDraft::into_plant`] returns `None`). The caller decides whether to
//!   tell the operator.
//! - **Species, location, notes** are trimmed; blank becomes `None`.
//! - **Interval** text goes through [`parse_interval_input`]: numbers are
//!   truncated to whole days, anything non-numeric becomes `0` (which the
//!   status engine reads as "use the fallback"), negatives are rejected.
//! - **Last watered** text goes through [`parse_date_input`] (`YYYY-MM-DD`).
//!
//! This is the only place these rules live. The store and status engine trust
//! whatever plant they are handed.

use chrono::NaiveDate;

use crate::error::{BloomError, Result};
use crate::model::{Plant, PlantId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantDraft {
    pub name: String,
    pub species: String,
    pub location: String,
    pub notes: String,
    pub last_watered: NaiveDate,
    pub watering_interval_days: u32,
}

impl PlantDraft {
    /// A blank draft: watered today, default interval.
    pub fn new(today: NaiveDate, default_interval: u32) -> Self {
        Self {
            name: String::new(),
            species: String::new(),
            location: String::new(),
            notes: String::new(),
            last_watered: today,
            watering_interval_days: default_interval,
        }
    }

    pub fn from_plant(plant: &Plant) -> Self {
        Self {
            name: plant.name.clone(),
            species: plant.species.clone().unwrap_or_default(),
            location: plant.location.clone().unwrap_or_default(),
            notes: plant.notes.clone().unwrap_or_default(),
            last_watered: plant.last_watered,
            watering_interval_days: plant.watering_interval_days.unwrap_or(0),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn species(mut self, species: impl Into<String>) -> Self {
        self.species = species.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn last_watered(mut self, date: NaiveDate) -> Self {
        self.last_watered = date;
        self
    }

    pub fn interval(mut self, days: u32) -> Self {
        self.watering_interval_days = days;
        self
    }

    /// Sets the interval from raw operator input.
    pub fn interval_input(self, raw: &str) -> Result<Self> {
        let days = parse_interval_input(raw)?;
        Ok(self.interval(days))
    }

    /// Sets the last-watered date from raw operator input.
    pub fn last_watered_input(self, raw: &str) -> Result<Self> {
        let date = parse_date_input(raw)?;
        Ok(self.last_watered(date))
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Normalizes the draft into a plant with the given id, or `None` when the
    /// name is blank.
    pub fn into_plant(self, id: PlantId) -> Option<Plant> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return None;
        }
        Some(Plant {
            id,
            name,
            species: non_blank(self.species),
            location: non_blank(self.location),
            notes: non_blank(self.notes),
            last_watered: self.last_watered,
            watering_interval_days: Some(self.watering_interval_days),
        })
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Coerces interval text to whole days.
///
/// `"4"` → 4, `"2.9"` → 2, `""`/`"soon"` → 0, `"-1"` → error.
pub fn parse_interval_input(raw: &str) -> Result<u32> {
    let Ok(value) = raw.trim().parse::<f64>() else {
        return Ok(0);
    };
    if !value.is_finite() {
        return Ok(0);
    }
    let days = value.trunc();
    if days < 0.0 {
        return Err(BloomError::InvalidInterval(format!(
            "{} (must not be negative)",
            raw.trim()
        )));
    }
    // `as` saturates for out-of-range floats
    Ok(days as u32)
}

pub fn parse_date_input(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| BloomError::InvalidDate(raw.trim().to_string()))
}
