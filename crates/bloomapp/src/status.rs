//! # Status Engine
//!
//! Maps a plant's last-watered date and interval to a due date, a signed day
//! offset and a [`Classification`].
//!
//! ## Rules
//!
//! ```text
//! effective  = interval if interval > 0 else DEFAULT_INTERVAL_DAYS
//! due_date   = last_watered + effective
//! days       = due_date - today
//!
//! days < 0       → Overdue
//! days ∈ {0, 1}  → DueSoon
//! otherwise      → Healthy
//! ```
//!
//! The rules are evaluated in that order and the first match wins.
//!
//! ## Determinism
//!
//! `today` is a parameter. Callers evaluating a batch capture it once so every
//! plant in the batch is classified against the same day even if the batch
//! straddles midnight.

use chrono::NaiveDate;

use crate::dates::{add_days, day_difference};
use crate::model::{Classification, DerivedStatus, Plant};

/// Interval used when a plant has none, or a non-positive one.
pub const DEFAULT_INTERVAL_DAYS: u32 = 3;

/// The date-related part of a [`DerivedStatus`], without the plant id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedFields {
    pub due_date: NaiveDate,
    pub days_until_due: i64,
    pub classification: Classification,
}

pub fn effective_interval(interval_days: Option<u32>) -> u32 {
    match interval_days {
        Some(n) if n > 0 => n,
        _ => DEFAULT_INTERVAL_DAYS,
    }
}

pub fn classify_offset(days_until_due: i64) -> Classification {
    if days_until_due < 0 {
        Classification::Overdue
    } else if days_until_due <= 1 {
        Classification::DueSoon
    } else {
        Classification::Healthy
    }
}

pub fn classify(
    last_watered: NaiveDate,
    interval_days: Option<u32>,
    today: NaiveDate,
) -> DerivedFields {
    let interval = effective_interval(interval_days);
    let due_date = add_days(last_watered, i64::from(interval));
    let days_until_due = day_difference(due_date, today);
    DerivedFields {
        due_date,
        days_until_due,
        classification: classify_offset(days_until_due),
    }
}

pub fn status_for(plant: &Plant, today: NaiveDate) -> DerivedStatus {
    let fields = classify(plant.last_watered, plant.watering_interval_days, today);
    DerivedStatus {
        plant_id: plant.id,
        due_date: fields.due_date,
        days_until_due: fields.days_until_due,
        classification: fields.classification,
    }
}
