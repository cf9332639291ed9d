//! # List Query
//!
//! Search, status filter and sort over the plant collection, for display.
//!
//! ## Pipeline
//!
//! ```text
//! plants ──text filter──▶ ──status filter──▶ ──stable sort──▶ view
//! ```
//!
//! 1. **Text**: case-insensitive substring of the search text against
//!    [`Plant::search_haystack`] (name, species, location). Empty text matches
//!    everything.
//! 2. **Status**: [`StatusFilter::All`] keeps everything; the others keep only
//!    plants whose classification matches (`Due` selects
//!    [`Classification::DueSoon`]).
//! 3. **Sort**: by [`SortKey`]. All sorts are stable, so plants that compare
//!    equal keep collection order.
//!
//! An empty result is a normal outcome, not an error.
//!
//! ## Name Collation
//!
//! Name and location sorts use a three-level key, as root-locale collation does:
//!
//! 1. **Base letters**: NFD-decomposed, combining marks dropped, lowercased,
//!    so `Ästilbe` files under `a` next to `Astilbe`.
//! 2. **Accents**: the decomposed, lowercased text; unaccented sorts first.
//! 3. **Case**: lowercase ahead of uppercase.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::BloomError;
use crate::model::{Classification, Plant};
use crate::status::status_for;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Overdue,
    Due,
    Healthy,
}

impl StatusFilter {
    pub fn matches(&self, classification: Classification) -> bool {
        match self {
            Self::All => true,
            Self::Overdue => classification == Classification::Overdue,
            Self::Due => classification == Classification::DueSoon,
            Self::Healthy => classification == Classification::Healthy,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = BloomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "overdue" => Ok(Self::Overdue),
            "due" | "due-soon" => Ok(Self::Due),
            "healthy" => Ok(Self::Healthy),
            other => Err(BloomError::InvalidArgument(format!(
                "unknown status filter '{}' (expected all, overdue, due, healthy)",
                other
            ))),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Overdue => "overdue",
            Self::Due => "due",
            Self::Healthy => "healthy",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Due,
    Name,
    Location,
}

impl FromStr for SortKey {
    type Err = BloomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "due" => Ok(Self::Due),
            "name" => Ok(Self::Name),
            "location" => Ok(Self::Location),
            other => Err(BloomError::InvalidArgument(format!(
                "unknown sort key '{}' (expected due, name, location)",
                other
            ))),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Due => "due",
            Self::Name => "name",
            Self::Location => "location",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlantQuery {
    pub search_text: String,
    pub status_filter: StatusFilter,
    pub sort_key: SortKey,
}

impl PlantQuery {
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn status(mut self, filter: StatusFilter) -> Self {
        self.status_filter = filter;
        self
    }

    pub fn sort(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }
}

pub fn matches_text(plant: &Plant, needle_lower: &str) -> bool {
    needle_lower.is_empty() || plant.search_haystack().to_lowercase().contains(needle_lower)
}

/// Compares display strings by base letters, then accents, then case
/// (lowercase first).
pub fn collate(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| b.cmp(a))
}

fn base_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

fn accent_key(s: &str) -> String {
    s.nfd().collect::<String>().to_lowercase()
}

pub fn query(plants: &[Plant], query: &PlantQuery, today: NaiveDate) -> Vec<Plant> {
    let needle = query.search_text.to_lowercase();

    let mut rows: Vec<(i64, &Plant)> = plants
        .iter()
        .filter(|p| matches_text(p, &needle))
        .map(|p| (status_for(p, today), p))
        .filter(|(status, _)| query.status_filter.matches(status.classification))
        .map(|(status, p)| (status.days_until_due, p))
        .collect();

    match query.sort_key {
        SortKey::Name => rows.sort_by(|(_, a), (_, b)| collate(&a.name, &b.name)),
        SortKey::Location => rows.sort_by(|(_, a), (_, b)| {
            collate(
                a.location.as_deref().unwrap_or(""),
                b.location.as_deref().unwrap_or(""),
            )
        }),
        SortKey::Due => rows.sort_by_key(|(days, _)| *days),
    }

    rows.into_iter().map(|(_, p)| p.clone()).collect()
}
