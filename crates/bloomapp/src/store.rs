//! # Plant Store
//!
//! The collection of plants is a plain `Vec<Plant>` snapshot. Store operations
//! are pure functions: they borrow the current snapshot and return a new one,
//! never touching their input.
//!
//! ```text
//! snapshot₀ ──upsert──▶ snapshot₁ ──mark_watered──▶ snapshot₂ ──remove──▶ snapshot₃
//! ```
//!
//! Whoever holds the snapshot (the [`crate::api::BloomApi`] facade) swaps it
//! wholesale after each write. Readers never see a half-applied change because
//! there is nothing to half-apply.
//!
//! ## Ordering
//!
//! Insertion order is meaningful: new plants are prepended, replacements keep
//! their position. Stable sorts downstream use it to break ties.
//!
//! ## Missing Ids
//!
//! `remove` and `mark_watered` on an id that is not present are no-ops and
//! return a collection equal to the input. The store has no notion of an
//! editing cursor; callers holding one must clear it after `remove`.

use chrono::NaiveDate;

use crate::model::{Plant, PlantId};

/// Replaces the plant with the same id, or prepends it when new.
pub fn upsert(plants: &[Plant], plant: Plant) -> Vec<Plant> {
    if plants.iter().any(|p| p.id == plant.id) {
        plants
            .iter()
            .map(|p| if p.id == plant.id { plant.clone() } else { p.clone() })
            .collect()
    } else {
        let mut next = Vec::with_capacity(plants.len() + 1);
        next.push(plant);
        next.extend(plants.iter().cloned());
        next
    }
}

pub fn remove(plants: &[Plant], id: PlantId) -> Vec<Plant> {
    plants.iter().filter(|p| p.id != id).cloned().collect()
}

pub fn mark_watered(plants: &[Plant], id: PlantId, today: NaiveDate) -> Vec<Plant> {
    plants
        .iter()
        .map(|p| {
            if p.id == id {
                Plant {
                    last_watered: today,
                    ..p.clone()
                }
            } else {
                p.clone()
            }
        })
        .collect()
}

pub fn find(plants: &[Plant], id: PlantId) -> Option<&Plant> {
    plants.iter().find(|p| p.id == id)
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builds a garden snapshot relative to a fixed "today".
    pub struct GardenFixture {
        pub today: NaiveDate,
        pub plants: Vec<Plant>,
    }

    impl GardenFixture {
        pub fn new(today: NaiveDate) -> Self {
            Self {
                today,
                plants: Vec::new(),
            }
        }

        /// Adds a plant watered `days_ago` days before today.
        pub fn with_plant(mut self, name: &str, days_ago: i64, interval: Option<u32>) -> Self {
            let plant = Plant::new(name, crate::dates::add_days(self.today, -days_ago), interval);
            self.plants = upsert(&self.plants, plant);
            self
        }

        pub fn with_located_plant(
            mut self,
            name: &str,
            location: &str,
            days_ago: i64,
            interval: Option<u32>,
        ) -> Self {
            let plant = Plant::new(name, crate::dates::add_days(self.today, -days_ago), interval)
                .with_location(location);
            self.plants = upsert(&self.plants, plant);
            self
        }

        pub fn id_of(&self, name: &str) -> Option<PlantId> {
            self.plants.iter().find(|p| p.name == name).map(|p| p.id)
        }

        pub fn build(self) -> Vec<Plant> {
            self.plants
        }
    }
}
