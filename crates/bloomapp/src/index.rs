//! # Display Indexes and Selectors
//!
//! Plant ids are UUIDs: stable, but nobody wants to type one. Every client
//! therefore shows plants with a short **display index**, the 1-based position
//! of the plant in the *default listing* (no search, all statuses, sorted by
//! due date). The index is canonical: a filtered or re-sorted listing still
//! shows each plant with its default-listing number, so `water 2` means the
//! same plant whatever view the operator is looking at.
//!
//! Indexes are recomputed from the current snapshot and today's date on every
//! call; they are not stored and shift when plants are added, removed or
//! watered.
//!
//! ## Selector Grammar
//!
//! Operator input naming plants is parsed by [`parse_selectors`]:
//!
//! - **Indexes**: every input is a positive integer (`1`, `3`) → [`PlantSelector::Index`]
//! - **Ids**: every input is a UUID → [`PlantSelector::Id`]
//! - **Name search**: anything else; all inputs are joined with spaces into one
//!   case-insensitive name term → [`PlantSelector::Name`]
//!
//! The search fallback lets `water red spider lily` work without quotes.

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::error::{BloomError, Result};
use crate::model::{Plant, PlantId, PlantView};
use crate::query::{query, PlantQuery};
use crate::status::status_for;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlantSelector {
    Index(usize),
    Id(PlantId),
    Name(String),
}

/// Numbers every plant by its position in the default listing.
pub fn index_plants(plants: &[Plant], today: NaiveDate) -> Vec<PlantView> {
    query(plants, &PlantQuery::default(), today)
        .into_iter()
        .enumerate()
        .map(|(i, plant)| PlantView {
            index: i + 1,
            status: status_for(&plant, today),
            plant,
        })
        .collect()
}

pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<PlantSelector>> {
    let inputs: Vec<&str> = inputs
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .collect();
    if inputs.is_empty() {
        return Err(BloomError::InvalidArgument("no plant given".to_string()));
    }

    let indexes: std::result::Result<Vec<usize>, _> =
        inputs.iter().map(|s| s.parse::<usize>()).collect();
    if let Ok(indexes) = indexes {
        if indexes.contains(&0) {
            return Err(BloomError::InvalidArgument(
                "indexes start at 1".to_string(),
            ));
        }
        return Ok(dedup(indexes.into_iter().map(PlantSelector::Index)));
    }

    let ids: Result<Vec<PlantId>> = inputs.iter().map(|s| s.parse::<PlantId>()).collect();
    if let Ok(ids) = ids {
        return Ok(dedup(ids.into_iter().map(PlantSelector::Id)));
    }

    Ok(vec![PlantSelector::Name(inputs.join(" "))])
}

fn dedup(selectors: impl Iterator<Item = PlantSelector>) -> Vec<PlantSelector> {
    let mut seen = HashSet::new();
    selectors.filter(|s| seen.insert(s.clone())).collect()
}

/// Turns selectors into plant ids against the current snapshot.
///
/// Id selectors pass through unchecked so that operations on a plant that was
/// removed in the meantime stay no-ops. Index and name selectors must match.
pub fn resolve_selectors(
    plants: &[Plant],
    selectors: &[PlantSelector],
    today: NaiveDate,
) -> Result<Vec<PlantId>> {
    let indexed = index_plants(plants, today);
    let mut ids = Vec::new();

    for selector in selectors {
        let id = match selector {
            PlantSelector::Index(n) => indexed
                .get(n.saturating_sub(1))
                .map(|view| view.plant.id)
                .ok_or_else(|| BloomError::PlantNotFound(format!("index {}", n)))?,
            PlantSelector::Id(id) => *id,
            PlantSelector::Name(term) => resolve_name(&indexed, term)?,
        };
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    Ok(ids)
}

fn resolve_name(indexed: &[PlantView], term: &str) -> Result<PlantId> {
    let term_lower = term.to_lowercase();

    if let Some(exact) = indexed
        .iter()
        .find(|v| v.plant.name.to_lowercase() == term_lower)
    {
        return Ok(exact.plant.id);
    }

    let matches: Vec<&PlantView> = indexed
        .iter()
        .filter(|v| v.plant.name.to_lowercase().contains(&term_lower))
        .collect();

    match matches.as_slice() {
        [] => Err(BloomError::PlantNotFound(format!("'{}'", term))),
        [only] => Ok(only.plant.id),
        many => {
            let names: Vec<String> = many
                .iter()
                .map(|v| format!("{}. {}", v.index, v.plant.name))
                .collect();
            Err(BloomError::Ambiguous(format!(
                "'{}' matches {}",
                term,
                names.join(", ")
            )))
        }
    }
}
