use chrono::NaiveDate;
use std::collections::HashMap;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_plants;
use crate::model::{Plant, PlantId, PlantView};
use crate::query::{query, PlantQuery};

pub const EMPTY_LIST_MESSAGE: &str = "No plants match your search.";

pub fn run(plants: &[Plant], plant_query: &PlantQuery, today: NaiveDate) -> Result<CmdResult> {
    let canonical: HashMap<PlantId, PlantView> = index_plants(plants, today)
        .into_iter()
        .map(|v| (v.plant.id, v))
        .collect();

    let listed: Vec<PlantView> = query(plants, plant_query, today)
        .iter()
        .filter_map(|p| canonical.get(&p.id).cloned())
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(EMPTY_LIST_MESSAGE));
    }
    Ok(result.with_listed(listed))
}
