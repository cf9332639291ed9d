use chrono::NaiveDate;

use crate::commands::CmdResult;
use crate::error::{BloomError, Result};
use crate::index::index_plants;
use crate::model::{Plant, PlantId};

pub fn run(plants: &[Plant], ids: &[PlantId], today: NaiveDate) -> Result<CmdResult> {
    let indexed = index_plants(plants, today);
    let mut listed = Vec::with_capacity(ids.len());

    for id in ids {
        let view = indexed
            .iter()
            .find(|v| v.plant.id == *id)
            .ok_or_else(|| BloomError::PlantNotFound(format!("id {}", id.short())))?;
        listed.push(view.clone());
    }

    Ok(CmdResult::default().with_listed(listed))
}
