use chrono::NaiveDate;

use crate::commands::{CmdMessage, CmdResult};
use crate::draft::PlantDraft;
use crate::error::Result;
use crate::index::index_plants;
use crate::model::{Plant, PlantId};
use crate::store;

/// Replaces the plant `id` with the draft's contents.
///
/// An id that is no longer in the collection is added back rather than
/// dropped, so an edit racing a delete does not lose the operator's input.
pub fn run(
    plants: &[Plant],
    id: PlantId,
    draft: PlantDraft,
    today: NaiveDate,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(plant) = draft.into_plant(id) else {
        result.add_message(CmdMessage::warning(
            "Plant name cannot be empty; changes not saved",
        ));
        return Ok(result);
    };

    let existed = store::find(plants, id).is_some();
    let next = store::upsert(plants, plant.clone());
    let affected: Vec<_> = index_plants(&next, today)
        .into_iter()
        .filter(|v| v.plant.id == id)
        .collect();

    let verb = if existed { "updated" } else { "added" };
    result.add_message(CmdMessage::success(format!(
        "Plant {}: {}",
        verb, plant.name
    )));
    Ok(result.with_affected(affected).with_snapshot(next))
}
