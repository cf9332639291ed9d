use chrono::NaiveDate;

use crate::commands::{CmdMessage, CmdResult};
use crate::draft::PlantDraft;
use crate::error::Result;
use crate::index::index_plants;
use crate::model::{Plant, PlantId};
use crate::store;

pub fn run(plants: &[Plant], draft: PlantDraft, today: NaiveDate) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(plant) = draft.into_plant(PlantId::new()) else {
        result.add_message(CmdMessage::warning(
            "Plant name cannot be empty; nothing added",
        ));
        return Ok(result);
    };

    let next = store::upsert(plants, plant.clone());
    let affected: Vec<_> = index_plants(&next, today)
        .into_iter()
        .filter(|v| v.plant.id == plant.id)
        .collect();

    result.add_message(CmdMessage::success(format!("Plant added: {}", plant.name)));
    Ok(result.with_affected(affected).with_snapshot(next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn adds_plant_to_front() {
        let existing = vec![Plant::new("Old", today(), Some(3))];
        let draft = PlantDraft::new(today(), 3).name("New").location("Porch");
        let result = run(&existing, draft, today()).unwrap();

        let snapshot = result.snapshot.unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].name, "New");
        assert_eq!(snapshot[1], existing[0]);
        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.affected[0].plant.name, "New");
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn assigns_fresh_id() {
        let result = run(&[], PlantDraft::new(today(), 3).name("A"), today()).unwrap();
        let first = result.snapshot.unwrap();
        let result = run(&first, PlantDraft::new(today(), 3).name("A"), today()).unwrap();
        let second = result.snapshot.unwrap();
        assert_ne!(second[0].id, second[1].id);
    }

    #[test]
    fn blank_name_is_a_noop() {
        let existing = vec![Plant::new("Old", today(), Some(3))];
        let result = run(&existing, PlantDraft::new(today(), 3).name("  "), today()).unwrap();
        assert!(!result.changed());
        assert!(result.affected.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
