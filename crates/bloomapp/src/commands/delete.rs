use chrono::NaiveDate;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_plants;
use crate::model::{Plant, PlantId};
use crate::store;

pub fn run(plants: &[Plant], ids: &[PlantId], today: NaiveDate) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    // Report removed plants with the numbers the operator just saw.
    let before = index_plants(plants, today);
    let mut current = plants.to_vec();
    let mut changed = false;

    for id in ids {
        match before.iter().find(|v| v.plant.id == *id) {
            Some(view) if store::find(&current, *id).is_some() => {
                current = store::remove(&current, *id);
                changed = true;
                result.add_message(CmdMessage::success(format!(
                    "Plant deleted ({}): {}",
                    view.index, view.plant.name
                )));
                result.affected.push(view.clone());
            }
            _ => {
                result.add_message(CmdMessage::info(format!(
                    "No plant with id {}; nothing to delete",
                    id.short()
                )));
            }
        }
    }

    if changed {
        result.snapshot = Some(current);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn garden() -> Vec<Plant> {
        vec![
            Plant::new("A", today(), Some(3)),
            Plant::new("B", today(), Some(3)),
            Plant::new("C", today(), Some(3)),
        ]
    }

    #[test]
    fn removes_selected_plants() {
        let plants = garden();
        let result = run(&plants, &[plants[0].id, plants[2].id], today()).unwrap();
        let next = result.snapshot.unwrap();
        assert_eq!(next, vec![plants[1].clone()]);
        assert_eq!(result.affected.len(), 2);
        assert_eq!(result.affected[0].index, 1);
        assert_eq!(result.affected[1].index, 3);
    }

    #[test]
    fn unknown_id_is_a_noop() {
        let plants = garden();
        let result = run(&plants, &[PlantId::new()], today()).unwrap();
        assert!(!result.changed());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn deleting_twice_is_idempotent() {
        let plants = garden();
        let id = plants[1].id;
        let once = run(&plants, &[id], today()).unwrap().snapshot.unwrap();
        let twice = run(&once, &[id], today()).unwrap();
        assert!(!twice.changed());
        assert_eq!(once.len(), 2);
    }

    #[test]
    fn repeated_id_in_one_call_deletes_once() {
        let plants = garden();
        let id = plants[0].id;
        let result = run(&plants, &[id, id], today()).unwrap();
        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.snapshot.unwrap().len(), 2);
    }
}
