use chrono::NaiveDate;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_plants;
use crate::model::{Plant, PlantId};
use crate::store;

pub fn run(plants: &[Plant], ids: &[PlantId], today: NaiveDate) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut current = plants.to_vec();
    let mut watered = Vec::new();

    for id in ids {
        if store::find(&current, *id).is_none() {
            result.add_message(CmdMessage::info(format!(
                "No plant with id {}; nothing to water",
                id.short()
            )));
            continue;
        }
        current = store::mark_watered(&current, *id, today);
        watered.push(*id);
    }

    if watered.is_empty() {
        return Ok(result);
    }

    for view in index_plants(&current, today) {
        if watered.contains(&view.plant.id) {
            result.add_message(CmdMessage::success(format!(
                "Watered: {} (next due {})",
                view.plant.name, view.status.due_date
            )));
            result.affected.push(view);
        }
    }

    Ok(result.with_snapshot(current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Classification;
    use crate::status::{effective_interval, status_for};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn resets_offset_to_interval() {
        let today = date(2024, 6, 10);
        let plants = vec![
            Plant::new("Thirsty", date(2024, 5, 20), Some(4)),
            Plant::new("Defaulted", date(2024, 5, 20), Some(0)),
        ];
        let ids: Vec<PlantId> = plants.iter().map(|p| p.id).collect();
        let next = run(&plants, &ids, today).unwrap().snapshot.unwrap();

        for plant in &next {
            let status = status_for(plant, today);
            assert_eq!(plant.last_watered, today);
            assert_eq!(
                status.days_until_due,
                i64::from(effective_interval(plant.watering_interval_days))
            );
            assert_eq!(status.classification, Classification::Healthy);
        }
    }

    #[test]
    fn one_day_interval_is_due_soon_after_watering() {
        let today = date(2024, 6, 10);
        let plants = vec![Plant::new("Daily", date(2024, 6, 1), Some(1))];
        let result = run(&plants, &[plants[0].id], today).unwrap();
        assert_eq!(result.affected[0].status.days_until_due, 1);
        assert_eq!(
            result.affected[0].status.classification,
            Classification::DueSoon
        );
    }

    #[test]
    fn unknown_id_is_a_noop() {
        let plants = vec![Plant::new("Fern", date(2024, 6, 1), Some(3))];
        let result = run(&plants, &[PlantId::new()], date(2024, 6, 10)).unwrap();
        assert!(!result.changed());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn other_plants_untouched() {
        let plants = vec![
            Plant::new("Fern", date(2024, 6, 1), Some(3)),
            Plant::new("Aloe", date(2024, 6, 2), Some(9)),
        ];
        let next = run(&plants, &[plants[0].id], date(2024, 6, 10))
            .unwrap()
            .snapshot
            .unwrap();
        assert_eq!(next[1], plants[1]);
        assert_eq!(plants[0].last_watered, date(2024, 6, 1));
    }
}
