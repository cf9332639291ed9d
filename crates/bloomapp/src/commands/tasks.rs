use chrono::NaiveDate;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Plant;
use crate::tasks::upcoming;

pub const EMPTY_TASKS_MESSAGE: &str = "No upcoming tasks.";

pub fn run(plants: &[Plant], today: NaiveDate, limit: usize) -> Result<CmdResult> {
    let tasks = upcoming(plants, today, limit);
    let mut result = CmdResult::default();
    if tasks.is_empty() {
        result.add_message(CmdMessage::info(EMPTY_TASKS_MESSAGE));
    }
    Ok(result.with_tasks(tasks))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn respects_limit() {
        let plants: Vec<Plant> = (0..10)
            .map(|i| Plant::new(format!("P{}", i), today(), Some(i + 1)))
            .collect();
        let result = run(&plants, today(), 4).unwrap();
        assert_eq!(result.tasks.len(), 4);
        assert_eq!(result.tasks[0].name, "P0");
    }

    #[test]
    fn empty_collection_message() {
        let result = run(&[], today(), 6).unwrap();
        assert!(result.tasks.is_empty());
        assert_eq!(result.messages[0].content, EMPTY_TASKS_MESSAGE);
    }
}
