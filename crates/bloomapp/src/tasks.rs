//! Upcoming-watering view: every plant becomes a [`Task`], sorted by due date.
//!
//! The task list does not care about any list search or filter state. Display
//! surfaces show only a bounded prefix, but the derivation and sort always run
//! over the whole collection first so the prefix really is the most urgent.

use chrono::NaiveDate;

use crate::model::{Plant, Task};
use crate::status::status_for;

/// How many tasks the upcoming panel shows by default.
pub const TASK_PANEL_LIMIT: usize = 6;

pub fn derive_tasks(plants: &[Plant], today: NaiveDate) -> Vec<Task> {
    let mut tasks: Vec<Task> = plants
        .iter()
        .map(|plant| Task {
            status: status_for(plant, today),
            name: plant.name.clone(),
            location: plant.location.clone(),
        })
        .collect();
    // sort_by_key is stable: equal due dates keep collection order
    tasks.sort_by_key(|t| t.status.due_date);
    tasks
}

pub fn upcoming(plants: &[Plant], today: NaiveDate, limit: usize) -> Vec<Task> {
    let mut tasks = derive_tasks(plants, today);
    tasks.truncate(limit);
    tasks
}
