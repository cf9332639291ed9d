//! # Rendering
//!
//! Turns `CmdResult` pieces into terminal text. Every `render_*` function
//! returns a `String` so output can be tested without a terminal; the
//! `print_*` wrappers write it to stdout.
//!
//! ## List Layout
//!
//! ```text
//!  1. Herb Planter              Overdue   Overdue by 4 days    Client C - Patio
//!  └┬┘ └────── COL_NAME ──────┘ └COL_STATUS┘ └─ COL_DUE ──┘     └ location (rest)
//!  index
//! ```
//!
//! Widths are measured in terminal columns with `unicode-width`, so names with
//! wide characters still line up.
//!
//! With `--json` the whole `CmdResult` is serialized instead.

use bloomapp::commands::{CmdMessage, CmdResult, MessageLevel};
use bloomapp::model::{Classification, PlantView, Task};
use bloomapp::status::effective_interval;
use colored::{ColoredString, Colorize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const COL_NAME: usize = 26;
pub const COL_STATUS: usize = 10;
pub const COL_DUE: usize = 20;
pub const UNASSIGNED_LOCATION: &str = "Unassigned location";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn print_json(result: &CmdResult) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn print_plant_list(views: &[PlantView]) {
    print!("{}", render_plant_list(views));
}

pub fn render_plant_list(views: &[PlantView]) -> String {
    let mut out = String::new();
    for view in views {
        let name = pad_to_width(&truncate_to_width(&view.plant.name, COL_NAME), COL_NAME);
        let label = pad_to_width(view.status.classification.label(), COL_STATUS);
        let due = pad_to_width(&due_phrase(view.status.days_until_due), COL_DUE);
        let location = view.plant.location.as_deref().unwrap_or(UNASSIGNED_LOCATION);
        out.push_str(&format!(
            "{:>3}. {} {} {} {}\n",
            view.index,
            name,
            paint(view.status.classification, &label),
            due,
            location.dimmed()
        ));
    }
    out
}

pub fn print_tasks(tasks: &[Task]) {
    print!("{}", render_tasks(tasks));
}

pub fn render_tasks(tasks: &[Task]) -> String {
    let mut out = String::new();
    for task in tasks {
        let name = pad_to_width(&truncate_to_width(&task.name, COL_NAME), COL_NAME);
        let due = pad_to_width(&due_phrase(task.days_until_due()), COL_DUE);
        let location = task.location.as_deref().unwrap_or(UNASSIGNED_LOCATION);
        out.push_str(&format!(
            "{}  {} {} {}\n",
            task.due_date(),
            name,
            paint(task.classification(), &due),
            location.dimmed()
        ));
    }
    out
}

pub fn print_plant_details(views: &[PlantView]) {
    print!("{}", render_plant_details(views));
}

pub fn render_plant_details(views: &[PlantView]) -> String {
    let mut out = String::new();
    for (i, view) in views.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let plant = &view.plant;
        let status = &view.status;
        out.push_str(&format!(
            "{} {}\n",
            format!("{}.", view.index).yellow(),
            plant.name.bold()
        ));
        out.push_str(&field("Id", &plant.id.to_string()));
        if let Some(species) = &plant.species {
            out.push_str(&field("Species", species));
        }
        out.push_str(&field(
            "Location",
            plant.location.as_deref().unwrap_or(UNASSIGNED_LOCATION),
        ));
        out.push_str(&field("Last watered", &plant.last_watered.to_string()));
        out.push_str(&field("Interval", &interval_phrase(plant.watering_interval_days)));
        out.push_str(&field(
            "Next due",
            &format!("{} ({})", status.due_date, due_phrase(status.days_until_due)),
        ));
        out.push_str(&format!(
            "  {:<14}{}\n",
            "Status",
            paint(status.classification, status.classification.label())
        ));
        if let Some(notes) = &plant.notes {
            out.push_str(&field("Notes", notes));
        }
    }
    out
}

fn field(label: &str, value: &str) -> String {
    format!("  {:<14}{}\n", label, value)
}

fn paint(classification: Classification, text: &str) -> ColoredString {
    match classification {
        Classification::Overdue => text.red().bold(),
        Classification::DueSoon => text.yellow(),
        Classification::Healthy => text.green(),
    }
}

/// "Overdue by 2 days", "Due today", "Due tomorrow", "Due in 5 days".
pub fn due_phrase(days_until_due: i64) -> String {
    match days_until_due {
        d if d < 0 => format!("Overdue by {}", days(-d)),
        0 => "Due today".to_string(),
        1 => "Due tomorrow".to_string(),
        d => format!("Due in {}", days(d)),
    }
}

fn interval_phrase(interval: Option<u32>) -> String {
    match interval {
        Some(n) if n > 0 => format!("every {}", days(i64::from(n))),
        _ => format!("every {} (default)", days(i64::from(effective_interval(interval)))),
    }
}

fn days(n: i64) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", n)
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloomapp::model::{DerivedStatus, Plant};
    use bloomapp::status::status_for;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn view(plant: Plant, index: usize) -> PlantView {
        let status: DerivedStatus = status_for(&plant, today());
        PlantView {
            index,
            plant,
            status,
        }
    }

    #[test]
    fn due_phrases() {
        assert_eq!(due_phrase(-1), "Overdue by 1 day");
        assert_eq!(due_phrase(-4), "Overdue by 4 days");
        assert_eq!(due_phrase(0), "Due today");
        assert_eq!(due_phrase(1), "Due tomorrow");
        assert_eq!(due_phrase(5), "Due in 5 days");
    }

    #[test]
    fn interval_phrases() {
        assert_eq!(interval_phrase(Some(1)), "every 1 day");
        assert_eq!(interval_phrase(Some(7)), "every 7 days");
        assert_eq!(interval_phrase(None), "every 3 days (default)");
        assert_eq!(interval_phrase(Some(0)), "every 3 days (default)");
    }

    #[test]
    fn truncates_long_names() {
        let truncated = truncate_to_width("Mixed Herb Planter With Basil", 10);
        assert_eq!(truncated, "Mixed Her…");
        assert_eq!(truncated.width(), 10);
        assert_eq!(truncate_to_width("Fern", 10), "Fern");
    }

    #[test]
    fn truncates_wide_characters_by_columns() {
        let truncated = truncate_to_width("紫陽花の鉢植え", 6);
        assert!(truncated.width() <= 6);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn list_rows_show_index_status_and_location() {
        colored::control::set_override(false);
        let plant = Plant::new("Aster", NaiveDate::from_ymd_opt(2024, 6, 6).unwrap(), Some(3))
            .with_location("Back Yard");
        let out = render_plant_list(&[view(plant, 1)]);
        assert!(out.starts_with("  1. Aster"));
        assert!(out.contains("Overdue by 1 day"));
        assert!(out.contains("Back Yard"));
    }

    #[test]
    fn tasks_without_location_say_unassigned() {
        colored::control::set_override(false);
        let plant = Plant::new("Calathea", today(), Some(5));
        let task = Task {
            status: status_for(&plant, today()),
            name: plant.name.clone(),
            location: None,
        };
        let out = render_tasks(&[task]);
        assert!(out.starts_with("2024-06-15  Calathea"));
        assert!(out.contains("Due in 5 days"));
        assert!(out.contains(UNASSIGNED_LOCATION));
    }

    #[test]
    fn details_include_notes_and_default_interval() {
        colored::control::set_override(false);
        let plant = Plant::new("Fern", today(), None).with_notes("Mist daily");
        let out = render_plant_details(&[view(plant, 2)]);
        assert!(out.starts_with("2. Fern"));
        assert!(out.contains("every 3 days (default)"));
        assert!(out.contains("2024-06-13 (Due in 3 days)"));
        assert!(out.contains("Mist daily"));
    }

    #[test]
    fn messages_one_per_line() {
        colored::control::set_override(false);
        let out = render_messages(&[
            CmdMessage::success("Plant added: Fern"),
            CmdMessage::info("No upcoming tasks."),
        ]);
        assert_eq!(out, "Plant added: Fern\nNo upcoming tasks.\n");
    }
}
