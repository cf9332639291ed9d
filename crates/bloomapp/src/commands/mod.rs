//! # Command Layer
//!
//! One submodule per operator action. Commands are plain functions over the
//! current snapshot: they take `&[Plant]`, today's date and their arguments,
//! and return a [`CmdResult`]. They never hold state, never print and never
//! read the clock.
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries:
//! - `snapshot`: the new collection when the command changed it (the API swaps it in)
//! - `affected`: plants the command touched, as [`PlantView`]s
//! - `listed`: plants to display
//! - `tasks`: the upcoming-watering list
//! - `messages`: leveled messages for the operator
//!
//! The UI decides how to render all of it.
//!
//! ## No-ops Are Not Errors
//!
//! Watering or deleting a plant that is no longer there, or submitting a draft
//! with a blank name, leaves the collection untouched (`snapshot` is `None`)
//! and explains why in `messages`. Errors are reserved for input the command
//! cannot interpret.
//!
//! ## Command Modules
//!
//! - [`add`]: Create a plant from a draft
//! - [`update`]: Replace a plant from a draft
//! - [`delete`]: Remove plants
//! - [`water`]: Mark plants watered today
//! - [`list`]: Search/filter/sort view
//! - [`tasks`]: Upcoming-watering view
//! - [`view`]: Show specific plants

use serde::Serialize;

use crate::model::{Plant, PlantView, Task};

pub mod add;
pub mod delete;
pub mod list;
pub mod tasks;
pub mod update;
pub mod view;
pub mod water;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    #[serde(skip)]
    pub snapshot: Option<Vec<Plant>>,
    pub affected: Vec<PlantView>,
    pub listed: Vec<PlantView>,
    pub tasks: Vec<Task>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_snapshot(mut self, plants: Vec<Plant>) -> Self {
        self.snapshot = Some(plants);
        self
    }

    pub fn with_affected(mut self, views: Vec<PlantView>) -> Self {
        self.affected = views;
        self
    }

    pub fn with_listed(mut self, views: Vec<PlantView>) -> Self {
        self.listed = views;
        self
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn changed(&self) -> bool {
        self.snapshot.is_some()
    }
}
