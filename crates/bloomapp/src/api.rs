//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every client (the `bloom` CLI, tests, anything else).
//!
//! ## Role and Responsibilities
//!
//! [`BloomApi`]:
//! - **Owns the session state**: the current plant snapshot and the editing cursor
//! - **Captures today** once per operation from its [`Clock`]
//! - **Normalizes inputs**: selector strings → plant ids (see [`crate::index`])
//! - **Dispatches** to `commands/*` and swaps in the snapshot they return
//!
//! It does no business logic, no I/O and no formatting.
//!
//! ## Snapshot Swapping
//!
//! Commands never mutate the collection. When a command returns a new
//! snapshot the facade replaces its own wholesale:
//!
//! ```text
//! self.plants ──&[Plant]──▶ commands::water::run ──CmdResult { snapshot: Some(next) }──▶ self.plants = next
//! ```
//!
//! ## Editing Cursor
//!
//! The facade remembers at most one plant being edited. [`BloomApi::begin_edit`]
//! sets it and returns a pre-filled draft; [`BloomApi::submit`] saves the draft
//! over that plant (or adds a new plant when no edit is open) and clears the
//! cursor on success; [`BloomApi::cancel_edit`] clears it. Deleting the plant
//! under edit also clears it, since the store knows nothing about the cursor.
//!
//! ## Generic Over Clock
//!
//! `BloomApi<C: Clock>` is generic over its date source:
//! - Production: `BloomApi<SystemClock>`
//! - Testing and `--today`: `BloomApi<FixedClock>`

use chrono::NaiveDate;
use log::{debug, info};

use crate::commands::{self, CmdResult};
use crate::config::BloomConfig;
use crate::dates::Clock;
use crate::draft::PlantDraft;
use crate::error::{BloomError, Result};
use crate::index::{parse_selectors, resolve_selectors};
use crate::model::{Plant, PlantId};
use crate::query::PlantQuery;
use crate::status::DEFAULT_INTERVAL_DAYS;
use crate::store;
use crate::tasks::TASK_PANEL_LIMIT;

pub struct BloomApi<C: Clock> {
    plants: Vec<Plant>,
    editing: Option<PlantId>,
    clock: C,
    task_limit: usize,
    default_interval: u32,
}

impl<C: Clock> BloomApi<C> {
    pub fn new(clock: C) -> Self {
        Self {
            plants: Vec::new(),
            editing: None,
            clock,
            task_limit: TASK_PANEL_LIMIT,
            default_interval: DEFAULT_INTERVAL_DAYS,
        }
    }

    pub fn from_config(clock: C, config: &BloomConfig) -> Self {
        Self::new(clock)
            .with_task_limit(config.task_limit)
            .with_default_interval(config.default_interval_days)
    }

    pub fn with_plants(mut self, plants: Vec<Plant>) -> Self {
        self.plants = plants;
        self
    }

    pub fn with_task_limit(mut self, limit: usize) -> Self {
        self.task_limit = limit;
        self
    }

    pub fn with_default_interval(mut self, days: u32) -> Self {
        self.default_interval = days;
        self
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn task_limit(&self) -> usize {
        self.task_limit
    }

    /// A blank draft for today with the configured default interval.
    pub fn new_draft(&self) -> PlantDraft {
        PlantDraft::new(self.today(), self.default_interval)
    }

    pub fn add_plant(&mut self, draft: PlantDraft) -> Result<CmdResult> {
        let today = self.today();
        let result = commands::add::run(&self.plants, draft, today)?;
        Ok(self.apply("add", result))
    }

    pub fn update_plant(&mut self, id: PlantId, draft: PlantDraft) -> Result<CmdResult> {
        let today = self.today();
        let result = commands::update::run(&self.plants, id, draft, today)?;
        Ok(self.apply("update", result))
    }

    pub fn list_plants(&self, query: &PlantQuery) -> Result<CmdResult> {
        debug!(
            "event=list search={:?} status={} sort={}",
            query.search_text, query.status_filter, query.sort_key
        );
        commands::list::run(&self.plants, query, self.today())
    }

    pub fn upcoming_tasks(&self) -> Result<CmdResult> {
        commands::tasks::run(&self.plants, self.today(), self.task_limit)
    }

    pub fn view_plants<I: AsRef<str>>(&self, inputs: &[I]) -> Result<CmdResult> {
        let today = self.today();
        let ids = self.resolve(inputs, today)?;
        commands::view::run(&self.plants, &ids, today)
    }

    pub fn water_plants<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<CmdResult> {
        let today = self.today();
        let ids = self.resolve(inputs, today)?;
        self.water_ids(&ids, today)
    }

    pub fn water_plant(&mut self, id: PlantId) -> Result<CmdResult> {
        let today = self.today();
        self.water_ids(&[id], today)
    }

    fn water_ids(&mut self, ids: &[PlantId], today: NaiveDate) -> Result<CmdResult> {
        let result = commands::water::run(&self.plants, ids, today)?;
        Ok(self.apply("water", result))
    }

    pub fn delete_plants<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<CmdResult> {
        let today = self.today();
        let ids = self.resolve(inputs, today)?;
        self.delete_ids(&ids, today)
    }

    pub fn delete_plant(&mut self, id: PlantId) -> Result<CmdResult> {
        let today = self.today();
        self.delete_ids(&[id], today)
    }

    fn delete_ids(&mut self, ids: &[PlantId], today: NaiveDate) -> Result<CmdResult> {
        let result = commands::delete::run(&self.plants, ids, today)?;
        let result = self.apply("delete", result);
        if let Some(editing) = self.editing {
            if store::find(&self.plants, editing).is_none() {
                debug!("event=edit_cleared reason=deleted id={}", editing);
                self.editing = None;
            }
        }
        Ok(result)
    }

    /// Opens an edit on exactly one plant and returns its pre-filled draft.
    pub fn begin_edit<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<PlantDraft> {
        let today = self.today();
        let ids = self.resolve(inputs, today)?;
        let [id] = ids.as_slice() else {
            return Err(BloomError::InvalidArgument(
                "edit takes exactly one plant".to_string(),
            ));
        };
        let plant = store::find(&self.plants, *id)
            .ok_or_else(|| BloomError::PlantNotFound(format!("id {}", id.short())))?;
        self.editing = Some(*id);
        debug!("event=edit_begin id={}", id);
        Ok(PlantDraft::from_plant(plant))
    }

    pub fn editing(&self) -> Option<PlantId> {
        self.editing
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Saves `draft` over the plant under edit, or adds it as a new plant when
    /// no edit is open.
    pub fn submit(&mut self, draft: PlantDraft) -> Result<CmdResult> {
        let result = match self.editing {
            Some(id) => self.update_plant(id, draft)?,
            None => self.add_plant(draft)?,
        };
        if result.changed() {
            self.editing = None;
        }
        Ok(result)
    }

    fn resolve<I: AsRef<str>>(&self, inputs: &[I], today: NaiveDate) -> Result<Vec<PlantId>> {
        let selectors = parse_selectors(inputs)?;
        resolve_selectors(&self.plants, &selectors, today)
    }

    fn apply(&mut self, action: &str, mut result: CmdResult) -> CmdResult {
        if let Some(next) = result.snapshot.take() {
            info!(
                "event=snapshot action={} before={} after={}",
                action,
                self.plants.len(),
                next.len()
            );
            self.plants = next.clone();
            result.snapshot = Some(next);
        } else {
            debug!("event=noop action={}", action);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::FixedClock;
    use crate::model::Classification;
    use crate::query::StatusFilter;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn api() -> BloomApi<FixedClock> {
        BloomApi::new(FixedClock(date(2024, 6, 10))).with_plants(vec![
            Plant::new("Herb Planter", date(2024, 6, 10), Some(5)),
            Plant::new("Boxwood Hedge", date(2024, 6, 9), Some(2)),
            Plant::new("Red Spider Lily", date(2024, 6, 6), Some(3)),
        ])
    }

    #[test]
    fn add_plant_swaps_snapshot() {
        let mut api = api();
        let draft = api.new_draft().name("Fern");
        let result = api.add_plant(draft).unwrap();
        assert!(result.changed());
        assert_eq!(api.plants().len(), 4);
        assert_eq!(api.plants()[0].name, "Fern");
        assert_eq!(api.plants()[0].last_watered, date(2024, 6, 10));
    }

    #[test]
    fn new_draft_uses_configured_interval() {
        let config = BloomConfig {
            default_interval_days: 9,
            ..Default::default()
        };
        let api = BloomApi::from_config(FixedClock(date(2024, 6, 10)), &config);
        assert_eq!(api.new_draft().watering_interval_days, 9);
    }

    #[test]
    fn list_dispatches_query() {
        let api = api();
        let result = api
            .list_plants(&PlantQuery::default().status(StatusFilter::Overdue))
            .unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].plant.name, "Red Spider Lily");
    }

    #[test]
    fn water_by_index_then_status_is_healthy() {
        let mut api = api();
        // #1 in the default listing is the overdue lily
        api.water_plants(&["1"]).unwrap();
        let lily = api
            .plants()
            .iter()
            .find(|p| p.name == "Red Spider Lily")
            .unwrap();
        assert_eq!(lily.last_watered, date(2024, 6, 10));

        let view = api.view_plants(&["red", "spider"]).unwrap();
        assert_eq!(view.listed[0].status.classification, Classification::Healthy);
    }

    #[test]
    fn water_missing_id_is_noop() {
        let mut api = api();
        let before = api.plants().to_vec();
        let result = api.water_plant(PlantId::new()).unwrap();
        assert!(!result.changed());
        assert_eq!(api.plants(), before.as_slice());
    }

    #[test]
    fn upcoming_tasks_respects_limit() {
        let api = api().with_task_limit(2);
        let result = api.upcoming_tasks().unwrap();
        let names: Vec<&str> = result.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Red Spider Lily", "Boxwood Hedge"]);
    }

    #[test]
    fn edit_round_trip_clears_cursor() {
        let mut api = api();
        let draft = api.begin_edit(&["boxwood"]).unwrap();
        let id = api.editing().unwrap();
        assert_eq!(draft.name, "Boxwood Hedge");

        let result = api.submit(draft.location("Client B - Perimeter")).unwrap();
        assert!(result.changed());
        assert_eq!(api.editing(), None);
        assert_eq!(api.plants().len(), 3);
        let edited = store::find(api.plants(), id).unwrap();
        assert_eq!(edited.location.as_deref(), Some("Client B - Perimeter"));
    }

    #[test]
    fn submit_blank_name_keeps_cursor() {
        let mut api = api();
        let draft = api.begin_edit(&["boxwood"]).unwrap();
        let result = api.submit(draft.name(" ")).unwrap();
        assert!(!result.changed());
        assert!(api.editing().is_some());
    }

    #[test]
    fn submit_without_edit_adds() {
        let mut api = api();
        let draft = api.new_draft().name("Monstera");
        api.submit(draft).unwrap();
        assert_eq!(api.plants().len(), 4);
    }

    #[test]
    fn cancel_edit_clears_cursor() {
        let mut api = api();
        api.begin_edit(&["herb"]).unwrap();
        api.cancel_edit();
        assert_eq!(api.editing(), None);
    }

    #[test]
    fn deleting_edited_plant_clears_cursor() {
        let mut api = api();
        api.begin_edit(&["herb"]).unwrap();
        let id = api.editing().unwrap();
        api.delete_plant(id).unwrap();
        assert_eq!(api.editing(), None);
        assert_eq!(api.plants().len(), 2);
    }

    #[test]
    fn deleting_other_plant_keeps_cursor() {
        let mut api = api();
        api.begin_edit(&["herb"]).unwrap();
        api.delete_plants(&["boxwood"]).unwrap();
        assert!(api.editing().is_some());
    }

    #[test]
    fn begin_edit_requires_single_plant() {
        let mut api = api();
        assert!(matches!(
            api.begin_edit(&["1", "2"]),
            Err(BloomError::InvalidArgument(_))
        ));
        assert_eq!(api.editing(), None);
    }

    #[test]
    fn begin_edit_unknown_id_fails() {
        let mut api = api();
        let ghost = PlantId::new().to_string();
        assert!(matches!(
            api.begin_edit(&[ghost]),
            Err(BloomError::PlantNotFound(_))
        ));
    }
}
