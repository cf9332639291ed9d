//! # Bloom Architecture
//!
//! Bloom tracks when plants need water. It is a **UI-agnostic library** with a
//! thin CLI client (`bloom`); nothing in this crate touches a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (bloom crate)                                          │
//! │  - Parses arguments and session lines, renders output       │
//! │  - The only place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Owns the snapshot, the clock and the editing cursor      │
//! │  - Normalizes selectors (indexes, ids, names → PlantId)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Take a snapshot and today, return a CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (store, status, tasks, query)                         │
//! │  - Pure functions over &[Plant] and an explicit date        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Today Is an Argument
//!
//! Every status, task and query function takes `today: NaiveDate`. Only the
//! API reads a [`dates::Clock`], once per operation, so all derived values in
//! one response agree on the date.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`store`]: Snapshot operations (upsert, remove, mark watered)
//! - [`status`]: Due date and classification engine
//! - [`tasks`]: Upcoming watering tasks
//! - [`query`]: Search, status filter and sort
//! - [`index`]: Display indexes and plant selectors
//! - [`draft`]: Form-style plant drafts and input parsing
//! - [`dates`]: Calendar arithmetic and the clock seam
//! - [`demo`]: Demonstration collection
//! - [`config`]: Configuration loading
//! - [`model`]: Data types
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod dates;
pub mod demo;
pub mod draft;
pub mod error;
pub mod index;
pub mod model;
pub mod query;
pub mod status;
pub mod store;
pub mod tasks;

pub use api::BloomApi;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
pub use config::BloomConfig;
pub use dates::{Clock, FixedClock, SystemClock};
pub use draft::PlantDraft;
pub use error::{BloomError, Result};
pub use model::{Classification, DerivedStatus, Plant, PlantId, PlantView, Task};
pub use query::{PlantQuery, SortKey, StatusFilter};
