//! # CLI Behavior
//!
//! This is **one possible UI client** for bloomapp. It is the only place that
//! knows about terminal I/O, exit codes and output formatting.
//!
//! ## One-shot and Session Modes
//!
//! There is no storage: the collection lives as long as the process.
//!
//! - `bloom --demo tasks` runs one command against the starting collection and
//!   exits. An error exits with status 1.
//! - `bloom --demo` with no command reads commands from stdin, one per line,
//!   until `quit` or end of input. An error is printed and the session goes on.
//!
//! ```text
//! $ bloom --demo
//! bloom> water herb
//! Watered: Herb Planter (next due 2024-06-12)
//! bloom> add "Maidenhair Fern" --location "Client B - Lobby" --interval 2
//! Plant added: Maidenhair Fern
//! bloom> quit
//! ```
//!
//! ## Naming Plants
//!
//! Commands that act on plants take the numbers shown by `list`, a full id,
//! or a piece of the name (`water red spider` works without quotes).
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch, session loop, logging setup
//! - `render`: Text and JSON output
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
