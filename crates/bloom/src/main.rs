//! # Bloom CLI
//!
//! The binary is thin: the CLI lives in `src/cli/`, this file only invokes
//! `cli::run()` and turns an error into an exit code.
//!
//! ## Workspace Structure
//!
//! - `crates/bloomapp/`: UI-agnostic library (plants, status engine, queries, API facade)
//! - `crates/bloom/`: this terminal client
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/bloom/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - One-shot and session dispatch (commands.rs)              │
//! │  - Terminal and JSON rendering (render.rs)                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/bloomapp/src/api.rs)                     │
//! │  - Resolves indexes, ids and names → PlantId                │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing below the CLI writes to a terminal, so the CLI owns every
//! user-facing concern: parsing, logging setup, rendering and exit codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
