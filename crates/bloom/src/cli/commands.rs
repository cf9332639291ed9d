//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//! - Sets up logging
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments (or session lines) into typed commands via clap
//! 2. **Context Setup**: config, logging, clock and starting collection
//! 3. **API Dispatch**: call the matching `BloomApi` method
//! 4. **Output Formatting**: `CmdResult` into text or JSON
//! 5. **Error Handling**: one-shot errors end the process; session errors are printed and skipped

use super::render::{
    print_json, print_messages, print_plant_details, print_plant_list, print_tasks, OutputMode,
};
use super::setup::{Cli, Commands, PlantFields, SessionLine};
use anyhow::{bail, Context, Result};
use bloomapp::api::BloomApi;
use bloomapp::commands::CmdResult;
use bloomapp::config::BloomConfig;
use bloomapp::dates::{Clock, FixedClock, SystemClock};
use bloomapp::demo;
use bloomapp::draft::PlantDraft;
use bloomapp::query::PlantQuery;
use clap::Parser;
use flexi_logger::{Logger, LoggerHandle};
use log::{debug, info};
use std::io::{self, BufRead, IsTerminal, Write};

const PROMPT: &str = "bloom> ";

type Api = BloomApi<Box<dyn Clock>>;

struct AppContext {
    api: Api,
    output: OutputMode,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = BloomConfig::load_default()?;
    let _logger = init_logging(&config, cli.verbose)?;

    let mut ctx = init_context(&cli, &config);

    match cli.command {
        Some(command) => execute(&mut ctx, command),
        None => run_session(&mut ctx),
    }
}

fn init_logging(config: &BloomConfig, verbose: bool) -> Result<LoggerHandle> {
    let logger = if verbose {
        Logger::try_with_str("debug")
    } else {
        Logger::try_with_env_or_str(&config.log_level)
    }
    .with_context(|| format!("invalid log level `{}`", config.log_level))?;

    logger
        .log_to_stderr()
        .format_for_stderr(flexi_logger::default_format)
        .start()
        .context("failed to start logger")
}

fn init_context(cli: &Cli, config: &BloomConfig) -> AppContext {
    let clock: Box<dyn Clock> = match cli.today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };
    let mut api = BloomApi::from_config(clock, config);
    if cli.demo {
        let seed = demo::seed(api.today());
        api = api.with_plants(seed);
    }
    info!(
        "event=cli_start today={} demo={} plants={} task_limit={}",
        api.today(),
        cli.demo,
        api.plants().len(),
        api.task_limit()
    );

    AppContext {
        api,
        output: if cli.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        },
    }
}

fn run_session(ctx: &mut AppContext) -> Result<()> {
    let interactive = io::stdin().is_terminal();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!("{}", PROMPT);
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read from stdin")?;

        let tokens = match tokenize(&line) {
            Ok(tokens) => tokens,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };
        let Some(first) = tokens.first() else {
            continue;
        };
        if matches!(first.as_str(), "quit" | "exit") {
            break;
        }

        match SessionLine::try_parse_from(&tokens) {
            Ok(parsed) => {
                if let Err(e) = execute(ctx, parsed.command) {
                    eprintln!("Error: {}", e);
                }
            }
            Err(e) => {
                // clap prints help to stdout and usage errors to stderr
                e.print().ok();
            }
        }
    }

    debug!("event=session_end plants={}", ctx.api.plants().len());
    Ok(())
}

fn execute(ctx: &mut AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Add { name, fields } => handle_add(ctx, name.join(" "), fields),
        Commands::List {
            search,
            status,
            sort,
        } => {
            let query = PlantQuery::default()
                .search(search.unwrap_or_default())
                .status(status)
                .sort(sort);
            let result = ctx.api.list_plants(&query)?;
            render(ctx, &result, |r| print_plant_list(&r.listed))
        }
        Commands::Tasks => {
            let result = ctx.api.upcoming_tasks()?;
            render(ctx, &result, |r| print_tasks(&r.tasks))
        }
        Commands::Water { plants } => {
            let result = ctx.api.water_plants(&plants)?;
            render(ctx, &result, |_| {})
        }
        Commands::Edit {
            plant,
            name,
            fields,
        } => handle_edit(ctx, plant, name, fields),
        Commands::Delete { plants } => {
            let result = ctx.api.delete_plants(&plants)?;
            render(ctx, &result, |_| {})
        }
        Commands::Status { plants } => {
            let result = ctx.api.view_plants(&plants)?;
            render(ctx, &result, |r| print_plant_details(&r.listed))
        }
    }
}

fn handle_add(ctx: &mut AppContext, name: String, fields: PlantFields) -> Result<()> {
    let draft = apply_fields(ctx.api.new_draft().name(name), fields)?;
    let result = ctx.api.add_plant(draft)?;
    render(ctx, &result, |_| {})
}

fn handle_edit(
    ctx: &mut AppContext,
    plant: Vec<String>,
    name: Option<String>,
    fields: PlantFields,
) -> Result<()> {
    let mut draft = ctx.api.begin_edit(&plant)?;
    if let Some(name) = name {
        draft = draft.name(name);
    }
    let draft = match apply_fields(draft, fields) {
        Ok(draft) => draft,
        Err(e) => {
            ctx.api.cancel_edit();
            return Err(e);
        }
    };

    let result = ctx.api.submit(draft);
    // One-line edits never stay open.
    ctx.api.cancel_edit();
    render(ctx, &result?, |_| {})
}

/// Applies the optional form fields given on the command line to a draft.
fn apply_fields(mut draft: PlantDraft, fields: PlantFields) -> Result<PlantDraft> {
    if let Some(species) = fields.species {
        draft = draft.species(species);
    }
    if let Some(location) = fields.location {
        draft = draft.location(location);
    }
    if let Some(notes) = fields.notes {
        draft = draft.notes(notes);
    }
    if let Some(watered) = fields.watered {
        draft = draft.last_watered_input(&watered)?;
    }
    if let Some(interval) = fields.interval {
        draft = draft.interval_input(&interval)?;
    }
    Ok(draft)
}

fn render<F>(ctx: &AppContext, result: &CmdResult, body: F) -> Result<()>
where
    F: FnOnce(&CmdResult),
{
    match ctx.output {
        OutputMode::Json => print_json(result)?,
        OutputMode::Text => {
            body(result);
            print_messages(&result.messages);
        }
    }
    Ok(())
}

/// Splits a session line into words. Double or single quotes group words;
/// a backslash escapes the next character.
fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (_, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
                in_token = true;
            }
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_token = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if let Some(q) = quote {
        bail!("unterminated {} quote", q);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
