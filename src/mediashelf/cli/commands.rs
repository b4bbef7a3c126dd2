//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin prompts)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_tracing()`: Builds the log filter and installs the subscriber
//! - `handle_*()`: Per-command handlers that call the API and print results
//! - `resolve_gate()`: Prompts for a pending confirmation and runs or drops it

use super::print::{
    print_config, print_confirm, print_genres, print_messages, print_overview, print_record,
    print_records,
};
use super::setup::{Cli, Commands, RecordAction};
use clap::Parser;
use mediashelf::api::{CmdMessage, ConfigAction, ShelfApi};
use mediashelf::confirm::{ConfirmOptions, ConfirmationGate};
use mediashelf::error::Result;
use mediashelf::filter::FilterableCollection;
use mediashelf::init::{initialize, resolve_data_dir, ShelfContext, HOME_ENV};
use mediashelf::model::{Book, Kind, Movie, Record, Series};
use mediashelf::store::fs_backend::FsBackend;
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MEDIASHELF_LOG";

type Api = ShelfApi<FsBackend>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let env_home = std::env::var(HOME_ENV).ok();
    let data_dir = resolve_data_dir(cli.data_dir.as_deref(), env_home.as_deref())?;
    let mut ctx = initialize(data_dir)?;
    init_tracing(cli.verbose, &ctx.api.config().log_filter);
    debug!(data_dir = %ctx.data_dir.display(), "starting");

    let Some(command) = cli.command else {
        return handle_overview(&ctx);
    };

    match command {
        Commands::Reset { yes } => handle_reset(&mut ctx, yes),
        Commands::Config { key, value } => handle_config(&mut ctx, key, value),
        collection => match collection.collection() {
            Some((Kind::Movie, action)) => handle_collection::<Movie>(&mut ctx, action),
            Some((Kind::Series, action)) => handle_collection::<Series>(&mut ctx, action),
            Some((Kind::Book, action)) => handle_collection::<Book>(&mut ctx, action),
            None => Ok(()),
        },
    }
}

/// `-v` wins, then `MEDIASHELF_LOG`, then the configured filter.
fn log_filter(verbose: bool, env_filter: Option<&str>, configured: &str) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    env_filter
        .and_then(|f| EnvFilter::try_new(f).ok())
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn init_tracing(verbose: bool, configured: &str) {
    let env_filter = std::env::var(LOG_ENV).ok();
    let filter = log_filter(verbose, env_filter.as_deref(), configured);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn handle_overview(ctx: &ShelfContext) -> Result<()> {
    let result = ctx.api.overview()?;
    print_overview(&result.summaries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_collection<T: Record>(ctx: &mut ShelfContext, action: RecordAction) -> Result<()> {
    match action {
        RecordAction::List { search, genre } => handle_list::<T>(ctx, search, genre),
        RecordAction::Show { id } => {
            let result = ctx.api.show::<T>(id)?;
            for record in &result.listed {
                print_record(record);
            }
            Ok(())
        }
        RecordAction::Add { fields } => {
            let result = ctx.api.add::<T>(&fields.into_draft())?;
            print_messages(&result.messages);
            Ok(())
        }
        RecordAction::Edit {
            id,
            fields,
            add_genre,
            remove_genre,
            no_poster,
        } => {
            let mut draft = fields.into_draft();
            draft.add_genre = add_genre;
            draft.remove_genre = remove_genre;
            draft.clear_poster = no_poster;
            let result = ctx.api.edit::<T>(id, &draft)?;
            print_messages(&result.messages);
            Ok(())
        }
        RecordAction::Delete { id, yes } => handle_delete::<T>(ctx, id, yes),
        RecordAction::Genres => {
            let result = ctx.api.genres(T::KIND);
            print_genres(T::KIND, &result.genres);
            Ok(())
        }
    }
}

fn handle_list<T: Record>(
    ctx: &mut ShelfContext,
    search: Option<String>,
    genre: Option<String>,
) -> Result<()> {
    let mut view = FilterableCollection::new();
    if let Some(query) = search {
        view.set_query(query);
    }
    view.set_genre(genre);

    let result = ctx.api.list::<T>(&view)?;
    print_records(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete<T: Record>(ctx: &mut ShelfContext, id: u64, yes: bool) -> Result<()> {
    let options = ctx.api.delete_confirmation::<T>(id)?;
    let skip_prompt = yes || !ctx.api.config().confirm_deletes;

    let mut gate: ConfirmationGate<Api, _> = ConfirmationGate::new();
    gate.open(move |api: &mut Api| api.delete::<T>(id), options);

    match resolve_gate(&mut gate, &mut ctx.api, skip_prompt)? {
        Some(result) => print_messages(&result.messages),
        None => print_messages(&[CmdMessage::info("Operation cancelled.")]),
    }
    Ok(())
}

fn handle_reset(ctx: &mut ShelfContext, yes: bool) -> Result<()> {
    let options = ctx.api.reset_confirmation();
    let skip_prompt = yes || !ctx.api.config().confirm_deletes;

    let mut gate: ConfirmationGate<Api, _> = ConfirmationGate::new();
    gate.open(|api: &mut Api| api.reset(), options);

    match resolve_gate(&mut gate, &mut ctx.api, skip_prompt)? {
        Some(result) => print_messages(&result.messages),
        None => print_messages(&[CmdMessage::info("Operation cancelled.")]),
    }
    Ok(())
}

fn handle_config(ctx: &mut ShelfContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config_action(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(&config.entries());
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Run the gate's pending action if the user agrees (or `skip_prompt` is
/// set); otherwise close the gate. `None` means the action was dropped.
fn resolve_gate<C, R>(
    gate: &mut ConfirmationGate<'_, C, R>,
    target: &mut C,
    skip_prompt: bool,
) -> Result<Option<R>> {
    if skip_prompt || prompt(gate.options())? {
        gate.confirm(target)
    } else {
        gate.close();
        Ok(None)
    }
}

fn prompt(options: &ConfirmOptions) -> Result<bool> {
    print_confirm(options);
    print!("[y/N] {} / {}: ", options.confirm_label, options.cancel_label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
