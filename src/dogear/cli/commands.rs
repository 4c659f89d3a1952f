//! # CLI Layer
//!
//! This module is the terminal client for dogear. It is the **only** place
//! that:
//! - Knows about stdin, stdout and stderr
//! - Handles argument parsing
//! - Installs the tracing subscriber
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` from config and flags
//! - `handle_*()`: Per-command handlers that call the API and print results
//!
//! `find` is special: its stdout is consumed by `flipto`, so it prints the
//! bare path there and everything else on stderr.

use super::render::{eprint_messages, print_messages, render_bookmark_list};
use super::setup::{print_grouped_help, print_help_for_command, Cli, Commands, ShellKind};
use super::terminal::TerminalPrompter;
use clap::Parser;
use dogear::api::{self, CmdResult, ConfigAction, DogearApi};
use dogear::config::{config_dir, DogearConfig};
use dogear::error::Result;
use dogear::store::fs::FileBackend;
use dogear::system::OsFilesystem;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "DOGEAR_LOG";

const FLIPTO_BASH: &str = include_str!("flipto.bash");
const FLIPTO_ZSH: &str = include_str!("flipto.zsh");

struct AppContext {
    api: DogearApi<FileBackend, OsFilesystem>,
}

pub fn run() -> Result<()> {
    let Cli {
        command,
        store,
        verbose,
    } = Cli::parse();
    init_logging(verbose);

    // Help, shell and config never open the store
    let command = match command {
        None => {
            print_grouped_help();
            return Ok(());
        }
        Some(Commands::Help { command }) => {
            match command {
                Some(name) => print_help_for_command(&name),
                None => print_grouped_help(),
            }
            return Ok(());
        }
        Some(Commands::Shell { shell }) => {
            handle_shell(shell);
            return Ok(());
        }
        Some(Commands::Config { key, value }) => return handle_config(key, value),
        Some(command) => command,
    };

    let mut ctx = init_context(store)?;

    match command {
        Commands::Fold { name } => handle_fold(&mut ctx, &name),
        Commands::Unfold => handle_unfold(&mut ctx),
        Commands::Find { name } => handle_find(&mut ctx, &name),
        Commands::Like { term } => handle_like(&mut ctx, &term.join(" ")),
        Commands::List => handle_list(&mut ctx),
        Commands::Recent => handle_recent(&mut ctx),
        Commands::Edit => handle_edit(&mut ctx),
        Commands::Clean => handle_clean(&mut ctx),
        Commands::CompleteNames => handle_complete_names(&mut ctx),
        Commands::Help { .. } | Commands::Shell { .. } | Commands::Config { .. } => Ok(()),
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "dogear=debug" } else { "error" })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(store: Option<PathBuf>) -> Result<AppContext> {
    let config = DogearConfig::load(config_dir()?)?;
    let store_path = config.resolve_store_path(store.as_deref())?;
    debug!(store = %store_path.display(), "using store");

    let api = DogearApi::new(FileBackend::new(store_path), OsFilesystem)
        .with_recent_limit(config.recent_limit);
    Ok(AppContext { api })
}

fn handle_fold(ctx: &mut AppContext, name: &str) -> Result<()> {
    let mut prompter = TerminalPrompter::stdin();
    let result = ctx.api.fold(&mut prompter, name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_unfold(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.unfold()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_find(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.find(name)?;
    if let Some(path) = &result.found_path {
        println!("{}", path);
    }
    eprint_messages(&result.messages);
    Ok(())
}

fn handle_like(ctx: &mut AppContext, term: &str) -> Result<()> {
    let result = ctx.api.like(term)?;
    print_listing(&result, None);
    Ok(())
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    print_listing(&result, None);
    Ok(())
}

fn handle_recent(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.recent()?;
    print_listing(&result, Some("Recently Added Bookmarks:"));
    Ok(())
}

fn handle_edit(ctx: &mut AppContext) -> Result<()> {
    let mut prompter = TerminalPrompter::stdin();
    let result = ctx.api.edit(&mut prompter)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clean(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clean()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_complete_names(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    for bookmark in &result.listed {
        println!("{}", bookmark.name);
    }
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let result = api::config(&config_dir()?, action)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_shell(shell: ShellKind) {
    let script = match shell {
        ShellKind::Bash => FLIPTO_BASH,
        ShellKind::Zsh => FLIPTO_ZSH,
    };
    print!("{}", script);
}

fn print_listing(result: &CmdResult, header: Option<&str>) {
    if !result.listed.is_empty() {
        if let Some(header) = header {
            println!("{}", header);
        }
        print!("{}", render_bookmark_list(&result.listed));
    }
    print_messages(&result.messages);
}
