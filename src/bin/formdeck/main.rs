//! FormDeck entrypoint: a dashboard shell (sidebar + header) hosting the
//! multi-section profile settings form.
//!
//! The screen is fully event-driven: one synchronous handler runs per
//! keystroke or paste and finishes before the next event is read. Form data
//! lives for the life of the screen and is never persisted or transmitted;
//! save/verify stay inert trigger points.

mod config;
mod event_loop;
mod input;
mod screen;
mod terminal;
mod theme;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use formdeck::catalog::Catalog;
use formdeck::{init_logging, SettingsController};

use crate::config::{Cli, ShellConfig};
use crate::screen::ScreenState;
use crate::terminal::ShellTerminal;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalog = load_catalog(&cli)?;

    if cli.dump_catalog {
        println!("{}", catalog.to_json()?);
        return Ok(());
    }
    if cli.list_timezones {
        print_timezones(&catalog);
        return Ok(());
    }

    let shell_config = ShellConfig::resolve(&cli)?;
    let log_path = init_logging(shell_config.log_level)?;
    info!(log = %log_path.display(), "formdeck starting");

    let mut terminal = ShellTerminal::enter()?;
    let mut screen = ScreenState::new(SettingsController::new(catalog));
    let result = event_loop::run(&mut terminal, &mut screen, &shell_config);
    drop(terminal);
    info!("formdeck exiting");
    result
}

fn load_catalog(cli: &Cli) -> Result<Catalog> {
    let Some(path) = &cli.catalog else {
        return Ok(Catalog::builtin());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read catalog {}", path.display()))?;
    Catalog::from_json(&raw).with_context(|| format!("parse catalog {}", path.display()))
}

fn print_timezones(catalog: &Catalog) {
    println!("Available timezones:");
    for entry in &catalog.timezones {
        if entry.value.is_empty() {
            continue;
        }
        println!(
            "  {:<8} {}",
            entry.value,
            formdeck::timezone::entry_row_label(entry)
        );
    }
}
