//! Interactive symbol picker command.
//!
//! Provides a fuzzy-searchable prompt for selecting a symbol without
//! entering the full-screen TUI.

use std::fmt::Write as _;

use dialoguer::{theme::ColorfulTheme, FuzzySelect};

use crate::catalog::SymbolRecord;
use crate::cli::{Cli, PickArgs};
use crate::clipboard::copy_text;
use crate::config::Config;
use crate::error::{GlyphError, Result};

use super::{load_catalog, open_store};

/// Format a symbol for display in the picker.
fn format_symbol_item(record: &SymbolRecord) -> String {
    let mut line = String::new();
    write!(line, "{}  {}", record.symbol, record.name).unwrap();
    if !record.aliases.is_empty() {
        write!(line, " ({})", record.aliases.join(", ")).unwrap();
    }
    if !record.category.is_empty() {
        write!(line, " [{}]", record.category).unwrap();
    }
    line
}

/// Run the pick command.
pub fn run(cli: &Cli, config: &Config, args: &PickArgs) -> Result<()> {
    let catalog = load_catalog(cli, config)?;

    let records: Vec<SymbolRecord> = match &args.query {
        Some(query) => catalog.filter(query).into_iter().cloned().collect(),
        None => catalog.records().to_vec(),
    };

    if records.is_empty() {
        return Err(GlyphError::SymbolNotFound {
            query: args.query.clone().unwrap_or_default(),
        });
    }

    let items: Vec<String> = records.iter().map(format_symbol_item).collect();

    // Show the fuzzy selector
    let selection = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a symbol (type to filter)")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|e| GlyphError::InvalidConfig {
            message: format!("Failed to show interactive picker: {e}"),
        })?;

    let Some(idx) = selection else {
        // User cancelled
        if !cli.quiet {
            eprintln!("Selection cancelled.");
        }
        return Ok(());
    };

    let record = &records[idx];

    if args.no_copy {
        println!("{}", record.symbol);
        return Ok(());
    }

    copy_text(&record.symbol)?;

    let mut store = open_store(cli)?;
    store.record_usage(record)?;

    if !cli.quiet {
        println!("Copied {} ({})", record.symbol, record.name);
    }
    Ok(())
}
