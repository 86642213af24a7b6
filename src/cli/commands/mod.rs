//! CLI command implementations.
//!
//! Each command is implemented in its own module with a `run` function
//! that handles the command logic.

pub mod copy;
pub mod favorites;
pub mod list;
pub mod pick;
pub mod recent;
pub mod search;
pub mod tui;

use crate::catalog::{Catalog, SymbolRecord};
use crate::config::Config;
use crate::error::Result;
use crate::store::SymbolStore;

use super::{Cli, OutputFormat};

/// Load the catalog, honoring `--catalog` over the config file over the
/// embedded data.
pub fn load_catalog(cli: &Cli, config: &Config) -> Result<Catalog> {
    let path = cli.catalog.as_deref().or(config.catalog.path.as_deref());
    Catalog::load_or_embedded(path)
}

/// Open the persisted recent/favorites store, honoring `--state`.
pub fn open_store(cli: &Cli) -> Result<SymbolStore> {
    match &cli.state {
        Some(path) => Ok(SymbolStore::open(path.clone())),
        None => SymbolStore::open_default(),
    }
}

/// Print a list of records in the requested output format.
pub fn print_records<'a, I>(cli: &Cli, records: I) -> Result<()>
where
    I: IntoIterator<Item = &'a SymbolRecord>,
{
    match cli.output {
        OutputFormat::Json => {
            let records: Vec<&SymbolRecord> = records.into_iter().collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        OutputFormat::Text => {
            for record in records {
                if cli.quiet {
                    println!("{}", record.symbol);
                } else {
                    println!("{}\t{}\t{}", record.symbol, record.name, record.category);
                }
            }
        }
    }
    Ok(())
}
