//! Resolve one symbol and copy it to the clipboard.

use crate::cli::{Cli, CopyArgs};
use crate::clipboard::copy_text;
use crate::config::Config;
use crate::error::Result;

use super::{load_catalog, open_store};

/// Run the copy command.
pub fn run(cli: &Cli, config: &Config, args: &CopyArgs) -> Result<()> {
    let catalog = load_catalog(cli, config)?;
    let record = catalog.resolve(&args.query)?.clone();

    copy_text(&record.symbol)?;

    let mut store = open_store(cli)?;
    store.record_usage(&record)?;

    if !cli.quiet {
        println!("Copied {} ({})", record.symbol, record.name);
    }
    Ok(())
}
