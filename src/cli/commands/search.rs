//! Search the catalog from the command line.

use crate::cli::{Cli, SearchArgs};
use crate::config::Config;
use crate::error::Result;

use super::{load_catalog, print_records};

/// Run the search command.
pub fn run(cli: &Cli, config: &Config, args: &SearchArgs) -> Result<()> {
    let catalog = load_catalog(cli, config)?;
    let mut matches = catalog.filter(&args.query);
    if let Some(limit) = args.limit {
        matches.truncate(limit);
    }
    print_records(cli, matches)
}
