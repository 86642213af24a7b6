//! Show or clear recently copied symbols.

use crate::cli::{Cli, RecentArgs};
use crate::config::Config;
use crate::error::Result;

use super::{open_store, print_records};

/// Run the recent command.
pub fn run(cli: &Cli, _config: &Config, args: &RecentArgs) -> Result<()> {
    let mut store = open_store(cli)?;

    if args.clear {
        store.clear_recent()?;
        if !cli.quiet {
            println!("Recent list cleared");
        }
        return Ok(());
    }

    print_records(cli, store.recent())
}
