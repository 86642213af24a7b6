//! Launch the interactive picker TUI.

use crate::cli::{Cli, TuiArgs};
use crate::config::Config;
use crate::error::Result;

use super::{load_catalog, open_store};

/// Run the tui command.
pub fn run(cli: &Cli, config: &Config, args: &TuiArgs) -> Result<()> {
    let catalog = load_catalog(cli, config)?;
    let store = open_store(cli)?;
    crate::tui::run(catalog, store, config, args.theme.as_deref())
}
