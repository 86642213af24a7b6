//! Show or edit favorite symbols.

use crate::cli::{Cli, FavoritesArgs};
use crate::config::Config;
use crate::error::Result;

use super::{load_catalog, open_store, print_records};

/// Run the favorites command.
pub fn run(cli: &Cli, config: &Config, args: &FavoritesArgs) -> Result<()> {
    let mut store = open_store(cli)?;

    if args.clear {
        store.clear_favorites()?;
        if !cli.quiet {
            println!("Favorites cleared");
        }
        return Ok(());
    }

    if let Some(query) = &args.add {
        let catalog = load_catalog(cli, config)?;
        let record = catalog.resolve(query)?.clone();
        if !store.is_favorite(&record.symbol) {
            store.toggle_favorite(&record)?;
        }
        if !cli.quiet {
            println!("Added {} ({}) to favorites", record.symbol, record.name);
        }
        return Ok(());
    }

    if let Some(query) = &args.remove {
        let catalog = load_catalog(cli, config)?;
        let record = catalog.resolve(query)?.clone();
        if store.is_favorite(&record.symbol) {
            store.toggle_favorite(&record)?;
            if !cli.quiet {
                println!("Removed {} ({}) from favorites", record.symbol, record.name);
            }
        } else if !cli.quiet {
            println!("{} is not a favorite", record.symbol);
        }
        return Ok(());
    }

    let favorites: Vec<_> = store.favorites().collect();
    print_records(cli, favorites)
}
