//! List symbols or categories.

use crate::cli::{Cli, ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::Result;

use super::{load_catalog, print_records};

/// Run the list command.
pub fn run(cli: &Cli, config: &Config, args: &ListArgs) -> Result<()> {
    let catalog = load_catalog(cli, config)?;

    if args.categories {
        let categories = catalog.categories();
        match cli.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&categories)?),
            OutputFormat::Text => {
                for category in categories {
                    println!("{category}");
                }
            }
        }
        return Ok(());
    }

    let records = catalog
        .records()
        .iter()
        .filter(|r| args.category.as_deref().map_or(true, |c| r.category == c));
    print_records(cli, records)
}
