use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use gildedrose_inventory::Shop;

use crate::error::TexttestError;
use crate::{fixture, item_list, snapshot};

#[derive(Debug, Parser)]
#[command(
    name = "gildedrose-texttest",
    version,
    about = "Print the Gilded Rose stock day by day."
)]
pub struct Cli {
    /// Number of days to simulate after the opening snapshot.
    #[arg(env = "GILDEDROSE_DAYS", default_value_t = 1)]
    pub days: u32,

    /// Starting stock: a JSON array, or `name, sellIn, quality` lines.
    /// Defaults to the built-in fixture list.
    #[arg(long, value_name = "PATH")]
    pub items: Option<PathBuf>,
}

/// Load the starting stock and print every day's snapshot to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), TexttestError> {
    let items = match &cli.items {
        Some(path) => {
            let items = item_list::load(path)?;
            tracing::info!(path = %path.display(), count = items.len(), "loaded item list");
            items
        }
        None => fixture::items(),
    };

    tracing::debug!(days = cli.days, items = items.len(), "printing snapshots");

    let mut shop = Shop::new(items);
    snapshot::print_snapshots(out, &mut shop, cli.days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_default_to_one() {
        let cli = Cli::try_parse_from(["gildedrose-texttest"]).unwrap();
        assert_eq!(cli.days, 1);
        assert!(cli.items.is_none());
    }

    #[test]
    fn days_and_item_list_are_parsed() {
        let cli =
            Cli::try_parse_from(["gildedrose-texttest", "10", "--items", "stock.txt"]).unwrap();
        assert_eq!(cli.days, 10);
        assert_eq!(cli.items, Some(PathBuf::from("stock.txt")));
    }

    #[test]
    fn negative_days_are_rejected() {
        assert!(Cli::try_parse_from(["gildedrose-texttest", "--", "-1"]).is_err());
        assert!(Cli::try_parse_from(["gildedrose-texttest", "three"]).is_err());
    }

    #[test]
    fn missing_item_list_is_an_item_list_error() {
        let cli = Cli {
            days: 1,
            items: Some(PathBuf::from("/definitely/not/here.txt")),
        };
        let mut out = Vec::new();
        assert!(matches!(
            run(&cli, &mut out),
            Err(TexttestError::ItemList(_))
        ));
        assert!(out.is_empty());
    }
}
