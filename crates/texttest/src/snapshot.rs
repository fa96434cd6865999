use std::io::Write;

use gildedrose_inventory::Shop;

use crate::error::TexttestError;

pub const BANNER: &str = "OMGHAI!";
pub const HEADER: &str = "name, sellIn, quality";

/// Print the stock as it stands on day 0 and after each of `days` updates.
///
/// The shop is advanced once after every snapshot, so it ends `days + 1`
/// nights past where it started.
pub fn print_snapshots<W: Write>(
    out: &mut W,
    shop: &mut Shop,
    days: u32,
) -> Result<(), TexttestError> {
    writeln!(out, "{BANNER}")?;

    for day in 0..=days {
        writeln!(out, "-------- day {day} --------")?;
        writeln!(out, "{HEADER}")?;
        for item in shop.items() {
            writeln!(out, "{item}")?;
        }
        writeln!(out)?;

        shop.update_quality()?;
    }

    Ok(())
}
