//! End-of-day batch update over a collection of items.

use gildedrose_core::{DomainError, DomainResult};

use crate::item::Item;
use crate::rules::update_item;

/// Advance every item by one night, in collection order.
///
/// Fails with [`DomainError::InvariantViolation`] if any item has a blank name.
/// All items are checked before any is touched, so a failed call leaves the
/// collection as it was.
pub fn advance_one_day(items: &mut [Item]) -> DomainResult<()> {
    ensure_named(items)?;

    for (index, item) in items.iter_mut().enumerate() {
        update_item(item);
        tracing::trace!(
            index,
            name = %item.name,
            sell_in = item.sell_in,
            quality = item.quality,
            "item updated"
        );
    }

    Ok(())
}

/// Advance every item by `days` nights, one full day at a time.
pub fn advance_days(items: &mut [Item], days: u32) -> DomainResult<()> {
    tracing::debug!(days, items = items.len(), "advancing inventory");

    for _ in 0..days {
        advance_one_day(items)?;
    }

    Ok(())
}

fn ensure_named(items: &[Item]) -> DomainResult<()> {
    match items.iter().position(|item| !item.has_name()) {
        Some(index) => Err(DomainError::invariant(format!(
            "item #{index} has no name"
        ))),
        None => Ok(()),
    }
}
