//! Per-category nightly rules.
//!
//! Every item goes through the same three steps each night:
//!
//! 1. the category's quality change while the item is still being sold,
//! 2. one day off `sell_in`,
//! 3. if `sell_in` is now negative, the category's expiry adjustment.
//!
//! Backstage passes read `sell_in` in step 1 *before* the decrement, and the
//! second degradation in step 3 reads it *after*. Reordering the steps shifts
//! the day on which double degradation and the pass bonuses kick in.
//!
//! Legendary items skip all three steps.

use crate::item::{Item, ItemKind, MAX_QUALITY, MIN_QUALITY};

/// Passes gain an extra point per day from this many days out.
const BACKSTAGE_FIRST_BONUS_BELOW: i32 = 11;
/// ...and a second extra point from this many days out.
const BACKSTAGE_SECOND_BONUS_BELOW: i32 = 6;

/// Apply one night's rule to a single item, in place.
pub fn update_item(item: &mut Item) {
    let kind = item.kind();
    if kind.is_legendary() {
        return;
    }

    before_sell_by(kind, item);

    item.sell_in = item.sell_in.saturating_sub(1);

    if item.sell_in < 0 {
        after_sell_by(kind, item);
    }
}

fn before_sell_by(kind: ItemKind, item: &mut Item) {
    match kind {
        ItemKind::Ordinary | ItemKind::Conjured => degrade(item, kind.degradation_rate()),
        ItemKind::AgedBrie => appreciate(item),
        ItemKind::BackstagePass => {
            appreciate(item);
            if item.sell_in < BACKSTAGE_FIRST_BONUS_BELOW {
                appreciate(item);
            }
            if item.sell_in < BACKSTAGE_SECOND_BONUS_BELOW {
                appreciate(item);
            }
        }
        ItemKind::Legendary => {}
    }
}

fn after_sell_by(kind: ItemKind, item: &mut Item) {
    match kind {
        ItemKind::Ordinary | ItemKind::Conjured => degrade(item, kind.degradation_rate()),
        ItemKind::AgedBrie => appreciate(item),
        // The concert is over.
        ItemKind::BackstagePass => item.quality = MIN_QUALITY,
        ItemKind::Legendary => {}
    }
}

/// Lose `rate` points, only while there is quality left to lose.
fn degrade(item: &mut Item, rate: i32) {
    if item.quality > MIN_QUALITY {
        item.quality = (item.quality - rate).max(MIN_QUALITY);
    }
}

/// Gain one point, only while below the ceiling.
fn appreciate(item: &mut Item) {
    if item.quality < MAX_QUALITY {
        item.quality += 1;
    }
}
