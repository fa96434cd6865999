use serde::{Deserialize, Serialize};

use gildedrose_core::ValueObject;

pub const AGED_BRIE: &str = "Aged Brie";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const CONJURED: &str = "Conjured Mana Cake";

/// Lowest quality a non-legendary item can be degraded to.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a non-legendary item can be raised to.
pub const MAX_QUALITY: i32 = 50;

/// Conventional quality of a legendary item. Never enforced.
pub const LEGENDARY_QUALITY: i32 = 80;

/// A line of stock: name, days left to sell, and current quality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Category this item is updated as, derived from its name.
    pub fn kind(&self) -> ItemKind {
        ItemKind::classify(&self.name)
    }

    /// Whether the item carries a usable name.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

impl ValueObject for Item {}

/// Snapshot line format: `name, sell_in, quality`.
impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Closed set of item categories, each with its own nightly rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Anything the shop has no special rule for.
    Ordinary,
    AgedBrie,
    /// Sulfuras: never sold, never changes.
    Legendary,
    BackstagePass,
    Conjured,
}

impl ItemKind {
    /// Classify by exact name. Unknown names are ordinary stock.
    pub fn classify(name: &str) -> Self {
        match name {
            AGED_BRIE => ItemKind::AgedBrie,
            SULFURAS => ItemKind::Legendary,
            BACKSTAGE_PASSES => ItemKind::BackstagePass,
            CONJURED => ItemKind::Conjured,
            _ => ItemKind::Ordinary,
        }
    }

    /// Quality lost per degradation step. Zero for categories that never degrade.
    pub fn degradation_rate(self) -> i32 {
        match self {
            ItemKind::Ordinary => 1,
            ItemKind::Conjured => 2,
            ItemKind::AgedBrie | ItemKind::Legendary | ItemKind::BackstagePass => 0,
        }
    }

    pub fn is_legendary(self) -> bool {
        matches!(self, ItemKind::Legendary)
    }
}
