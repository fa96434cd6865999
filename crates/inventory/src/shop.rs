use gildedrose_core::DomainResult;

use crate::engine;
use crate::item::Item;

/// The shop's stock, updated in place at the end of every day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shop {
    items: Vec<Item>,
}

impl Shop {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Read-only view of the stock, in the order it was supplied.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Run one end-of-day update.
    pub fn update_quality(&mut self) -> DomainResult<()> {
        engine::advance_one_day(&mut self.items)
    }

    pub fn advance_days(&mut self, days: u32) -> DomainResult<()> {
        engine::advance_days(&mut self.items, days)
    }
}

impl From<Vec<Item>> for Shop {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
