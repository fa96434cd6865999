//! Inventory domain module.
//!
//! This crate contains the nightly quality rules for the shop's stock,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod engine;
pub mod item;
pub mod rules;
pub mod shop;

pub use engine::{advance_days, advance_one_day};
pub use item::{
    AGED_BRIE, BACKSTAGE_PASSES, CONJURED, Item, ItemKind, LEGENDARY_QUALITY, MAX_QUALITY,
    MIN_QUALITY, SULFURAS,
};
pub use shop::Shop;
