//! `gildedrose-texttest`: prints the shop's stock day by day.
//!
//! The output format is fixed: golden files under `tests/fixtures` pin it
//! byte for byte, so any change to the update rules shows up as a diff.

pub mod cli;
pub mod error;
pub mod fixture;
pub mod item_list;
pub mod snapshot;

pub use cli::{Cli, run};
pub use error::{ItemListError, TexttestError};
pub use snapshot::print_snapshots;
