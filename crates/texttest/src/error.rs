//! Errors surfaced by the text-test tool.

use std::path::PathBuf;

use gildedrose_core::DomainError;
use thiserror::Error;

/// Failure to load a stock list from disk.
#[derive(Debug, Error)]
pub enum ItemListError {
    #[error("failed to read item list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A text line without the `name, sellIn, quality` shape.
    #[error("line {line}: expected `name, sellIn, quality`, got {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("line {line}: {field} is not an integer: {value:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("invalid JSON item list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Anything that can stop a snapshot run.
#[derive(Debug, Error)]
pub enum TexttestError {
    #[error(transparent)]
    ItemList(#[from] ItemListError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),
}
