//! Loading a starting stock list from a file.
//!
//! Two formats are accepted:
//!
//! - `*.json`: an array of `{ "name": ..., "sell_in": ..., "quality": ... }`.
//! - anything else: one `name, sellIn, quality` line per item, the same shape
//!   the snapshot printer writes. Blank lines and `#` comments are skipped.
//!
//! Names may contain commas (`Sulfuras, Hand of Ragnaros`), so the numeric
//! fields are taken from the right.

use std::path::Path;

use gildedrose_inventory::Item;

use crate::error::ItemListError;

pub fn load(path: &Path) -> Result<Vec<Item>, ItemListError> {
    let content = std::fs::read_to_string(path).map_err(|source| ItemListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_json(&content)
    } else {
        parse_text(&content)
    }
}

pub fn parse_json(content: &str) -> Result<Vec<Item>, ItemListError> {
    Ok(serde_json::from_str(content)?)
}

pub fn parse_text(content: &str) -> Result<Vec<Item>, ItemListError> {
    content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| parse_line(line_no, line))
        .collect()
}

fn parse_line(line_no: usize, line: &str) -> Result<Item, ItemListError> {
    let mut fields = line.rsplitn(3, ',');
    let (Some(quality), Some(sell_in), Some(name)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(ItemListError::MalformedLine {
            line: line_no,
            content: line.to_string(),
        });
    };

    Ok(Item::new(
        name.trim(),
        parse_number(line_no, "sellIn", sell_in)?,
        parse_number(line_no, "quality", quality)?,
    ))
}

fn parse_number(line_no: usize, field: &'static str, raw: &str) -> Result<i32, ItemListError> {
    let raw = raw.trim();
    raw.parse().map_err(|_| ItemListError::InvalidNumber {
        line: line_no,
        field,
        value: raw.to_string(),
    })
}
