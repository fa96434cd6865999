//! Byte-for-byte comparison against the recorded day-by-day output.

use gildedrose_inventory::Shop;
use gildedrose_texttest::{fixture, print_snapshots};
use pretty_assertions::assert_eq;

fn texttest_fixture_output(days: u32) -> String {
    let mut shop = Shop::new(fixture::items());
    let mut out = Vec::new();
    print_snapshots(&mut out, &mut shop, days).expect("fixture items are all named");
    String::from_utf8(out).expect("snapshot output is UTF-8")
}

#[test]
fn default_single_day_output() {
    assert_eq!(
        texttest_fixture_output(1),
        include_str!("fixtures/expected-output.txt")
    );
}

#[test]
fn three_day_output() {
    assert_eq!(
        texttest_fixture_output(3),
        include_str!("fixtures/expected-output-3.txt")
    );
}

#[test]
fn ten_day_output() {
    assert_eq!(
        texttest_fixture_output(10),
        include_str!("fixtures/expected-output-10.txt")
    );
}
