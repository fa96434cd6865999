use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use gildedrose_inventory::{advance_days, Item, AGED_BRIE, BACKSTAGE_PASSES, CONJURED, SULFURAS};

/// A stock list cycling through every category with spread-out sell-in values.
fn mixed_stock(len: usize) -> Vec<Item> {
    let names = [
        "+5 Dexterity Vest",
        AGED_BRIE,
        SULFURAS,
        BACKSTAGE_PASSES,
        CONJURED,
    ];

    (0..len)
        .map(|i| {
            let name = names[i % names.len()];
            let sell_in = (i % 30) as i32 - 5;
            let quality = if name == SULFURAS { 80 } else { (i % 51) as i32 };
            Item::new(name, sell_in, quality)
        })
        .collect()
}

fn bench_advance_days(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_days");

    for &len in &[100usize, 1_000, 10_000] {
        let stock = mixed_stock(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("one_day", len), &stock, |b, stock| {
            b.iter(|| {
                let mut items = stock.clone();
                advance_days(black_box(&mut items), 1).unwrap();
                items
            });
        });

        group.bench_with_input(BenchmarkId::new("thirty_days", len), &stock, |b, stock| {
            b.iter(|| {
                let mut items = stock.clone();
                advance_days(black_box(&mut items), 30).unwrap();
                items
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_advance_days);
criterion_main!(benches);
