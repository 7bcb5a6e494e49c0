//! Criterion benchmarks for the shop-name rules.
//!
//! The rules run on every keystroke, so they are measured on short and long
//! inputs, with the emoji placed early and late in the text.
//!
//! Run with:
//! ```bash
//! cargo bench --package shop-core --bench rules_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shop_core::{rules::emoji::contains_emoji, validate_shop_name, MIN_SHOP_NAME_CHARS};

fn bench_validate_shop_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_shop_name");

    for len in [4usize, 32, 256] {
        let valid = "a".repeat(len);
        group.bench_with_input(BenchmarkId::new("valid", len), &valid, |b, input| {
            b.iter(|| validate_shop_name(black_box(input), MIN_SHOP_NAME_CHARS))
        });

        let trailing_emoji = format!("{}😄", "a".repeat(len));
        group.bench_with_input(
            BenchmarkId::new("trailing_emoji", len),
            &trailing_emoji,
            |b, input| b.iter(|| validate_shop_name(black_box(input), MIN_SHOP_NAME_CHARS)),
        );
    }

    group.finish();
}

fn bench_contains_emoji(c: &mut Criterion) {
    let text = "tulus jaya shop ".repeat(16);
    c.bench_function("contains_emoji/no_emoji_256", |b| {
        b.iter(|| contains_emoji(black_box(&text)))
    });
}

criterion_group!(benches, bench_validate_shop_name, bench_contains_emoji);
criterion_main!(benches);
