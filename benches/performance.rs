use criterion::{criterion_group, criterion_main, Criterion};
use relq::ops::{self, SortKey};
use relq::{row, Row, Table};

fn make_table(name: &str, rows: usize) -> Table {
    Table::new(
        name,
        (0..rows).map(|i| {
            row! {
                "id" => i as i64,
                "group" => format!("group-{}", i % 8),
                "value" => (i % 10) as f64,
            }
        }),
    )
}

fn bench_cross_join(c: &mut Criterion) {
    let a = make_table("a", 128);
    let b = make_table("b", 128);
    c.bench_function("cross_join_128x128", |bench| {
        bench.iter(|| ops::cross_join(&a, &b))
    });
}

fn bench_group_count(c: &mut Criterion) {
    let t = make_table("t", 4096);
    c.bench_function("group_by_count", |bench| {
        bench.iter(|| {
            let grouped = ops::group_by(&t, &["group"]).unwrap();
            let _ = ops::count(&grouped, "id").unwrap();
        })
    });
}

fn bench_order_by(c: &mut Criterion) {
    let t = make_table("t", 4096);
    let cmp = ops::by_keys(vec![SortKey::asc("value"), SortKey::desc("id")]);
    c.bench_function("order_by_two_keys", |bench| {
        bench.iter(|| {
            let _ = ops::order_by(&t, |a: &Row, b: &Row| cmp(a, b)).unwrap();
        })
    });
}

criterion_group!(relational, bench_cross_join, bench_group_count, bench_order_by);
criterion_main!(relational);
