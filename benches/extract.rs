// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bgg_peek::{
    config::consts::DESC_BUDGET,
    record::CandidateItem,
    select::select,
    specs,
};

const SEARCH: &str = include_str!("../tests/fixtures/search_catan.xml");
const THING: &str = include_str!("../tests/fixtures/thing_13.xml");

fn bench_extract(c: &mut Criterion) {
    c.bench_function("search_collect", |b| {
        b.iter(|| {
            let found = specs::search::collect(black_box(SEARCH), "boardgame");
            black_box(found.len())
        })
    });

    let found = specs::search::collect(SEARCH, "boardgame");
    c.bench_function("select", |b| {
        b.iter(|| black_box(select(black_box(&found), "catan").map(|c| c.index)))
    });

    let chosen = CandidateItem::new("13", "CATAN");
    c.bench_function("thing_build", |b| {
        b.iter(|| {
            let rec = specs::thing::build(black_box(THING), &chosen, DESC_BUDGET);
            black_box(rec.title.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
