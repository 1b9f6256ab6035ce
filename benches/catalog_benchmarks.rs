use std::{hint::black_box, time::Duration};

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use library_catalog::{Catalog, NewBook};

fn custom_criterion() -> Criterion {
    Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(1))
        .warm_up_time(Duration::from_secs(1))
}

/// A catalog of `size` records spread over four categories, every third one borrowed
fn populated_catalog(size: u32) -> Catalog {
    let mut catalog = Catalog::new();
    for n in 0..size {
        let category = ["Fiction", "Science", "History", "Programming"][(n % 4) as usize];
        let id = catalog.add(
            NewBook::new(format!("Title {n}"), format!("Author {}", n % 97)).category(category),
        );
        if n % 3 == 0 {
            let borrowed = catalog.borrow(id);
            debug_assert!(borrowed);
        }
    }
    catalog
}

fn catalog_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("Catalog Operations");

    group.bench_function("add", |b| {
        b.iter_batched(
            Catalog::new,
            |mut catalog| catalog.add(NewBook::new("Benchmark", "Author")),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("borrow_return", |b| {
        b.iter_batched(
            || populated_catalog(100),
            |mut catalog| (catalog.borrow(2), catalog.return_book(2)),
            BatchSize::SmallInput,
        );
    });

    let catalog = populated_catalog(10_000);

    group.bench_function("search_by_title_10k", |b| {
        b.iter(|| catalog.search_by_title(black_box("Title 99")));
    });

    group.bench_function("search_by_category_10k", |b| {
        b.iter(|| catalog.search_by_category(black_box("Science")));
    });

    group.bench_function("available_count_10k", |b| {
        b.iter(|| catalog.available_count());
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = custom_criterion();
    targets = catalog_bench
}
criterion_main!(benches);
