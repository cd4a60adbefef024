//! Benchmarks for listing tab assembly.
//!
//! Run with: cargo bench --package listing
//!
//! Measures single-tab application and full homepage assembly over a
//! synthetic 10k-add-on base.

use catalog::{Addon, AddonId, AddonStatus, AddonType, Application};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use listing::orderings::{created, featured, popular, updated};
use listing::{FilterSpec, ListingFilter};

fn synthetic_base(n: u32) -> Vec<Addon> {
    (1..=n)
        .map(|id| Addon {
            id,
            slug: format!("addon-{id}"),
            name: format!("Addon {id}"),
            addon_type: AddonType::Extension,
            status: AddonStatus::Public,
            listed: true,
            apps: vec![Application::Firefox],
            // Spread the sort keys around so orderings do real work.
            weekly_downloads: (id as u64 * 2_654_435_761) % 100_000,
            bayesian_rating: (id % 50) as f32 / 10.0,
            created: 1_200_000_000 + ((id as i64 * 7_919) % 500_000),
            last_updated: 1_260_000_000 + ((id as i64 * 104_729) % 500_000),
        })
        .collect()
}

fn homepage_spec(featured_ids: Vec<AddonId>) -> FilterSpec {
    FilterSpec::new(
        vec![
            featured(featured_ids),
            popular(),
            created().with_key("new"),
            updated(),
        ],
        "featured",
    )
    .expect("valid spec")
}

fn bench_apply_popular(c: &mut Criterion) {
    let base = synthetic_base(10_000);
    let spec = homepage_spec(vec![5, 17, 400, 9_999]);
    let filter = ListingFilter::new(&spec);
    let option = filter.select(Some("popular"));

    c.bench_function("apply_popular_10k", |b| {
        b.iter(|| {
            let out = filter.apply(black_box(option), black_box(&base));
            black_box(out)
        })
    });
}

fn bench_all_tabs(c: &mut Criterion) {
    let base = synthetic_base(10_000);
    let spec = homepage_spec((1..=50).collect());
    let filter = ListingFilter::new(&spec);

    c.bench_function("all_homepage_tabs_10k", |b| {
        b.iter(|| {
            let tabs = filter.all(black_box(&base));
            black_box(tabs)
        })
    });
}

criterion_group!(benches, bench_apply_popular, bench_all_tabs);
criterion_main!(benches);
