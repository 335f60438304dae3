use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use stowage::entities::{Container, Item};
use stowage::search::ContainerSearch;
use stowage::util::SearchConfig;

criterion_main!(benches);
criterion_group!(benches, pack_bench, search_bench);

const N_ITEMS: [usize; 3] = [500, 1000, 5000];
const N_SEARCH_ITEMS: [usize; 3] = [5, 10, 20];

fn random_items(n_items: usize, rng: &mut SmallRng) -> Vec<Item> {
    (0..n_items)
        .map(|_| {
            let dims = [
                rng.random_range(14.0..22.0),
                rng.random_range(14.0..22.0),
                rng.random_range(14.0..22.0),
            ];
            Item::new(dims, rng.random_range(0.5..1.5))
        })
        .collect()
}

/// Benchmark packing a large number of similarly sized boxes into a container which needs several bins.
fn pack_bench(c: &mut Criterion) {
    let container = Container::new([200.0, 300.0, 400.0], 5000.0);

    let mut group = c.benchmark_group("pack");
    group.sample_size(10);
    for n_items in N_ITEMS {
        let mut rng = SmallRng::seed_from_u64(0);
        let items = random_items(n_items, &mut rng);

        group.throughput(criterion::Throughput::Elements(n_items as u64));
        group.bench_function(BenchmarkId::from_parameter(n_items), |b| {
            b.iter(|| stowage::pack(&container, &items).expect("valid input"))
        });
    }
    group.finish();
}

/// Benchmark the smallest-container search, candidate generation and validation included.
fn search_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("smallest_container");
    for n_items in N_SEARCH_ITEMS {
        let mut rng = SmallRng::seed_from_u64(0);
        let items = random_items(n_items, &mut rng);
        let search = ContainerSearch::new(&items, SearchConfig::default()).expect("valid input");

        group.bench_function(BenchmarkId::from_parameter(n_items), |b| {
            b.iter(|| search.smallest_container())
        });
    }
    group.finish();
}
