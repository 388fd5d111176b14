use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use prime_maps::OpenHashMap;
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn bench_put(c: &mut Criterion) {
    c.bench_function("open_map_put_10k", |b| {
        let keys: Vec<_> = lcg(1).take(10_000).map(key).collect();
        b.iter_batched(
            OpenHashMap::<u64>::new,
            |mut m| {
                for (i, k) in keys.iter().enumerate() {
                    m.put(k.clone(), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("open_map_get_hit", |b| {
        let mut m = OpenHashMap::new();
        let keys: Vec<_> = lcg(7).take(20_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            m.put(k.clone(), i as u64);
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(m.get(k));
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("open_map_get_miss", |b| {
        let mut m = OpenHashMap::new();
        for (i, x) in lcg(11).take(10_000).enumerate() {
            m.put(key(x), i as u64);
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // keys from a disjoint stream, unlikely to be in the map
            let k = key(miss.next().unwrap());
            black_box(m.get(&k));
        })
    });
}

// Tombstone recycling: every iteration removes a key and reinserts one
// that probes through the fresh tombstone. Lookup cost under this load
// is the variant's weak spot, which is what makes it worth watching.
fn bench_tombstone_churn(c: &mut Criterion) {
    c.bench_function("open_map_tombstone_churn", |b| {
        let mut m = OpenHashMap::new();
        for (i, x) in lcg(13).take(5_000).enumerate() {
            m.put(key(x), i as u64);
        }
        let mut it = lcg(29);
        b.iter(|| {
            let k = key(it.next().unwrap());
            m.put(k.clone(), 1);
            m.remove(&k);
            black_box(m.contains_key(&k));
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_put, bench_get_hit, bench_get_miss, bench_tombstone_churn
}
criterion_main!(benches);
