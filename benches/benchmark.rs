// Build and query benchmarks on a synthetic catalog
use animerec::{FeatureEncoder, RawRecord, Recommender, RecommenderConfig, SimilarityMatrix};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

const GENRES: [&str; 8] = [
    "Action", "Comedy", "Drama", "Romance", "Sci-Fi", "Shounen", "Slice of Life", "Sports",
];
const TYPES: [&str; 5] = ["TV", "Movie", "OVA", "Special", "ONA"];
const WORDS: [&str; 10] = [
    "sword", "academy", "love", "star", "hero", "night", "dragon", "school", "summer", "ghost",
];

fn generate_catalog(size: usize) -> Vec<RawRecord> {
    let mut rng = rand::rng();
    (0..size)
        .map(|i| {
            let genre: Vec<&str> = GENRES.iter().copied().filter(|_| rng.random_bool(0.25)).collect();
            let name: Vec<&str> = (0..rng.random_range(1..4))
                .map(|_| WORDS[rng.random_range(0..WORDS.len())])
                .collect();
            RawRecord::new(
                i as i64,
                name.join(" "),
                genre.join(","),
                TYPES[rng.random_range(0..TYPES.len())],
            )
            .with_episodes(rng.random_range(1..500) as f64)
            .with_rating(rng.random_range(1.0..10.0))
            .with_members(rng.random_range(10..1_000_000) as f64)
        })
        .collect()
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.sample_size(10);

    for size in [100, 1000, 3000].iter() {
        let records = generate_catalog(*size);
        group.bench_with_input(BenchmarkId::new("encode", size), &records, |b, records| {
            b.iter(|| {
                let encoder = FeatureEncoder::fit(black_box(records)).unwrap();
                black_box(encoder.encode_all(records, true));
            });
        });

        let encoder = FeatureEncoder::fit(&records).unwrap();
        let vectors = encoder.encode_all(&records, true);
        group.bench_with_input(BenchmarkId::new("similarity", size), &vectors, |b, vectors| {
            b.iter(|| black_box(SimilarityMatrix::build(black_box(vectors), true).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    let recommender =
        Recommender::from_records(generate_catalog(3000), RecommenderConfig::default()).unwrap();

    group.bench_function("top_5", |b| {
        let mut id = 0i64;
        b.iter(|| {
            id = (id + 7) % 3000;
            black_box(recommender.recommend(black_box(id), 5).unwrap());
        });
    });

    group.bench_function("list_filtered", |b| {
        b.iter(|| black_box(recommender.list(black_box("dragon"), 1, 10).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_recommend);
criterion_main!(benches);
