//! Microbenchmarks isolating the distance pipeline: prefilter-dominated
//! scans, engine-dominated scans, and one-time construction.

use criterion::{Criterion, criterion_group, criterion_main};

use typodist::{EditDistance, best_match};

const WORDS: &[&str] = &[
    "absence",
    "accommodate",
    "achieve",
    "acquire",
    "address",
    "argument",
    "believe",
    "business",
    "calendar",
    "cemetery",
    "committee",
    "conscience",
    "definite",
    "discipline",
    "embarrass",
    "environment",
    "existence",
    "experience",
    "foreign",
    "government",
    "grammar",
    "guarantee",
    "harass",
    "independent",
    "knowledge",
    "library",
    "maintenance",
    "necessary",
    "occasion",
    "occurrence",
    "parliament",
    "privilege",
    "receive",
    "recommend",
    "restaurant",
    "rhythm",
    "separate",
    "successful",
    "vacuum",
    "weird",
];

fn bench_distance(c: &mut Criterion) {
    // Tight bound: almost every candidate dies in the prefilters.
    c.bench_function("scan_tight_bound", |b| {
        let ed = EditDistance::new("recieve");
        b.iter(|| {
            let mut hits = 0u64;
            for word in WORDS {
                if ed.distance(word, 1) <= 1 {
                    hits += 1;
                }
            }
            hits
        });
    });

    // Loose bound: most candidates survive into the banded engine.
    c.bench_function("scan_loose_bound", |b| {
        let ed = EditDistance::new("recieve");
        b.iter(|| {
            let mut hits = 0u64;
            for word in WORDS {
                if ed.distance(word, 6) <= 6 {
                    hits += 1;
                }
            }
            hits
        });
    });

    // Worst shape for the engine: long strings, no early rejection.
    c.bench_function("long_near_miss", |b| {
        let ed = EditDistance::new("internationalization");
        b.iter(|| ed.distance("internationalisation", 3));
    });

    c.bench_function("construction", |b| {
        b.iter(|| EditDistance::new("internationalization"));
    });

    c.bench_function("best_match_scan", |b| {
        b.iter(|| best_match("goverment", WORDS.iter().copied(), 2));
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(60);
    targets = bench_distance
);
criterion_main!(benches);
