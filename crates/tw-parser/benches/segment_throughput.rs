//! Benchmarks for tw-parser.
//!
//! Run with: cargo bench -p tw-parser

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tw_parser::{find_language_in_string, IdentityConfig, Segmenter};

const RELEASE_SAMPLES: &[&str] = &[
    "Inception.2010.1080p.BluRay.x264-GROUP.mkv",
    "Tatort_12.11.17_20-15_ard_90_TVOON_DE.mpg.HQ.avi",
    "Movie.Name.1920x1080.WEB-DL.DD5.1.H.264.mkv",
    "Heat.1995.Extended.Remastered.tt0113277.mkv",
    "Avatar.2009.tmdb-19995.German.DL.1080p.mkv",
];

const FOLDER_SAMPLES: &[&str] = &[
    "The Matrix (1999)",
    "Pulp Fiction (1994)",
    "Movie Title [1080p] [2010]",
    "Avatar (2009) {tmdb-19995}",
    "2001 A Space Odyssey (1968)",
];

fn segmenter() -> Segmenter {
    Segmenter::new(IdentityConfig::builder().reference_year(2026).build())
}

fn bench_segment_single(c: &mut Criterion) {
    let segmenter = segmenter();
    let mut group = c.benchmark_group("segment_single");

    group.bench_function("release_name", |b| {
        b.iter(|| segmenter.segment(black_box("Inception.2010.1080p.BluRay.x264-GROUP.mkv")))
    });

    group.bench_function("folder_name", |b| {
        b.iter(|| segmenter.segment(black_box("The Matrix (1999)")))
    });

    group.finish();
}

fn bench_segment_batch(c: &mut Criterion) {
    let segmenter = segmenter();
    let mut group = c.benchmark_group("segment_batch");

    for (name, samples) in [("releases", RELEASE_SAMPLES), ("folders", FOLDER_SAMPLES)] {
        group.throughput(Throughput::Elements(samples.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), samples, |b, samples| {
            b.iter(|| {
                for input in samples.iter() {
                    black_box(segmenter.segment(black_box(input)));
                }
            })
        });
    }

    group.finish();
}

fn bench_pick_cleanest(c: &mut Criterion) {
    let segmenter = segmenter();
    let candidates = [
        "The.Matrix.1999.1080p.BluRay.x264-GROUP.mkv",
        "The Matrix (1999)",
        "Matrix, The",
    ];

    c.bench_function("pick_cleanest", |b| {
        b.iter(|| segmenter.pick_cleanest(black_box(&candidates)))
    });
}

fn bench_language(c: &mut Criterion) {
    // First call builds the alias table.
    find_language_in_string("warmup.de");

    c.bench_function("find_language_in_string", |b| {
        b.iter(|| find_language_in_string(black_box("Some.Movie.2010.German")))
    });
}

fn bench_strip_tv_stopwords(c: &mut Criterion) {
    let segmenter = segmenter();

    c.bench_function("strip_tv_stopwords", |b| {
        b.iter(|| {
            segmenter.strip_tv_stopwords(black_box(
                "Show.Name.S01E02.720p.HDTV.x264-GRP.mkv",
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_segment_single,
    bench_segment_batch,
    bench_pick_cleanest,
    bench_language,
    bench_strip_tv_stopwords
);
criterion_main!(benches);
