// Criterion benchmarks for decompound-de.
//
// Builds the dictionaries from the fixture word list in tests/data, so no
// external artifact is needed.
//
// Run:
//   cargo bench -p decompound-de

use std::hint::black_box;
use std::path::PathBuf;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use decompound_de::{CompoundDictionaries, Segmenter};

const WORDS: &[&str] = &[
    "bewegungsachse",
    "anwendungsprogrammschnittstelle",
    "hundehütte",
    "wachstube",
    "tageszeitung",
    "kindergarten",
    "schweinerei",
    "katzenklo",
];

fn word_list_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/words.txt")
}

fn load_dictionaries() -> CompoundDictionaries {
    let file = std::fs::File::open(word_list_path()).expect("failed to open words.txt");
    CompoundDictionaries::from_word_list(std::io::BufReader::new(file))
        .expect("failed to compile words.txt")
}

fn bench_split_words(c: &mut Criterion) {
    let mut segmenter = Segmenter::new(Arc::new(load_dictionaries()));
    c.bench_function("split_words", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(segmenter.split(black_box(word)));
            }
        })
    });
}

fn bench_split_long_word(c: &mut Criterion) {
    let mut segmenter = Segmenter::new(Arc::new(load_dictionaries()));
    let word = "bewegungsachse".repeat(12);
    c.bench_function("split_long_word", |b| {
        b.iter(|| black_box(segmenter.split(black_box(&word))))
    });
}

fn bench_compile(c: &mut Criterion) {
    let text = std::fs::read_to_string(word_list_path()).expect("failed to read words.txt");
    c.bench_function("compile_word_list", |b| {
        b.iter(|| CompoundDictionaries::from_word_list(black_box(text.as_bytes())))
    });
}

criterion_group!(benches, bench_split_words, bench_split_long_word, bench_compile);
criterion_main!(benches);
