use criterion::{black_box, criterion_group, criterion_main, Criterion};
use search_core::{CorpusIndex, Session, StopWords};

fn synthetic_corpus(num_docs: usize) -> Vec<(String, String)> {
    const WORDS: &[&str] = &[
        "more", "grad", "rijeka", "planina", "otok", "luka", "brod", "sunce", "kiša", "šuma",
        "polje", "cesta", "most", "crkva", "trg", "škola", "vlak", "zrak", "čamac", "đak",
    ];
    (0..num_docs)
        .map(|d| {
            let text = (0..200)
                .map(|i| WORDS[(d * 7 + i * 13 + i / 3) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ");
            (format!("doc{d:05}.txt"), text)
        })
        .collect()
}

fn bench_query(c: &mut Criterion) {
    let index = CorpusIndex::from_texts(synthetic_corpus(1_000), StopWords::new());
    let mut session = Session::from_index(index);
    c.bench_function("query_1k_docs", |b| {
        b.iter(|| session.query(black_box("more brod šuma")).len())
    });
}

criterion_group!(benches, bench_query);
criterion_main!(benches);
