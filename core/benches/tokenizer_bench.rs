use criterion::{criterion_group, criterion_main, Criterion};
use search_core::{tokenize, StopWords};

const TEXT: &str = "Zagreb je glavni i najveći grad Republike Hrvatske. \
    Smješten je na jugozapadnom rubu Panonske nizine, na južnim obroncima Medvednice \
    i na obalama rijeke Save. Grad je političko, gospodarsko i kulturno središte zemlje, \
    a u njemu živi gotovo četvrtina stanovništva.";

fn bench_tokenize(c: &mut Criterion) {
    let stop: StopWords = ["i", "je", "na", "a", "u"].into_iter().collect();
    let text = TEXT.repeat(50);
    c.bench_function("tokenize_paragraphs", |b| b.iter(|| tokenize(&text, &stop)));
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
