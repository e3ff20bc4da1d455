use criterion::{black_box, criterion_group, criterion_main, Criterion};
use templex::GrammarConfig;

const SAMPLE: &str = include_str!("../data/sample.bnf");

fn bench_tokenize(c: &mut Criterion) {
    let config = GrammarConfig::default();
    let lexer = config.build_lexer().expect("default grammar compiles");
    let input = SAMPLE.repeat(200);

    c.bench_function("tokenize bnf x200", |b| {
        b.iter(|| lexer.tokenize_filtered(black_box(&input), &config.filter))
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
