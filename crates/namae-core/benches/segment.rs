use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use namae_core::alias::derive_aliases;
use namae_core::lexicon::LexiconIndex;
use namae_core::segment::segment;

fn bench_lexicon() -> LexiconIndex {
    let surnames = [
        "綾瀬", "山田", "長谷", "長谷川", "佐々木", "東海林", "田中", "高橋", "小鳥遊", "東",
    ];
    let given = [
        "桃", "太郎", "川桃子", "桃子", "希", "花子", "海林太郎", "一", "健太", "六花",
    ];
    LexiconIndex::from_sets(surnames, given).expect("bench lexicon")
}

fn bench_segment(c: &mut Criterion) {
    let lex = bench_lexicon();
    let mut group = c.benchmark_group("segment");
    for name in ["綾瀬桃", "長谷川桃子", "小鳥遊六花", "東海林太郎", "田中一二三四五"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), name, |b, name| {
            b.iter(|| segment(name, &lex));
        });
    }
    group.finish();
}

fn bench_aliases(c: &mut Criterion) {
    let lex = bench_lexicon();
    c.bench_function("derive_aliases/segmented", |b| {
        b.iter(|| derive_aliases("綾瀬桃", "Momo Ayase", Some(&lex)));
    });
    c.bench_function("derive_aliases/separated", |b| {
        b.iter(|| derive_aliases("山田 太郎", "Taro Yamada", Some(&lex)));
    });
}

criterion_group!(benches, bench_segment, bench_aliases);
criterion_main!(benches);
