use criterion::{criterion_group, criterion_main, Criterion};
use zearch_core::{insert_last, Occurrence};

fn bench_insert_last(c: &mut Criterion) {
    let sorted: Vec<Occurrence> = (0..1000)
        .map(|i| Occurrence {
            document: format!("doc{i}"),
            frequency: 2000 - i as u32,
        })
        .collect();
    c.bench_function("insert_last_1000", |b| {
        b.iter(|| {
            let mut occs = sorted.clone();
            occs.push(Occurrence {
                document: "new".into(),
                frequency: 1503,
            });
            insert_last(&mut occs)
        });
    });
}

criterion_group!(benches, bench_insert_last);
criterion_main!(benches);
