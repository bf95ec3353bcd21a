use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

// a config-shaped document, roughly 100KB of nested objects and arrays
fn build_input() -> String {
    let mut text = String::from("{\n");
    for i in 0..1000 {
        let sep = if i == 999 { "" } else { "," };
        text.push_str(&format!(
            r#"  "entry{i}": {{"name": "sensor {i}", "count": {i}, "ratio": {i}.5, "tags": [1, 2, 3]}}{sep}"#,
        ));
        text.push('\n');
    }
    text.push('}');
    text
}

fn bench_document(c: &mut Criterion) {
    let input = build_input();
    let root = jsondoc::from_str(&input).unwrap();

    c.bench_function("parse", |b| b.iter(|| jsondoc::from_str(black_box(&input))));
    c.bench_function("serialize", |b| b.iter(|| jsondoc::to_string(black_box(&root))));
}

criterion_group!(benches, bench_document);
// this creates the main() we need for this binary
criterion_main!(benches);
