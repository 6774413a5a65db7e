use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fieldmask_filter::{FilterConfig, FilterOptions};
use serde_json::{json, Value};

fn build_tree(width: usize, depth: usize) -> Value {
    if depth == 0 {
        return json!("leaf");
    }
    let mut map = serde_json::Map::new();
    for i in 0..width {
        map.insert(format!("field{}", i), build_tree(width, depth - 1));
    }
    Value::Object(map)
}

fn bench_config_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("config_construction");

    let selectors = [
        ("flat", "a, b, c, d, e"),
        ("nested", "a(b(c, d), e.f), g(h, i(j, k))"),
        ("wildcards", "a(*, b.c), d(e(*)), f(*, g, h.i.j)"),
    ];

    for (label, selector) in selectors {
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &selector,
            |b, selector| {
                b.iter(|| {
                    let config = FilterConfig::new(&FilterOptions {
                        include: Some(selector.to_string()),
                        exclude: Some(selector.to_string()),
                        explicit_fields: vec!["a.b".to_string(), "d.e".to_string()],
                    })
                    .unwrap();
                    black_box(config);
                });
            },
        );
    }

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");

    for (width, depth) in [(10, 3), (30, 3), (10, 5)] {
        let tree = build_tree(width, depth);
        let config = FilterConfig::new(&FilterOptions {
            include: Some("field0, field1(field0, field1.field2), field2(*)".to_string()),
            exclude: Some("field1.field1.field2".to_string()),
            explicit_fields: vec!["field0.field3".to_string()],
        })
        .unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}w_{}d", width, depth)),
            &tree,
            |b, tree| {
                b.iter(|| black_box(config.apply(black_box(tree))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_config_construction, bench_apply);
criterion_main!(benches);
