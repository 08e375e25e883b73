use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geoview_core::{GeoDataLoader, HttpResponse, Page, PageConfig, PageOrigin};
use serde_json::{json, Value};

fn synthetic_collection(n: usize) -> String {
    let features: Vec<Value> = (0..n)
        .map(|i| {
            let (kind, coords) = if i % 2 == 0 {
                ("Point", json!([i as f64 * 0.1, i as f64 * -0.1]))
            } else {
                let line: Vec<[f64; 2]> = (0..40).map(|j| [j as f64, i as f64]).collect();
                ("LineString", json!(line))
            };
            json!({
                "type": "Feature",
                "properties": {
                    "NAME": format!("City {i}"),
                    "ADM0_NAME": "Somewhere",
                    "POP_MAX": 1_000 * i as i64
                },
                "geometry": {"type": kind, "coordinates": coords}
            })
        })
        .collect();
    json!({"type": "FeatureCollection", "features": features}).to_string()
}

fn bench_render(c: &mut Criterion) {
    let body = synthetic_collection(1_000);

    c.bench_function("load 1000 features", |b| {
        b.iter(|| {
            let config = PageConfig::default();
            let mut page = Page::new(&config.container_id);
            let mut loader = GeoDataLoader::new(config, PageOrigin::Network("http".into()));
            loader.start(&mut page).unwrap();
            loader
                .finish(&mut page, Ok(HttpResponse::ok(body.clone())))
                .unwrap();
            black_box(page.to_html().len())
        })
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
