use criterion::{black_box, criterion_group, criterion_main, Criterion};

use colorforge::{Category, Rgb};

const SAMPLES: [Rgb; 6] = [
    Rgb::new(255.0, 0.0, 0.0),
    Rgb::new(218.0, 165.0, 32.0),
    Rgb::new(0.0, 128.0, 128.0),
    Rgb::new(112.0, 128.0, 144.0),
    Rgb::new(255.0, 255.0, 255.0),
    Rgb::new(0.0, 0.0, 0.0),
];

fn convert(c: &mut Criterion) {
    c.bench_function("rgb_to_hsl", |b| {
        b.iter(|| {
            for color in SAMPLES {
                black_box(black_box(color).to_hsl());
            }
        })
    });

    c.bench_function("rgb_to_lab", |b| {
        b.iter(|| {
            for color in SAMPLES {
                black_box(black_box(color).to_lab());
            }
        })
    });

    c.bench_function("categorize", |b| {
        b.iter(|| {
            for color in SAMPLES {
                black_box(Category::of_rgb(black_box(&color)));
            }
        })
    });

    c.bench_function("parse_hex", |b| {
        b.iter(|| black_box(Rgb::from_hex(black_box("#daa520"))))
    });
}

criterion_group!(benches, convert);
criterion_main!(benches);
