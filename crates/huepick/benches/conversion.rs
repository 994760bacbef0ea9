use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huepick::pointer::{hue_at, saturation_brightness_at, Orientation, Point, Rect, Size};
use huepick::{parse_color, Color, ColorData};

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("color-model");

    group.bench_function("parse-hex", |b| {
        b.iter(|| Color::from_input(black_box("#3399FF")))
    });

    group.bench_function("parse-hsla", |b| {
        b.iter(|| Color::from_input(black_box("hsla(210, 100%, 60%, 0.5)")))
    });

    group.bench_function("set-hue", |b| {
        let mut color = Color::from_input("#3399FF");
        b.iter(|| color.set_hue(black_box(120.0)))
    });

    group.bench_function("parse-color", |b| {
        let data = ColorData::from_input("#3399FF");
        b.iter(|| parse_color(black_box(&data), Some(210.0)))
    });

    group.finish();

    let mut group = c.benchmark_group("pointer");
    let bounds = Rect::new(0.0, 0.0, 370.0, 200.0);
    let handle = Size::new(10.0, 10.0);

    group.bench_function("hue-at", |b| {
        b.iter(|| hue_at(&bounds, handle, black_box(Point::new(125.0, 5.0)), Orientation::Horizontal))
    });

    group.bench_function("saturation-brightness-at", |b| {
        b.iter(|| saturation_brightness_at(&bounds, black_box(Point::new(125.0, 55.0))))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
