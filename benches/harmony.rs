use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, Rgb, RgbImage};
use outfit_harmony::image_loader::average_color;
use outfit_harmony::{ColorConverter, HarmonyScorer, HsvColor, SamplingConfig};

fn benchmark_conversion(c: &mut Criterion) {
    let converter = ColorConverter::new();
    c.bench_function("rgb_to_hsv", |b| {
        b.iter(|| converter.rgb_to_hsv(black_box(31.0), black_box(58.0), black_box(95.0)))
    });
}

fn benchmark_scoring(c: &mut Criterion) {
    let scorer = HarmonyScorer::new();
    let colors = [
        HsvColor::new(214.7, 0.67, 0.37),
        HsvColor::new(37.2, 0.26, 0.76),
        HsvColor::new(60.0, 0.02, 0.94),
    ];
    c.bench_function("harmony_evaluate", |b| {
        b.iter(|| scorer.evaluate(black_box(&colors)))
    });
}

fn benchmark_sampling(c: &mut Criterion) {
    let photo = DynamicImage::ImageRgb8(RgbImage::from_fn(1200, 1600, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }));
    let config = SamplingConfig::default();
    c.bench_function("average_color_1200x1600", |b| {
        b.iter(|| average_color(black_box(&photo), &config))
    });
}

criterion_group!(benches, benchmark_conversion, benchmark_scoring, benchmark_sampling);
criterion_main!(benches);
