use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use crosshair_sharecode::crosshair_common_rs::sharecode::core::checksum::{calc_checksum8, verify_checksum8};
use crosshair_sharecode::prelude::*;

fn sample_config() -> CrosshairConfig {
    CrosshairConfig {
        style: Style(1),
        size: Size(3.0),
        gap: Gap(-2),
        thickness: Thickness(0.5),
        outline_enabled: true,
        dot_enabled: false,
        color: Color::new(255, 0, 0),
        alpha: Alpha(128.0),
    }
}

fn benchmark_encode(c: &mut Criterion) {
    let config = sample_config();
    c.bench_function("sharecode_encode", |b| {
        b.iter(|| black_box(encode(black_box(&config))))
    });
}

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("sharecode_decode");

    // 正規形・区切りなし・小文字
    for input in ["2C58-ZW22-327A", "2C58ZW22327A", "2c58-zw22-327a"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| black_box(decode(black_box(input))))
        });
    }

    group.finish();
}

fn benchmark_decode_rejections(c: &mut Criterion) {
    let mut group = c.benchmark_group("sharecode_reject");
    for (name, input) in [
        ("length", "2C58-ZW22-327"),
        ("character", "2C58-ZW22-32OA"),
        ("checksum", "2C58-ZW23-327A"),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| black_box(decode(black_box(input))))
        });
    }
    group.finish();
}

fn benchmark_checksum(c: &mut Criterion) {
    let payload = [0x28, 0x66, 0xFF, 0x00, 0x00, 0x80];
    let frame = [0x28, 0x66, 0xFF, 0x00, 0x00, 0x80, 0xA8];

    c.bench_function("calc_checksum8", |b| {
        b.iter(|| black_box(calc_checksum8(black_box(&payload))))
    });
    c.bench_function("verify_checksum8", |b| {
        b.iter(|| black_box(verify_checksum8(black_box(&frame))))
    });
}

fn benchmark_bulk_round_trip(c: &mut Criterion) {
    let configs: Vec<CrosshairConfig> = (0..256u32)
        .map(|i| CrosshairConfig {
            style: Style((i % 6) as u8),
            gap: Gap((i % 11) as i8 - 5),
            color: Color::new(i as u8, (i * 7) as u8, (i * 13) as u8),
            alpha: Alpha(f64::from(i as u8)),
            ..sample_config()
        })
        .collect();

    c.bench_function("bulk_round_trip_256", |b| {
        b.iter(|| {
            for config in &configs {
                if let Ok(code) = encode(config) {
                    black_box(decode(&code).ok());
                }
            }
        })
    });
}

criterion_group!(
    benches,
    benchmark_encode,
    benchmark_decode,
    benchmark_decode_rejections,
    benchmark_checksum,
    benchmark_bulk_round_trip
);

criterion_main!(benches);
