//! Filter benchmarks for testshape
//!
//! Run with: cargo bench --bench filter_benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use testshape::filter::{TestShapeFilter, VideoInfo};
use testshape::frame::VideoFrame;
use testshape::shape::{draw, ShapeKind, ShapeSettings};
use testshape::swscale::FormatConverter;
use testshape::util::PixelFormat;

const WIDTH: u32 = 1920;
const HEIGHT: u32 = 1080;

/// Benchmark outline rasterization per shape on a 1080p frame
fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes_1080p");
    let info = VideoInfo::nv12(WIDTH, HEIGHT);

    group.throughput(Throughput::Elements(1));
    for shape in ShapeKind::ALL {
        let settings = ShapeSettings {
            shape,
            ..ShapeSettings::default()
        };
        let mut frame = VideoFrame::new_nv12(WIDTH, HEIGHT);
        group.bench_function(shape.name(), |b| {
            b.iter(|| {
                let mut map = frame.map_writable(&info).unwrap();
                black_box(draw(&mut map, black_box(&settings)))
            })
        });
    }

    group.finish();
}

/// Benchmark the full per-frame path through the filter
fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");

    group.throughput(Throughput::Elements(1));
    let mut filter = TestShapeFilter::new();
    filter.set_caps(&VideoInfo::nv12(WIDTH, HEIGHT)).unwrap();
    let mut frame = Some(VideoFrame::new_nv12(WIDTH, HEIGHT));
    group.bench_function("square_1080p", |b| {
        b.iter(|| {
            if let Some(input) = frame.take() {
                frame = Some(filter.chain(black_box(input)));
            }
        })
    });

    group.finish();
}

/// Benchmark I420 <-> NV12 conversion
fn bench_colorspace(c: &mut Criterion) {
    let mut group = c.benchmark_group("colorspace");

    group.throughput(Throughput::Bytes((WIDTH * HEIGHT * 3 / 2) as u64));
    let to_i420 = FormatConverter::new(WIDTH, HEIGHT, PixelFormat::NV12, PixelFormat::YUV420P).unwrap();
    let to_nv12 = FormatConverter::new(WIDTH, HEIGHT, PixelFormat::YUV420P, PixelFormat::NV12).unwrap();
    let nv12 = VideoFrame::new_nv12(WIDTH, HEIGHT);
    let i420 = to_i420.convert(&nv12).unwrap();

    group.bench_function("nv12_to_i420", |b| b.iter(|| to_i420.convert(black_box(&nv12)).unwrap()));
    group.bench_function("i420_to_nv12", |b| b.iter(|| to_nv12.convert(black_box(&i420)).unwrap()));

    group.finish();
}

criterion_group!(benches, bench_shapes, bench_chain, bench_colorspace);

criterion_main!(benches);
