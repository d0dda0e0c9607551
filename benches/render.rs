#[macro_use]
extern crate criterion;
extern crate mandelbrot;
extern crate num_cpus;

use criterion::Criterion;
use mandelbrot::{MandelbrotRenderer, RenderConfig};

fn renderer(threads: usize) -> MandelbrotRenderer {
    MandelbrotRenderer::new(RenderConfig {
        width: 256,
        height: 256,
        limit: 256,
        threads: Some(threads),
        ..RenderConfig::default()
    })
    .unwrap()
}

fn bench_single(c: &mut Criterion) {
    let r = renderer(1);
    c.bench_function("render 256x256 single", move |b| b.iter(|| r.render_single()));
}

fn bench_threaded(c: &mut Criterion) {
    let r = renderer(num_cpus::get());
    c.bench_function("render 256x256 threaded", move |b| b.iter(|| r.render().unwrap()));
}

criterion_group!(benches, bench_single, bench_threaded);
criterion_main!(benches);
