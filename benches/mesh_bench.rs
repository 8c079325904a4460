use astroview::animation::Pose;
use astroview::mesh::{cylinder_with_caps, sphere};
use astroview::scene::{compose, SceneObjects};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sphere_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere");

    for segments in [16u32, 64, 256].iter() {
        group.bench_function(format!("{segments}_segments"), |b| {
            b.iter(|| black_box(sphere(1.0, *segments, *segments / 2)))
        });
    }
    group.finish();
}

fn wireframe_benchmark(c: &mut Criterion) {
    let mesh = cylinder_with_caps(1.0, 2.0, 128).unwrap();
    c.bench_function("capped_cylinder_wireframe", |b| {
        b.iter(|| black_box(mesh.wireframe_indices()))
    });
}

fn compose_benchmark(c: &mut Criterion) {
    let objects = SceneObjects::standard().unwrap();
    c.bench_function("compose_scene", |b| {
        b.iter(|| black_box(compose(&objects, &Pose::at(black_box(17), 100))))
    });
}

criterion_group!(benches, sphere_benchmark, wireframe_benchmark, compose_benchmark);
criterion_main!(benches);
