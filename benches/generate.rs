use criterion::{criterion_group, criterion_main, Criterion, black_box};

use terramesh::terrain::{attributes, Terrain, TerrainParams};

fn bench_generate_64(c: &mut Criterion) {
    let params = TerrainParams { div: 64, ..Default::default() };

    c.bench_function("terrain_generate_64", |b| {
        b.iter(|| Terrain::generate(black_box(&params)).unwrap());
    });
}

fn bench_generate_128(c: &mut Criterion) {
    let params = TerrainParams { div: 128, ..Default::default() };

    c.bench_function("terrain_generate_128", |b| {
        b.iter(|| Terrain::generate(black_box(&params)).unwrap());
    });
}

fn bench_generate_256(c: &mut Criterion) {
    let params = TerrainParams { div: 256, ..Default::default() };

    c.bench_function("terrain_generate_256", |b| {
        b.iter(|| Terrain::generate(black_box(&params)).unwrap());
    });
}

fn bench_vertex_normals_128(c: &mut Criterion) {
    let params = TerrainParams { div: 128, ..Default::default() };
    let terrain = Terrain::generate(&params).unwrap();

    c.bench_function("vertex_normals_128", |b| {
        b.iter(|| {
            attributes::vertex_normals(
                black_box(terrain.positions()),
                black_box(terrain.triangles()),
            )
            .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_generate_64,
    bench_generate_128,
    bench_generate_256,
    bench_vertex_normals_128
);
criterion_main!(benches);
