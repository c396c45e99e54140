//! Benchmarks for density sampling and cell meshing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use planet_terrain::{Grid, GroundPlane, Sphere};

/// Benchmark the full visit path (neighbor resolution + fill + extraction)
/// on a cold grid.
fn bench_visit_cold(c: &mut Criterion) {
  c.bench_function("grid::visit (cold root, sphere)", |b| {
    b.iter(|| {
      let mut grid = Grid::new(Sphere::new(0.5), 0).unwrap();
      let root = grid.root();
      black_box(grid.visit(root))
    })
  });
}

/// Benchmark extraction alone: all density buffers are already filled, so
/// repeated visits measure the table-driven mesher.
fn bench_visit_warm(c: &mut Criterion) {
  let mut group = c.benchmark_group("visit_warm");

  for radius in [0.3, 0.5, 0.8] {
    let mut grid = Grid::new(Sphere::new(radius), 0).unwrap();
    let root = grid.root();
    grid.visit(root); // warm the buffers

    group.bench_with_input(
      BenchmarkId::new("sphere", format!("r={}", radius)),
      &radius,
      |b, _| b.iter(|| black_box(grid.visit(root))),
    );
  }

  let mut grid = Grid::new(GroundPlane::new(0.0), 0).unwrap();
  let root = grid.root();
  grid.visit(root);
  group.bench_function("ground_plane", |b| b.iter(|| black_box(grid.visit(root))));

  group.finish();
}

/// Benchmark rayon-parallel density sampling of a single cell.
fn bench_fill(c: &mut Criterion) {
  let mut grid = Grid::new(Sphere::new(0.5), 0).unwrap();
  let root = grid.root();

  c.bench_function("grid::fill_cell (16³ sphere)", |b| {
    b.iter(|| {
      grid.fill_cell(black_box(root));
    })
  });
}

/// Benchmark meshing a refined cell, where the 3×3×3 neighborhood spans
/// real sibling buffers instead of the air substitute.
fn bench_visit_subdivided(c: &mut Criterion) {
  let mut grid = Grid::new(Sphere::new(0.5), 2).unwrap();
  let root = grid.root();
  grid.subdivide_to_depth(root, 2);
  let cell = grid.find_cell_or_closest(&[0, 7]);
  grid.visit(cell); // warm the neighborhood

  c.bench_function("grid::visit (depth-2 cell, sphere)", |b| {
    b.iter(|| black_box(grid.visit(cell)))
  });
}

criterion_group!(
  benches,
  bench_visit_cold,
  bench_visit_warm,
  bench_fill,
  bench_visit_subdivided
);
criterion_main!(benches);
