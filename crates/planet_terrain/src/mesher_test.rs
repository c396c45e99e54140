use std::collections::HashMap;

use super::*;
use crate::constants::{sample_index, FIELD_LEN};
use crate::field::{Constant, Sphere};
use crate::grid::Grid;

/// Every directed triangle edge must be matched by its reverse: adjacent
/// voxels triangulate their shared face identically, so the surface around
/// any fully-sampled region is closed.
fn assert_watertight(mesh: &CellMesh) {
  let quantize = |v: &[f32; 3]| {
    [
      (v[0] as f64 * 1e6).round() as i64,
      (v[1] as f64 * 1e6).round() as i64,
      (v[2] as f64 * 1e6).round() as i64,
    ]
  };
  let mut counts: HashMap<([i64; 3], [i64; 3]), i64> = HashMap::new();
  for triangle in mesh.positions.chunks_exact(3) {
    let (a, b, c) = (
      quantize(&triangle[0]),
      quantize(&triangle[1]),
      quantize(&triangle[2]),
    );
    if a == b || b == c || a == c {
      continue; // collapsed by an exact lattice crossing
    }
    for (u, v) in [(a, b), (b, c), (c, a)] {
      *counts.entry((u, v)).or_insert(0) += 1;
    }
  }
  for (&(u, v), &n) in &counts {
    assert_eq!(
      counts.get(&(v, u)).copied().unwrap_or(0),
      n,
      "unmatched directed edge {u:?} -> {v:?}"
    );
  }
}

#[test]
fn test_centre_cell_is_slot_thirteen() {
  assert_eq!(neighborhood_slot(0, 0, 0), 13);
  assert_eq!(neighborhood_slot(-1, -1, -1), 0);
  assert_eq!(neighborhood_slot(1, 1, 1), 26);
}

#[test]
fn test_extended_coordinates_resolve_to_neighbor_buffers() {
  // Inside the cell
  assert_eq!(voxel_indices(0, 0, 0), (13, 0));
  assert_eq!(voxel_indices(5, 3, 9), (13, sample_index(5, 3, 9)));

  // One step past the low x face wraps to the -x neighbor's last column
  assert_eq!(voxel_indices(-1, 0, 0), (12, sample_index(15, 0, 0)));
  // One step past the high x face is the +x neighbor's first column
  assert_eq!(voxel_indices(16, 0, 0), (14, 0));

  // Corners of the extended space
  assert_eq!(
    voxel_indices(0, -16, 31),
    (neighborhood_slot(0, -1, 1), sample_index(0, 0, 15))
  );
  assert_eq!(
    voxel_indices(-16, -16, -16),
    (0, sample_index(0, 0, 0))
  );
  assert_eq!(
    voxel_indices(31, 31, 31),
    (26, sample_index(15, 15, 15))
  );
}

#[test]
fn test_homogeneous_fields_mesh_to_nothing() {
  let mut air = Grid::new(Constant(1.0), 0).unwrap();
  let root = air.root();
  assert!(air.visit(root).is_empty());

  let mut ground = Grid::new(Constant(-1.0), 0).unwrap();
  let root = ground.root();
  let mesh = ground.visit(root);
  assert!(mesh.is_empty());
  assert_eq!(mesh.triangle_count(), 0);
}

#[test]
fn test_sphere_meshes_to_a_sphere() {
  // The root spans world [-1, 1)³, so a world-space radius of 0.5 shows up
  // at 0.25 in the cell-local output; double the local radii to compare.
  let mut grid = Grid::new(Sphere::new(0.5), 0).unwrap();
  let root = grid.root();
  let mesh = grid.visit(root);

  assert!(!mesh.is_empty());
  assert_eq!(mesh.positions.len(), mesh.normals.len());
  assert_eq!(mesh.positions.len(), mesh.indices.len());
  assert_eq!(mesh.indices.len() % 3, 0);

  let mut radius_sum = 0.0f64;
  for position in &mesh.positions {
    let [x, y, z] = position.map(f64::from);
    assert!(x.abs() <= 0.5 && y.abs() <= 0.5 && z.abs() <= 0.5);
    radius_sum += (x * x + y * y + z * z).sqrt() * 2.0;
  }
  let mean_radius = radius_sum / mesh.positions.len() as f64;
  assert!(
    (mean_radius - 0.5).abs() < 0.05,
    "mean world radius {mean_radius}"
  );
}

#[test]
fn test_sphere_normals_are_unit_and_outward() {
  let mut grid = Grid::new(Sphere::new(0.5), 0).unwrap();
  let root = grid.root();
  let mesh = grid.visit(root);

  for (position, normal) in mesh.positions.iter().zip(&mesh.normals) {
    let [px, py, pz] = position.map(f64::from);
    let [nx, ny, nz] = normal.map(f64::from);

    let length = (nx * nx + ny * ny + nz * nz).sqrt();
    assert!((length - 1.0).abs() < 0.01, "normal length {length}");

    // Density grows away from the centre, so normals must point outward.
    let outward = px * nx + py * ny + pz * nz;
    assert!(outward > 0.0, "normal points inward at {position:?}");
  }
}

#[test]
fn test_indices_are_an_identity_soup() {
  let mut grid = Grid::new(Sphere::new(0.5), 0).unwrap();
  let root = grid.root();
  let mesh = grid.visit(root);

  for (slot, &index) in mesh.indices.iter().enumerate() {
    assert_eq!(index as usize, slot);
  }
}

#[test]
fn test_visit_is_deterministic() {
  let mut grid = Grid::new(Sphere::new(0.5), 0).unwrap();
  let root = grid.root();
  let first = grid.visit(root);
  let second = grid.visit(root);
  assert_eq!(first, second);
}

#[test]
fn test_visiting_a_child_cell_stays_in_local_bounds() {
  let mut grid = Grid::new(Sphere::new(0.5), 2).unwrap();
  let root = grid.root();
  grid.subdivide(root).unwrap();

  // Child A covers world [-1, 0)³; the sphere's surface passes through it.
  let child = grid.find_cell_or_closest(&[0]);
  let mesh = grid.visit(child);
  assert!(!mesh.is_empty());
  for position in &mesh.positions {
    for coordinate in position {
      assert!(coordinate.abs() <= 0.5);
    }
  }
}

#[test]
fn test_sphere_mesh_is_watertight() {
  let mut grid = Grid::new(Sphere::new(0.5), 0).unwrap();
  let root = grid.root();
  assert_watertight(&grid.visit(root));
}

#[test]
fn test_every_ground_pattern_meshes_a_closed_surface() {
  // Exhaustive face-consistency check of the triangulation tables: every
  // sign assignment of a 3x2x2 lattice block, surrounded by air, must mesh
  // to a closed surface. Two adjacent voxels disagreeing about their shared
  // face would leave unmatched edges here.
  static AIR: FieldBuffer = [1.0; FIELD_LEN];

  for pattern in 0u32..4096 {
    let mut field: FieldBuffer = [1.0; FIELD_LEN];
    let mut bit = 0;
    for x in 6..9 {
      for y in 6..8 {
        for z in 6..8 {
          if (pattern >> bit) & 1 == 1 {
            field[sample_index(x, y, z)] = -1.0;
          }
          bit += 1;
        }
      }
    }

    let fields: [&FieldBuffer; 27] =
      std::array::from_fn(|slot| if slot == 13 { &field } else { &AIR });
    let mesh = extract(&Neighborhood::new(fields));
    assert_watertight(&mesh);
  }
}

#[test]
fn test_plane_mesh_is_flat_with_vertical_normals() {
  // y = 0 is exactly a lattice plane of the root cell, so interior vertices
  // land on it with straight-up normals. Near the +x/+z cell faces the air
  // substitute closes the ground off with vertical walls, so only the
  // interior is checked.
  let mut grid = Grid::new(crate::field::GroundPlane::new(0.0), 0).unwrap();
  let root = grid.root();
  let mesh = grid.visit(root);

  assert!(!mesh.is_empty());
  let mut interior = 0;
  for (position, normal) in mesh.positions.iter().zip(&mesh.normals) {
    if position[0].abs() < 0.4 && position[2].abs() < 0.4 {
      assert!(position[1].abs() < 1e-6, "vertex off the plane: {position:?}");
      assert_eq!(normal, &[0.0, 1.0, 0.0]);
      interior += 1;
    }
  }
  assert!(interior > 0);
}
