//! Table-driven isosurface extraction over a 3×3×3 cell neighborhood.
//!
//! One visit meshes the 16³ unit voxels of a single cell. Voxel corners and
//! gradient stencils may read past the cell's own lattice, so the mesher
//! works in an extended coordinate space three cell-widths wide:
//!
//! ```text
//!            extended coordinate per axis
//!   -16 ............ 0 ............ 16 ............ 32
//!    └─ neighbor -1 ─┴─ this cell ──┴─ neighbor +1 ─┘
//! ```
//!
//! Every extended coordinate resolves to one of 27 source buffers plus a
//! local sample index. Neighbors at coarser refinement supply their own
//! (larger-scale) buffers unchanged — the resulting cracks at refinement
//! boundaries are accepted behavior. Out-of-domain neighbors read as
//! constant air.
//!
//! # Per-voxel pipeline
//!
//! 1. Load 8 corner densities, build the corner mask (bit i set when corner
//!    i is at or below the isosurface).
//! 2. Skip homogeneous voxels via [`EDGE_TABLE`].
//! 3. Interpolate one vertex per cut edge (cached per voxel), with a normal
//!    blended from the central-difference gradients at the edge's corners.
//! 4. Emit the class triangulation as a flat soup: three fresh vertices per
//!    triangle, identity indices, no welding.
//!
//! Output positions land in the cell-local `[-0.5, 0.5]³` space; the
//! consumer scales by the cell's world width.

use glam::DVec3;

use crate::cell::FieldBuffer;
use crate::constants::{
  corner_offset, sample_index, HALF_RESOLUTION, INV_RESOLUTION, ISO_LEVEL, RESOLUTION,
};
use crate::tables::{EDGE_TABLE, REGULAR_CELL_CLASS, REGULAR_CELL_DATA, REGULAR_VERTEX_DATA};

/// Below this corner-density difference the gradient blend would divide by
/// almost zero; the first corner's gradient is used unblended instead.
const GRADIENT_EPSILON: f64 = 1e-7;

/// Triangle soup for one cell: parallel position/normal arrays and an
/// identity index list (three fresh vertices per triangle, no sharing).
#[derive(Default, Clone, PartialEq, Debug)]
pub struct CellMesh {
  pub positions: Vec<[f32; 3]>,
  pub normals: Vec<[f32; 3]>,
  pub indices: Vec<u32>,
}

impl CellMesh {
  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.positions.is_empty()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }
}

/// Slot of a `(dx, dy, dz) ∈ {-1,0,1}³` neighbor in the gathered buffer
/// array. The cell itself is slot 13.
#[inline(always)]
pub(crate) fn neighborhood_slot(dx: i32, dy: i32, dz: i32) -> usize {
  ((dx + 1) + (dy + 1) * 3 + (dz + 1) * 9) as usize
}

/// Map an extended coordinate (each axis in `[-16, 32)`) to its source
/// buffer slot and the sample index within that buffer.
#[inline(always)]
pub(crate) fn voxel_indices(x: i32, y: i32, z: i32) -> (usize, usize) {
  let res = RESOLUTION as i32;
  let slot = neighborhood_slot(x.div_euclid(res), y.div_euclid(res), z.div_euclid(res));
  let local = sample_index(
    x.rem_euclid(res) as usize,
    y.rem_euclid(res) as usize,
    z.rem_euclid(res) as usize,
  );
  (slot, local)
}

/// The 27 density buffers surrounding (and including) the visited cell.
pub(crate) struct Neighborhood<'a> {
  fields: [&'a FieldBuffer; 27],
}

impl<'a> Neighborhood<'a> {
  pub(crate) fn new(fields: [&'a FieldBuffer; 27]) -> Self {
    Self { fields }
  }

  /// Density at an extended coordinate.
  #[inline(always)]
  fn sample(&self, x: i32, y: i32, z: i32) -> f64 {
    let (slot, local) = voxel_indices(x, y, z);
    self.fields[slot][local]
  }

  /// Central-difference density gradient at an extended lattice point.
  #[inline]
  fn gradient(&self, x: i32, y: i32, z: i32) -> DVec3 {
    DVec3::new(
      self.sample(x + 1, y, z) - self.sample(x - 1, y, z),
      self.sample(x, y + 1, z) - self.sample(x, y - 1, z),
      self.sample(x, y, z + 1) - self.sample(x, y, z - 1),
    )
  }
}

/// Extract the triangle soup for the centre cell of a neighborhood.
///
/// Fully sequential and deterministic: identical inputs produce
/// byte-identical output.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "mesher::extract"))]
pub(crate) fn extract(neighborhood: &Neighborhood<'_>) -> CellMesh {
  let mut mesh = CellMesh::default();

  // Per-voxel edge-vertex cache, overwritten for every surface voxel.
  let mut edge_pos = [DVec3::ZERO; 12];
  let mut edge_nrm = [DVec3::ZERO; 12];

  let res = RESOLUTION as i32;
  for vx in 0..res {
    for vy in 0..res {
      for vz in 0..res {
        let mut corners = [0.0f64; 8];
        let mut mask = 0usize;
        for corner in 0..8u8 {
          let [ox, oy, oz] = corner_offset(corner);
          let density = neighborhood.sample(vx + ox, vy + oy, vz + oz);
          corners[corner as usize] = density;
          if density <= ISO_LEVEL {
            mask |= 1 << corner;
          }
        }

        if !EDGE_TABLE[mask] {
          continue;
        }

        let cell_class = REGULAR_CELL_CLASS[mask] as usize;
        let cell_data = &REGULAR_CELL_DATA[cell_class];
        let vertex_data = REGULAR_VERTEX_DATA[mask];

        for (slot, &entry) in vertex_data.iter().enumerate() {
          let corner1 = ((entry >> 4) & 0xF) as usize;
          let corner2 = (entry & 0xF) as usize;
          let iso1 = corners[corner1];
          let iso2 = corners[corner2];

          // Surface crossing along the edge; t = 1 puts the vertex on
          // corner 1, t = 0 on corner 2.
          let t = iso2 / (iso2 - iso1);

          let [o1x, o1y, o1z] = corner_offset(corner1 as u8);
          let [o2x, o2y, o2z] = corner_offset(corner2 as u8);
          let p1 = DVec3::new((vx + o1x) as f64, (vy + o1y) as f64, (vz + o1z) as f64);
          let p2 = DVec3::new((vx + o2x) as f64, (vy + o2y) as f64, (vz + o2z) as f64);
          edge_pos[slot] = p1 * t + p2 * (1.0 - t);

          let g1 = neighborhood.gradient(vx + o1x, vy + o1y, vz + o1z);
          let gradient = if (iso1 - iso2).abs() <= GRADIENT_EPSILON {
            g1
          } else {
            let g2 = neighborhood.gradient(vx + o2x, vy + o2y, vz + o2z);
            g1 * t + g2 * (1.0 - t)
          };
          edge_nrm[slot] = normalize_or_up(gradient);
        }

        for triangle in cell_data.vertex_index.chunks_exact(3) {
          for &vertex in triangle {
            let local = (edge_pos[vertex as usize] - DVec3::splat(HALF_RESOLUTION))
              * INV_RESOLUTION;
            mesh.indices.push(mesh.positions.len() as u32);
            mesh.positions.push(local.as_vec3().to_array());
            mesh.normals.push(edge_nrm[vertex as usize].as_vec3().to_array());
          }
        }
      }
    }
  }

  mesh
}

#[inline]
fn normalize_or_up(v: DVec3) -> DVec3 {
  let len_sq = v.length_squared();
  if len_sq < 1e-12 {
    DVec3::Y // Fallback to up
  } else {
    v * len_sq.sqrt().recip()
  }
}

#[cfg(test)]
#[path = "mesher_test.rs"]
mod mesher_test;
