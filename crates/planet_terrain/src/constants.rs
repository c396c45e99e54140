//! Lattice layout constants for 16³ cell density fields.
//!
//! Every octree cell stores the same fixed-size density buffer regardless of
//! its depth; only the world-space extent of the cell changes. The layout is
//! chosen for bit-shift indexing (16 samples per axis).
//!
//! # Memory Layout
//!
//! ```text
//! index = x << 8 | y << 4 | z
//!       = x * 256 + y * 16 + z
//!
//! Sequential Z, then Y, then X (row-major, Z innermost).
//! ```
//!
//! # Coordinate System
//!
//! ```text
//!         +Y
//!          │
//!          │
//!          │
//!          └───────── +X
//!         /
//!        /
//!       +Z
//!
//! Voxel corner indices (binary: ZYX):
//!   0 = (0,0,0)    4 = (0,0,1)
//!   1 = (1,0,0)    5 = (1,0,1)
//!   2 = (0,1,0)    6 = (0,1,1)
//!   3 = (1,1,0)    7 = (1,1,1)
//! ```

use glam::DVec3;

/// Number of density samples per axis (must be 16 for bit-shift indexing).
pub const RESOLUTION: usize = 16;

/// Total samples in one cell field (16³ = 4096).
pub const FIELD_LEN: usize = RESOLUTION * RESOLUTION * RESOLUTION;

/// Half of [`RESOLUTION`], used to recentre voxel coordinates.
pub const HALF_RESOLUTION: f64 = RESOLUTION as f64 / 2.0;

/// Reciprocal of [`RESOLUTION`], used to scale voxel coordinates into the
/// cell-local `[-0.5, 0.5]³` output space.
pub const INV_RESOLUTION: f64 = 1.0 / RESOLUTION as f64;

/// The zero level-set of the density field. Samples above it are air,
/// samples below it are ground.
pub const ISO_LEVEL: f64 = 0.0;

/// Deepest supported octree level. Bounds the scale table and caps
/// `max_subdivision` at grid construction.
pub const MAX_DEPTH: u32 = 20;

/// Bit shift for Y coordinate indexing (log2(16) = 4).
pub const Y_SHIFT: u32 = 4;

/// Bit shift for X coordinate indexing (log2(256) = 8).
pub const X_SHIFT: u32 = 8;

/// Mask for extracting a single axis from a linear index (0xF = 15).
pub const INDEX_MASK: usize = 0xF;

/// Convert 3D sample coordinates to a linear field index using bit shifts.
#[inline(always)]
pub const fn sample_index(x: usize, y: usize, z: usize) -> usize {
  (x << X_SHIFT) | (y << Y_SHIFT) | z
}

/// Convert a linear field index back to 3D sample coordinates.
#[inline(always)]
pub const fn sample_coord(idx: usize) -> (usize, usize, usize) {
  let x = idx >> X_SHIFT;
  let y = (idx >> Y_SHIFT) & INDEX_MASK;
  let z = idx & INDEX_MASK;
  (x, y, z)
}

/// Voxel corner offsets relative to the voxel origin.
///
/// Corner layout (binary: ZYX):
/// - 0 = (0,0,0)
/// - 1 = (1,0,0)
/// - 2 = (0,1,0)
/// - 3 = (1,1,0)
/// - 4 = (0,0,1)
/// - 5 = (1,0,1)
/// - 6 = (0,1,1)
/// - 7 = (1,1,1)
#[inline(always)]
pub const fn corner_offset(corner: u8) -> [i32; 3] {
  [
    (corner & 1) as i32,
    ((corner >> 1) & 1) as i32,
    ((corner >> 2) & 1) as i32,
  ]
}

/// Child centre offsets in units of the child's scale.
///
/// Indexed by octant; the ordering is load-bearing — it must agree with
/// [`crate::path::octant_index`] so that addressing and subdivision place
/// children in the same octants.
pub const CHILD_OFFSETS: [DVec3; 8] = [
  DVec3::new(-0.5, -0.5, -0.5),
  DVec3::new(0.5, -0.5, -0.5),
  DVec3::new(-0.5, 0.5, -0.5),
  DVec3::new(0.5, 0.5, -0.5),
  DVec3::new(-0.5, -0.5, 0.5),
  DVec3::new(0.5, -0.5, 0.5),
  DVec3::new(-0.5, 0.5, 0.5),
  DVec3::new(0.5, 0.5, 0.5),
];

/// Per-depth cell scale (half-extent of the cell in root-local space).
///
/// `SCALE_TABLE[0] = 1.0`, each level halves the previous one. All values are
/// exact powers of two, so repeated halving introduces no rounding.
pub const SCALE_TABLE: [f64; (MAX_DEPTH + 1) as usize] = generate_scale_table();

const fn generate_scale_table() -> [f64; (MAX_DEPTH + 1) as usize] {
  let mut table = [0.0; (MAX_DEPTH + 1) as usize];
  let mut scale = 1.0;
  let mut depth = 0;
  while depth < table.len() {
    table[depth] = scale;
    scale *= 0.5;
    depth += 1;
  }
  table
}

/// Scale (half-extent) of a cell at the given depth.
#[inline(always)]
pub const fn cell_scale(depth: u32) -> f64 {
  SCALE_TABLE[depth as usize]
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
