//! Regular-cell lookup tables for table-driven isosurface extraction.
//!
//! # Cube Topology
//!
//! ```text
//!       6──────7         Corners (binary ZYX):
//!      /│     /│           0=(0,0,0)  1=(1,0,0)  2=(0,1,0)  3=(1,1,0)
//!     4─┼────5 │           4=(0,0,1)  5=(1,0,1)  6=(0,1,1)  7=(1,1,1)
//!     │ 2────┼─3
//!     │/     │/          +Y
//!     0──────1            │  +Z
//!                         │ /
//!                         └───+X
//! ```
//!
//! # Table Roles
//!
//! Given an 8-bit corner mask (bit i set when corner i's density is at or
//! below the isosurface):
//!
//! - [`EDGE_TABLE`]: whether the mask produces any surface at all. False
//!   exactly for the two homogeneous masks (0x00 and 0xFF).
//! - [`REGULAR_CELL_CLASS`]: maps the mask to its triangulation class.
//! - [`REGULAR_CELL_DATA`]: per class, the packed vertex/triangle counts and
//!   the winding-ordered triangle index list into the mask's vertex row.
//! - [`REGULAR_VERTEX_DATA`]: per mask, one 16-bit entry per cut edge, in
//!   surface-polygon traversal order. The low byte packs the edge's corner
//!   indices as nibbles (corner 1 in bits 4-7, corner 2 in bits 0-3). The
//!   high byte is the Transvoxel vertex-reuse code: direction nibble
//!   (1 = -x, 2 = -y, 4 = -z, 8 = owned by this cell) and reuse slot nibble
//!   (x edges slot 2, y edges slot 1, z edges slot 3). The mesher here emits
//!   an unwelded soup and reads only the low byte; the reuse bytes keep the
//!   entries in the published 16-bit format for consumers that do share
//!   vertices across cells.
//!
//! Triangles are wound so their geometric normals point toward positive
//! density (air), matching the direction of the sampled gradient. Ambiguous
//! faces (two diagonal corners inside) are always separated the same way, so
//! any face shared by two voxels is triangulated identically and the
//! combined surface stays closed.
//!
//! The tables are mutually consistent: every vertex-data row lists exactly
//! the cut edges of its mask, and the row length equals the vertex count of
//! the mask's class. `tables_test.rs` checks all of this exhaustively.
//! Transition-cell (LOD seam) tables are deliberately absent — seam
//! stitching is out of scope and nothing here would read them.

/// Per-class triangulation data.
///
/// `geometry_counts` packs the vertex count in the high nibble and the
/// triangle count in the low nibble. `vertex_index` holds
/// `3 * triangle_count` winding-ordered indices into the mask's vertex-data
/// row.
pub struct CellData {
  pub geometry_counts: u8,
  pub vertex_index: &'static [u8],
}

impl CellData {
  /// Number of edge vertices this class produces.
  #[inline(always)]
  pub const fn vertex_count(&self) -> usize {
    (self.geometry_counts >> 4) as usize
  }

  /// Number of triangles this class produces.
  #[inline(always)]
  pub const fn triangle_count(&self) -> usize {
    (self.geometry_counts & 0xF) as usize
  }
}

/// Has-surface flag per corner mask.
///
/// Generated at compile time from the class table: only the empty class
/// (homogeneous masks 0x00 and 0xFF) produces no geometry.
pub const EDGE_TABLE: [bool; 256] = generate_edge_table();

const fn generate_edge_table() -> [bool; 256] {
  let mut table = [false; 256];
  let mut mask = 0;
  while mask < 256 {
    table[mask] = REGULAR_CELL_CLASS[mask] != 0;
    mask += 1;
  }
  table
}

/// Corner-mask → triangulation-class lookup.
pub const REGULAR_CELL_CLASS: [u8; 256] = [
  0x00, 0x01, 0x01, 0x02, 0x01, 0x02, 0x03, 0x04, 0x01, 0x03, 0x02, 0x04, 0x02, 0x04, 0x04, 0x02,
  0x01, 0x02, 0x03, 0x04, 0x03, 0x04, 0x05, 0x06, 0x03, 0x07, 0x07, 0x06, 0x07, 0x06, 0x08, 0x04,
  0x01, 0x03, 0x02, 0x04, 0x03, 0x07, 0x07, 0x06, 0x03, 0x05, 0x04, 0x06, 0x07, 0x08, 0x06, 0x04,
  0x02, 0x04, 0x04, 0x02, 0x07, 0x06, 0x08, 0x04, 0x07, 0x08, 0x06, 0x04, 0x09, 0x0A, 0x0A, 0x02,
  0x01, 0x03, 0x03, 0x07, 0x02, 0x04, 0x07, 0x06, 0x03, 0x05, 0x07, 0x08, 0x04, 0x06, 0x06, 0x04,
  0x02, 0x04, 0x07, 0x06, 0x04, 0x02, 0x08, 0x04, 0x07, 0x08, 0x09, 0x0A, 0x06, 0x04, 0x0B, 0x02,
  0x03, 0x05, 0x07, 0x08, 0x07, 0x08, 0x09, 0x0A, 0x05, 0x0C, 0x08, 0x0D, 0x08, 0x0D, 0x0B, 0x06,
  0x04, 0x06, 0x06, 0x04, 0x06, 0x04, 0x0B, 0x02, 0x08, 0x0D, 0x0E, 0x06, 0x0B, 0x06, 0x03, 0x01,
  0x01, 0x03, 0x03, 0x07, 0x03, 0x07, 0x05, 0x08, 0x02, 0x07, 0x04, 0x06, 0x04, 0x06, 0x06, 0x04,
  0x03, 0x07, 0x05, 0x08, 0x05, 0x08, 0x0C, 0x0D, 0x07, 0x09, 0x08, 0x0B, 0x08, 0x0E, 0x0D, 0x06,
  0x02, 0x07, 0x04, 0x06, 0x07, 0x09, 0x08, 0x0E, 0x04, 0x08, 0x02, 0x04, 0x06, 0x0B, 0x04, 0x02,
  0x04, 0x06, 0x06, 0x04, 0x08, 0x0B, 0x0D, 0x06, 0x06, 0x0B, 0x04, 0x02, 0x0A, 0x03, 0x06, 0x01,
  0x02, 0x07, 0x07, 0x09, 0x04, 0x06, 0x08, 0x0B, 0x04, 0x08, 0x06, 0x0B, 0x02, 0x04, 0x04, 0x02,
  0x04, 0x06, 0x08, 0x0E, 0x06, 0x04, 0x0D, 0x06, 0x06, 0x0A, 0x0A, 0x03, 0x04, 0x02, 0x06, 0x01,
  0x04, 0x08, 0x06, 0x0A, 0x06, 0x0A, 0x0A, 0x03, 0x06, 0x0D, 0x04, 0x06, 0x04, 0x06, 0x02, 0x01,
  0x02, 0x04, 0x04, 0x02, 0x04, 0x02, 0x06, 0x01, 0x04, 0x06, 0x02, 0x01, 0x02, 0x01, 0x01, 0x00,
];

/// Per-class packed geometry counts and triangle index lists.
pub const REGULAR_CELL_DATA: [CellData; 15] = [
  CellData { geometry_counts: 0x00, vertex_index: &[] },
  CellData { geometry_counts: 0x31, vertex_index: &[0, 1, 2] },
  CellData { geometry_counts: 0x42, vertex_index: &[0, 1, 2, 0, 2, 3] },
  CellData { geometry_counts: 0x62, vertex_index: &[0, 1, 2, 3, 4, 5] },
  CellData { geometry_counts: 0x53, vertex_index: &[0, 1, 2, 0, 2, 3, 0, 3, 4] },
  CellData { geometry_counts: 0x93, vertex_index: &[0, 1, 2, 3, 4, 5, 6, 7, 8] },
  CellData { geometry_counts: 0x64, vertex_index: &[0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5] },
  CellData { geometry_counts: 0x73, vertex_index: &[0, 1, 2, 0, 2, 3, 4, 5, 6] },
  CellData { geometry_counts: 0x84, vertex_index: &[0, 1, 2, 0, 2, 3, 0, 3, 4, 5, 6, 7] },
  CellData { geometry_counts: 0x84, vertex_index: &[0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7] },
  CellData { geometry_counts: 0x75, vertex_index: &[0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 6] },
  CellData { geometry_counts: 0x75, vertex_index: &[1, 2, 3, 1, 3, 4, 1, 4, 5, 1, 5, 6, 1, 6, 0] },
  CellData { geometry_counts: 0xC4, vertex_index: &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11] },
  CellData { geometry_counts: 0x95, vertex_index: &[0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 6, 7, 8] },
  CellData { geometry_counts: 0x75, vertex_index: &[2, 3, 4, 2, 4, 5, 2, 5, 6, 2, 6, 0, 2, 0, 1] },
];

/// Per-mask cut-edge entries (reuse byte | corner nibbles), polygon order.
pub const REGULAR_VERTEX_DATA: [&[u16]; 256] = [
  &[],
  &[0x6201, 0x5102, 0x3304],
  &[0x6201, 0x2315, 0x4113],
  &[0x5102, 0x3304, 0x2315, 0x4113],
  &[0x5102, 0x4223, 0x1326],
  &[0x6201, 0x4223, 0x1326, 0x3304],
  &[0x6201, 0x2315, 0x4113, 0x5102, 0x4223, 0x1326],
  &[0x3304, 0x2315, 0x4113, 0x4223, 0x1326],
  &[0x4113, 0x8337, 0x4223],
  &[0x6201, 0x5102, 0x3304, 0x4113, 0x8337, 0x4223],
  &[0x6201, 0x2315, 0x8337, 0x4223],
  &[0x5102, 0x3304, 0x2315, 0x8337, 0x4223],
  &[0x5102, 0x4113, 0x8337, 0x1326],
  &[0x6201, 0x4113, 0x8337, 0x1326, 0x3304],
  &[0x6201, 0x2315, 0x8337, 0x1326, 0x5102],
  &[0x3304, 0x2315, 0x8337, 0x1326],
  &[0x3304, 0x1146, 0x2245],
  &[0x6201, 0x5102, 0x1146, 0x2245],
  &[0x6201, 0x2315, 0x4113, 0x3304, 0x1146, 0x2245],
  &[0x5102, 0x1146, 0x2245, 0x2315, 0x4113],
  &[0x5102, 0x4223, 0x1326, 0x3304, 0x1146, 0x2245],
  &[0x6201, 0x4223, 0x1326, 0x1146, 0x2245],
  &[0x6201, 0x2315, 0x4113, 0x5102, 0x4223, 0x1326, 0x3304, 0x1146, 0x2245],
  &[0x4113, 0x4223, 0x1326, 0x1146, 0x2245, 0x2315],
  &[0x3304, 0x1146, 0x2245, 0x4113, 0x8337, 0x4223],
  &[0x6201, 0x5102, 0x1146, 0x2245, 0x4113, 0x8337, 0x4223],
  &[0x6201, 0x2315, 0x8337, 0x4223, 0x3304, 0x1146, 0x2245],
  &[0x5102, 0x1146, 0x2245, 0x2315, 0x8337, 0x4223],
  &[0x5102, 0x4113, 0x8337, 0x1326, 0x3304, 0x1146, 0x2245],
  &[0x6201, 0x4113, 0x8337, 0x1326, 0x1146, 0x2245],
  &[0x6201, 0x2315, 0x8337, 0x1326, 0x5102, 0x3304, 0x1146, 0x2245],
  &[0x2315, 0x8337, 0x1326, 0x1146, 0x2245],
  &[0x2315, 0x2245, 0x8157],
  &[0x6201, 0x5102, 0x3304, 0x2315, 0x2245, 0x8157],
  &[0x6201, 0x2245, 0x8157, 0x4113],
  &[0x5102, 0x3304, 0x2245, 0x8157, 0x4113],
  &[0x5102, 0x4223, 0x1326, 0x2315, 0x2245, 0x8157],
  &[0x6201, 0x4223, 0x1326, 0x3304, 0x2315, 0x2245, 0x8157],
  &[0x6201, 0x2245, 0x8157, 0x4113, 0x5102, 0x4223, 0x1326],
  &[0x3304, 0x2245, 0x8157, 0x4113, 0x4223, 0x1326],
  &[0x4113, 0x8337, 0x4223, 0x2315, 0x2245, 0x8157],
  &[0x6201, 0x5102, 0x3304, 0x4113, 0x8337, 0x4223, 0x2315, 0x2245, 0x8157],
  &[0x6201, 0x2245, 0x8157, 0x8337, 0x4223],
  &[0x5102, 0x3304, 0x2245, 0x8157, 0x8337, 0x4223],
  &[0x5102, 0x4113, 0x8337, 0x1326, 0x2315, 0x2245, 0x8157],
  &[0x6201, 0x4113, 0x8337, 0x1326, 0x3304, 0x2315, 0x2245, 0x8157],
  &[0x6201, 0x2245, 0x8157, 0x8337, 0x1326, 0x5102],
  &[0x3304, 0x2245, 0x8157, 0x8337, 0x1326],
  &[0x3304, 0x1146, 0x8157, 0x2315],
  &[0x6201, 0x5102, 0x1146, 0x8157, 0x2315],
  &[0x6201, 0x3304, 0x1146, 0x8157, 0x4113],
  &[0x5102, 0x1146, 0x8157, 0x4113],
  &[0x3304, 0x1146, 0x8157, 0x2315, 0x5102, 0x4223, 0x1326],
  &[0x6201, 0x4223, 0x1326, 0x1146, 0x8157, 0x2315],
  &[0x6201, 0x3304, 0x1146, 0x8157, 0x4113, 0x5102, 0x4223, 0x1326],
  &[0x4113, 0x4223, 0x1326, 0x1146, 0x8157],
  &[0x3304, 0x1146, 0x8157, 0x2315, 0x4113, 0x8337, 0x4223],
  &[0x6201, 0x5102, 0x1146, 0x8157, 0x2315, 0x4113, 0x8337, 0x4223],
  &[0x6201, 0x3304, 0x1146, 0x8157, 0x8337, 0x4223],
  &[0x5102, 0x1146, 0x8157, 0x8337, 0x4223],
  &[0x5102, 0x4113, 0x8337, 0x1326, 0x3304, 0x1146, 0x8157, 0x2315],
  &[0x6201, 0x4113, 0x8337, 0x1326, 0x1146, 0x8157, 0x2315],
  &[0x6201, 0x3304, 0x1146, 0x8157, 0x8337, 0x1326, 0x5102],
  &[0x1326, 0x1146, 0x8157, 0x8337],
  &[0x1326, 0x8267, 0x1146],
  &[0x6201, 0x5102, 0x3304, 0x1326, 0x8267, 0x1146],
  &[0x6201, 0x2315, 0x4113, 0x1326, 0x8267, 0x1146],
  &[0x5102, 0x3304, 0x2315, 0x4113, 0x1326, 0x8267, 0x1146],
  &[0x5102, 0x4223, 0x8267, 0x1146],
  &[0x6201, 0x4223, 0x8267, 0x1146, 0x3304],
  &[0x5102, 0x4223, 0x8267, 0x1146, 0x6201, 0x2315, 0x4113],
  &[0x3304, 0x2315, 0x4113, 0x4223, 0x8267, 0x1146],
  &[0x4113, 0x8337, 0x4223, 0x1326, 0x8267, 0x1146],
  &[0x6201, 0x5102, 0x3304, 0x4113, 0x8337, 0x4223, 0x1326, 0x8267, 0x1146],
  &[0x6201, 0x2315, 0x8337, 0x4223, 0x1326, 0x8267, 0x1146],
  &[0x5102, 0x3304, 0x2315, 0x8337, 0x4223, 0x1326, 0x8267, 0x1146],
  &[0x5102, 0x4113, 0x8337, 0x8267, 0x1146],
  &[0x6201, 0x4113, 0x8337, 0x8267, 0x1146, 0x3304],
  &[0x6201, 0x2315, 0x8337, 0x8267, 0x1146, 0x5102],
  &[0x3304, 0x2315, 0x8337, 0x8267, 0x1146],
  &[0x3304, 0x1326, 0x8267, 0x2245],
  &[0x6201, 0x5102, 0x1326, 0x8267, 0x2245],
  &[0x3304, 0x1326, 0x8267, 0x2245, 0x6201, 0x2315, 0x4113],
  &[0x5102, 0x1326, 0x8267, 0x2245, 0x2315, 0x4113],
  &[0x5102, 0x4223, 0x8267, 0x2245, 0x3304],
  &[0x6201, 0x4223, 0x8267, 0x2245],
  &[0x5102, 0x4223, 0x8267, 0x2245, 0x3304, 0x6201, 0x2315, 0x4113],
  &[0x4113, 0x4223, 0x8267, 0x2245, 0x2315],
  &[0x3304, 0x1326, 0x8267, 0x2245, 0x4113, 0x8337, 0x4223],
  &[0x6201, 0x5102, 0x1326, 0x8267, 0x2245, 0x4113, 0x8337, 0x4223],
  &[0x6201, 0x2315, 0x8337, 0x4223, 0x3304, 0x1326, 0x8267, 0x2245],
  &[0x5102, 0x1326, 0x8267, 0x2245, 0x2315, 0x8337, 0x4223],
  &[0x5102, 0x4113, 0x8337, 0x8267, 0x2245, 0x3304],
  &[0x6201, 0x4113, 0x8337, 0x8267, 0x2245],
  &[0x6201, 0x2315, 0x8337, 0x8267, 0x2245, 0x3304, 0x5102],
  &[0x2315, 0x8337, 0x8267, 0x2245],
  &[0x2315, 0x2245, 0x8157, 0x1326, 0x8267, 0x1146],
  &[0x6201, 0x5102, 0x3304, 0x2315, 0x2245, 0x8157, 0x1326, 0x8267, 0x1146],
  &[0x6201, 0x2245, 0x8157, 0x4113, 0x1326, 0x8267, 0x1146],
  &[0x5102, 0x3304, 0x2245, 0x8157, 0x4113, 0x1326, 0x8267, 0x1146],
  &[0x5102, 0x4223, 0x8267, 0x1146, 0x2315, 0x2245, 0x8157],
  &[0x6201, 0x4223, 0x8267, 0x1146, 0x3304, 0x2315, 0x2245, 0x8157],
  &[0x6201, 0x2245, 0x8157, 0x4113, 0x5102, 0x4223, 0x8267, 0x1146],
  &[0x3304, 0x2245, 0x8157, 0x4113, 0x4223, 0x8267, 0x1146],
  &[0x4113, 0x8337, 0x4223, 0x2315, 0x2245, 0x8157, 0x1326, 0x8267, 0x1146],
  &[0x6201, 0x5102, 0x3304, 0x4113, 0x8337, 0x4223, 0x2315, 0x2245, 0x8157, 0x1326, 0x8267, 0x1146],
  &[0x6201, 0x2245, 0x8157, 0x8337, 0x4223, 0x1326, 0x8267, 0x1146],
  &[0x5102, 0x3304, 0x2245, 0x8157, 0x8337, 0x4223, 0x1326, 0x8267, 0x1146],
  &[0x5102, 0x4113, 0x8337, 0x8267, 0x1146, 0x2315, 0x2245, 0x8157],
  &[0x6201, 0x4113, 0x8337, 0x8267, 0x1146, 0x3304, 0x2315, 0x2245, 0x8157],
  &[0x6201, 0x2245, 0x8157, 0x8337, 0x8267, 0x1146, 0x5102],
  &[0x3304, 0x2245, 0x8157, 0x8337, 0x8267, 0x1146],
  &[0x3304, 0x1326, 0x8267, 0x8157, 0x2315],
  &[0x6201, 0x5102, 0x1326, 0x8267, 0x8157, 0x2315],
  &[0x6201, 0x3304, 0x1326, 0x8267, 0x8157, 0x4113],
  &[0x5102, 0x1326, 0x8267, 0x8157, 0x4113],
  &[0x5102, 0x4223, 0x8267, 0x8157, 0x2315, 0x3304],
  &[0x6201, 0x4223, 0x8267, 0x8157, 0x2315],
  &[0x6201, 0x3304, 0x5102, 0x4223, 0x8267, 0x8157, 0x4113],
  &[0x4113, 0x4223, 0x8267, 0x8157],
  &[0x3304, 0x1326, 0x8267, 0x8157, 0x2315, 0x4113, 0x8337, 0x4223],
  &[0x6201, 0x5102, 0x1326, 0x8267, 0x8157, 0x2315, 0x4113, 0x8337, 0x4223],
  &[0x6201, 0x3304, 0x1326, 0x8267, 0x8157, 0x8337, 0x4223],
  &[0x5102, 0x1326, 0x8267, 0x8157, 0x8337, 0x4223],
  &[0x5102, 0x4113, 0x8337, 0x8267, 0x8157, 0x2315, 0x3304],
  &[0x6201, 0x4113, 0x8337, 0x8267, 0x8157, 0x2315],
  &[0x6201, 0x3304, 0x5102, 0x8337, 0x8267, 0x8157],
  &[0x8337, 0x8267, 0x8157],
  &[0x8337, 0x8157, 0x8267],
  &[0x6201, 0x5102, 0x3304, 0x8337, 0x8157, 0x8267],
  &[0x6201, 0x2315, 0x4113, 0x8337, 0x8157, 0x8267],
  &[0x5102, 0x3304, 0x2315, 0x4113, 0x8337, 0x8157, 0x8267],
  &[0x5102, 0x4223, 0x1326, 0x8337, 0x8157, 0x8267],
  &[0x6201, 0x4223, 0x1326, 0x3304, 0x8337, 0x8157, 0x8267],
  &[0x6201, 0x2315, 0x4113, 0x5102, 0x4223, 0x1326, 0x8337, 0x8157, 0x8267],
  &[0x3304, 0x2315, 0x4113, 0x4223, 0x1326, 0x8337, 0x8157, 0x8267],
  &[0x4113, 0x8157, 0x8267, 0x4223],
  &[0x4113, 0x8157, 0x8267, 0x4223, 0x6201, 0x5102, 0x3304],
  &[0x6201, 0x2315, 0x8157, 0x8267, 0x4223],
  &[0x5102, 0x3304, 0x2315, 0x8157, 0x8267, 0x4223],
  &[0x5102, 0x4113, 0x8157, 0x8267, 0x1326],
  &[0x6201, 0x4113, 0x8157, 0x8267, 0x1326, 0x3304],
  &[0x6201, 0x2315, 0x8157, 0x8267, 0x1326, 0x5102],
  &[0x3304, 0x2315, 0x8157, 0x8267, 0x1326],
  &[0x3304, 0x1146, 0x2245, 0x8337, 0x8157, 0x8267],
  &[0x6201, 0x5102, 0x1146, 0x2245, 0x8337, 0x8157, 0x8267],
  &[0x6201, 0x2315, 0x4113, 0x3304, 0x1146, 0x2245, 0x8337, 0x8157, 0x8267],
  &[0x5102, 0x1146, 0x2245, 0x2315, 0x4113, 0x8337, 0x8157, 0x8267],
  &[0x5102, 0x4223, 0x1326, 0x3304, 0x1146, 0x2245, 0x8337, 0x8157, 0x8267],
  &[0x6201, 0x4223, 0x1326, 0x1146, 0x2245, 0x8337, 0x8157, 0x8267],
  &[0x6201, 0x2315, 0x4113, 0x5102, 0x4223, 0x1326, 0x3304, 0x1146, 0x2245, 0x8337, 0x8157, 0x8267],
  &[0x4113, 0x4223, 0x1326, 0x1146, 0x2245, 0x2315, 0x8337, 0x8157, 0x8267],
  &[0x4113, 0x8157, 0x8267, 0x4223, 0x3304, 0x1146, 0x2245],
  &[0x6201, 0x5102, 0x1146, 0x2245, 0x4113, 0x8157, 0x8267, 0x4223],
  &[0x6201, 0x2315, 0x8157, 0x8267, 0x4223, 0x3304, 0x1146, 0x2245],
  &[0x5102, 0x1146, 0x2245, 0x2315, 0x8157, 0x8267, 0x4223],
  &[0x5102, 0x4113, 0x8157, 0x8267, 0x1326, 0x3304, 0x1146, 0x2245],
  &[0x6201, 0x4113, 0x8157, 0x8267, 0x1326, 0x1146, 0x2245],
  &[0x6201, 0x2315, 0x8157, 0x8267, 0x1326, 0x5102, 0x3304, 0x1146, 0x2245],
  &[0x2315, 0x8157, 0x8267, 0x1326, 0x1146, 0x2245],
  &[0x2315, 0x2245, 0x8267, 0x8337],
  &[0x2315, 0x2245, 0x8267, 0x8337, 0x6201, 0x5102, 0x3304],
  &[0x6201, 0x2245, 0x8267, 0x8337, 0x4113],
  &[0x5102, 0x3304, 0x2245, 0x8267, 0x8337, 0x4113],
  &[0x2315, 0x2245, 0x8267, 0x8337, 0x5102, 0x4223, 0x1326],
  &[0x6201, 0x4223, 0x1326, 0x3304, 0x2315, 0x2245, 0x8267, 0x8337],
  &[0x6201, 0x2245, 0x8267, 0x8337, 0x4113, 0x5102, 0x4223, 0x1326],
  &[0x3304, 0x2245, 0x8267, 0x8337, 0x4113, 0x4223, 0x1326],
  &[0x4113, 0x2315, 0x2245, 0x8267, 0x4223],
  &[0x4113, 0x2315, 0x2245, 0x8267, 0x4223, 0x6201, 0x5102, 0x3304],
  &[0x6201, 0x2245, 0x8267, 0x4223],
  &[0x5102, 0x3304, 0x2245, 0x8267, 0x4223],
  &[0x5102, 0x4113, 0x2315, 0x2245, 0x8267, 0x1326],
  &[0x6201, 0x4113, 0x2315, 0x2245, 0x8267, 0x1326, 0x3304],
  &[0x6201, 0x2245, 0x8267, 0x1326, 0x5102],
  &[0x3304, 0x2245, 0x8267, 0x1326],
  &[0x3304, 0x1146, 0x8267, 0x8337, 0x2315],
  &[0x6201, 0x5102, 0x1146, 0x8267, 0x8337, 0x2315],
  &[0x6201, 0x3304, 0x1146, 0x8267, 0x8337, 0x4113],
  &[0x5102, 0x1146, 0x8267, 0x8337, 0x4113],
  &[0x3304, 0x1146, 0x8267, 0x8337, 0x2315, 0x5102, 0x4223, 0x1326],
  &[0x6201, 0x4223, 0x1326, 0x1146, 0x8267, 0x8337, 0x2315],
  &[0x6201, 0x3304, 0x1146, 0x8267, 0x8337, 0x4113, 0x5102, 0x4223, 0x1326],
  &[0x4113, 0x4223, 0x1326, 0x1146, 0x8267, 0x8337],
  &[0x3304, 0x1146, 0x8267, 0x4223, 0x4113, 0x2315],
  &[0x6201, 0x5102, 0x1146, 0x8267, 0x4223, 0x4113, 0x2315],
  &[0x6201, 0x3304, 0x1146, 0x8267, 0x4223],
  &[0x5102, 0x1146, 0x8267, 0x4223],
  &[0x5102, 0x4113, 0x2315, 0x3304, 0x1146, 0x8267, 0x1326],
  &[0x6201, 0x4113, 0x2315, 0x1326, 0x1146, 0x8267],
  &[0x6201, 0x3304, 0x1146, 0x8267, 0x1326, 0x5102],
  &[0x1326, 0x1146, 0x8267],
  &[0x1326, 0x8337, 0x8157, 0x1146],
  &[0x1326, 0x8337, 0x8157, 0x1146, 0x6201, 0x5102, 0x3304],
  &[0x1326, 0x8337, 0x8157, 0x1146, 0x6201, 0x2315, 0x4113],
  &[0x5102, 0x3304, 0x2315, 0x4113, 0x1326, 0x8337, 0x8157, 0x1146],
  &[0x5102, 0x4223, 0x8337, 0x8157, 0x1146],
  &[0x6201, 0x4223, 0x8337, 0x8157, 0x1146, 0x3304],
  &[0x5102, 0x4223, 0x8337, 0x8157, 0x1146, 0x6201, 0x2315, 0x4113],
  &[0x3304, 0x2315, 0x4113, 0x4223, 0x8337, 0x8157, 0x1146],
  &[0x4113, 0x8157, 0x1146, 0x1326, 0x4223],
  &[0x4113, 0x8157, 0x1146, 0x1326, 0x4223, 0x6201, 0x5102, 0x3304],
  &[0x6201, 0x2315, 0x8157, 0x1146, 0x1326, 0x4223],
  &[0x5102, 0x3304, 0x2315, 0x8157, 0x1146, 0x1326, 0x4223],
  &[0x5102, 0x4113, 0x8157, 0x1146],
  &[0x6201, 0x4113, 0x8157, 0x1146, 0x3304],
  &[0x6201, 0x2315, 0x8157, 0x1146, 0x5102],
  &[0x3304, 0x2315, 0x8157, 0x1146],
  &[0x3304, 0x1326, 0x8337, 0x8157, 0x2245],
  &[0x6201, 0x5102, 0x1326, 0x8337, 0x8157, 0x2245],
  &[0x3304, 0x1326, 0x8337, 0x8157, 0x2245, 0x6201, 0x2315, 0x4113],
  &[0x5102, 0x1326, 0x8337, 0x8157, 0x2245, 0x2315, 0x4113],
  &[0x5102, 0x4223, 0x8337, 0x8157, 0x2245, 0x3304],
  &[0x6201, 0x4223, 0x8337, 0x8157, 0x2245],
  &[0x5102, 0x4223, 0x8337, 0x8157, 0x2245, 0x3304, 0x6201, 0x2315, 0x4113],
  &[0x4113, 0x4223, 0x8337, 0x8157, 0x2245, 0x2315],
  &[0x3304, 0x1326, 0x4223, 0x4113, 0x8157, 0x2245],
  &[0x6201, 0x5102, 0x1326, 0x4223, 0x4113, 0x8157, 0x2245],
  &[0x6201, 0x2315, 0x8157, 0x2245, 0x3304, 0x1326, 0x4223],
  &[0x5102, 0x1326, 0x4223, 0x2315, 0x8157, 0x2245],
  &[0x5102, 0x4113, 0x8157, 0x2245, 0x3304],
  &[0x6201, 0x4113, 0x8157, 0x2245],
  &[0x6201, 0x2315, 0x8157, 0x2245, 0x3304, 0x5102],
  &[0x2315, 0x8157, 0x2245],
  &[0x2315, 0x2245, 0x1146, 0x1326, 0x8337],
  &[0x2315, 0x2245, 0x1146, 0x1326, 0x8337, 0x6201, 0x5102, 0x3304],
  &[0x6201, 0x2245, 0x1146, 0x1326, 0x8337, 0x4113],
  &[0x5102, 0x3304, 0x2245, 0x1146, 0x1326, 0x8337, 0x4113],
  &[0x5102, 0x4223, 0x8337, 0x2315, 0x2245, 0x1146],
  &[0x6201, 0x4223, 0x8337, 0x2315, 0x2245, 0x1146, 0x3304],
  &[0x6201, 0x2245, 0x1146, 0x5102, 0x4223, 0x8337, 0x4113],
  &[0x3304, 0x2245, 0x1146, 0x4113, 0x4223, 0x8337],
  &[0x4113, 0x2315, 0x2245, 0x1146, 0x1326, 0x4223],
  &[0x4113, 0x2315, 0x2245, 0x1146, 0x1326, 0x4223, 0x6201, 0x5102, 0x3304],
  &[0x6201, 0x2245, 0x1146, 0x1326, 0x4223],
  &[0x5102, 0x3304, 0x2245, 0x1146, 0x1326, 0x4223],
  &[0x5102, 0x4113, 0x2315, 0x2245, 0x1146],
  &[0x6201, 0x4113, 0x2315, 0x2245, 0x1146, 0x3304],
  &[0x6201, 0x2245, 0x1146, 0x5102],
  &[0x3304, 0x2245, 0x1146],
  &[0x3304, 0x1326, 0x8337, 0x2315],
  &[0x6201, 0x5102, 0x1326, 0x8337, 0x2315],
  &[0x6201, 0x3304, 0x1326, 0x8337, 0x4113],
  &[0x5102, 0x1326, 0x8337, 0x4113],
  &[0x5102, 0x4223, 0x8337, 0x2315, 0x3304],
  &[0x6201, 0x4223, 0x8337, 0x2315],
  &[0x6201, 0x3304, 0x5102, 0x4223, 0x8337, 0x4113],
  &[0x4113, 0x4223, 0x8337],
  &[0x3304, 0x1326, 0x4223, 0x4113, 0x2315],
  &[0x6201, 0x5102, 0x1326, 0x4223, 0x4113, 0x2315],
  &[0x6201, 0x3304, 0x1326, 0x4223],
  &[0x5102, 0x1326, 0x4223],
  &[0x5102, 0x4113, 0x2315, 0x3304],
  &[0x6201, 0x4113, 0x2315],
  &[0x6201, 0x3304, 0x5102],
  &[],
];

#[cfg(test)]
#[path = "tables_test.rs"]
mod tables_test;
