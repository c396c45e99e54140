use std::collections::BTreeSet;

use super::*;

/// Corner pairs of the 12 cube edges.
const EDGE_CORNERS: [[u8; 2]; 12] = [
  [0, 1],
  [0, 2],
  [0, 4],
  [1, 3],
  [1, 5],
  [2, 3],
  [2, 6],
  [3, 7],
  [4, 5],
  [4, 6],
  [5, 7],
  [6, 7],
];

fn cut_edges(mask: usize) -> BTreeSet<[u8; 2]> {
  EDGE_CORNERS
    .iter()
    .copied()
    .filter(|&[a, b]| (mask >> a) & 1 != (mask >> b) & 1)
    .collect()
}

fn entry_corners(entry: u16) -> [u8; 2] {
  [((entry >> 4) & 0xF) as u8, (entry & 0xF) as u8]
}

#[test]
fn test_edge_table_homogeneous_masks_have_no_surface() {
  assert!(!EDGE_TABLE[0x00]);
  assert!(!EDGE_TABLE[0xFF]);
  for mask in 1..255 {
    assert!(EDGE_TABLE[mask], "mask {mask:#04x} must produce surface");
  }
}

#[test]
fn test_class_table_and_vertex_data_agree() {
  for mask in 0..256usize {
    let class = REGULAR_CELL_CLASS[mask] as usize;
    assert!(class < REGULAR_CELL_DATA.len());
    let data = &REGULAR_CELL_DATA[class];
    let row = REGULAR_VERTEX_DATA[mask];

    assert_eq!(
      row.len(),
      data.vertex_count(),
      "mask {mask:#04x}: row length vs class vertex count"
    );
    assert_eq!(
      data.vertex_index.len(),
      3 * data.triangle_count(),
      "class {class}: triangle index list length"
    );
    for &vertex in data.vertex_index {
      assert!(
        (vertex as usize) < data.vertex_count(),
        "class {class}: vertex index {vertex} out of range"
      );
    }
  }
}

#[test]
fn test_vertex_data_rows_cover_exactly_the_cut_edges() {
  // Rows are in surface-polygon traversal order, so compare as sets.
  for mask in 0..256usize {
    let expected = cut_edges(mask);
    let row = REGULAR_VERTEX_DATA[mask];
    assert_eq!(row.len(), expected.len(), "mask {mask:#04x}");

    let mut listed = BTreeSet::new();
    for &entry in row {
      let [corner1, corner2] = entry_corners(entry);
      // Edge endpoints differ in exactly one coordinate bit
      assert_eq!((corner1 ^ corner2).count_ones(), 1);
      // And straddle the isosurface for this mask
      assert_ne!(
        (mask >> corner1) & 1,
        (mask >> corner2) & 1,
        "mask {mask:#04x}: entry {entry:#06x} is not a cut edge"
      );
      let mut pair = [corner1, corner2];
      pair.sort_unstable();
      listed.insert(pair);
    }
    assert_eq!(listed, expected, "mask {mask:#04x}");
  }
}

#[test]
fn test_reuse_bytes_follow_edge_ownership() {
  // High byte per entry: direction nibble (1 = -x, 2 = -y, 4 = -z, 8 = new)
  // and slot nibble (x edges 2, y edges 1, z edges 3). An edge on a minimal
  // cell face is owned by the preceding cell in that direction; the three
  // maximal edges are owned by the cell itself.
  let corner = |c: u8| [c & 1, (c >> 1) & 1, (c >> 2) & 1];
  for mask in 0..256usize {
    for &entry in REGULAR_VERTEX_DATA[mask] {
      let [c1, c2] = entry_corners(entry);
      let (p1, p2) = (corner(c1.min(c2)), corner(c1.max(c2)));
      let axis = (0..3).find(|&k| p1[k] != p2[k]).unwrap();

      let mut direction = 0u16;
      for k in 0..3 {
        if k != axis && p1[k] == 0 {
          direction |= 1 << k;
        }
      }
      if direction == 0 {
        direction = 8;
      }
      let slot = [2u16, 1, 3][axis];
      assert_eq!(
        entry >> 8,
        (direction << 4) | slot,
        "mask {mask:#04x}: entry {entry:#06x} reuse byte"
      );
    }
  }
}

#[test]
fn test_complementary_masks_share_edge_sets() {
  // Inverting inside/outside cuts the same edges; traversal order differs.
  for mask in 0..256usize {
    let a: BTreeSet<u16> = REGULAR_VERTEX_DATA[mask].iter().copied().collect();
    let b: BTreeSet<u16> = REGULAR_VERTEX_DATA[255 - mask].iter().copied().collect();
    assert_eq!(a, b, "mask {mask:#04x}");
  }
}

#[test]
fn test_geometry_counts_stay_within_schema_bounds() {
  // The packed nibbles bound the schema: at most 12 vertices (one per cube
  // edge) and 5 triangles per class.
  assert_eq!(REGULAR_CELL_DATA.len(), 15);
  for data in &REGULAR_CELL_DATA {
    assert!(data.vertex_count() <= 12);
    assert!(data.triangle_count() <= 5);
  }
}

#[test]
fn test_single_corner_mask_is_one_triangle() {
  for corner in 0..8 {
    let mask = 1usize << corner;
    let data = &REGULAR_CELL_DATA[REGULAR_CELL_CLASS[mask] as usize];
    assert_eq!(data.vertex_count(), 3);
    assert_eq!(data.triangle_count(), 1);
  }
}

#[test]
fn test_canonical_single_corner_row() {
  // Corner 0 inside cuts its three incident edges; the row walks the
  // triangle in outward winding order.
  assert_eq!(REGULAR_VERTEX_DATA[0x01], &[0x6201, 0x5102, 0x3304]);
  assert_eq!(REGULAR_CELL_CLASS[0x01], 0x01);
}
