//! Octree cells and their density fields.
//!
//! Cells live in the grid's arena and reference each other by [`CellId`],
//! never by pointer. A cell's density buffer is populated on demand by
//! [`Cell::fill`] and classified into air/ground/mixed in a separate
//! deterministic pass after sampling completes.

use glam::DVec3;
use rayon::prelude::*;

use crate::constants::{cell_scale, sample_coord, FIELD_LEN, ISO_LEVEL, RESOLUTION};
use crate::field::DensityField;
use crate::path::CellTag;

/// Stable index of a cell in the grid arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CellId(pub(crate) u32);

impl CellId {
  /// The root cell is always slot 0.
  pub const ROOT: CellId = CellId(0);

  #[inline(always)]
  pub(crate) fn index(self) -> usize {
    self.0 as usize
  }
}

/// One density sample buffer (16³ f64 samples).
pub type FieldBuffer = [f64; FIELD_LEN];

/// One octree node.
///
/// A cell is exactly one of: unsplit (no children) or split (exactly 8
/// children). Splitting is one-way; there is no merge. The density field is
/// optional until the first [`fill`](Cell::fill).
pub struct Cell {
  tag: CellTag,
  centre: DVec3,
  parent: Option<CellId>,
  children: Option<[CellId; 8]>,
  field: Option<Box<FieldBuffer>>,
  is_air: bool,
  is_ground: bool,
}

impl Cell {
  pub(crate) fn new(tag: CellTag, centre: DVec3, parent: Option<CellId>) -> Self {
    Self {
      tag,
      centre,
      parent,
      children: None,
      field: None,
      is_air: false,
      is_ground: false,
    }
  }

  /// Path of this cell from the root; its length is the cell's depth.
  pub fn tag(&self) -> &CellTag {
    &self.tag
  }

  /// Octree depth (root = 0). Always equals the tag length.
  pub fn depth(&self) -> u32 {
    self.tag.depth()
  }

  /// Cell centre in root-local space (root = origin).
  pub fn centre(&self) -> DVec3 {
    self.centre
  }

  /// Half-extent of this cell in root-local space.
  pub fn scale(&self) -> f64 {
    cell_scale(self.depth())
  }

  pub fn parent(&self) -> Option<CellId> {
    self.parent
  }

  pub fn children(&self) -> Option<&[CellId; 8]> {
    self.children.as_ref()
  }

  pub(crate) fn set_children(&mut self, children: [CellId; 8]) {
    self.children = Some(children);
  }

  pub fn is_root(&self) -> bool {
    self.tag.is_root()
  }

  /// A leaf sits at the grid's maximum subdivision depth and can never split.
  pub fn is_leaf(&self, max_subdivision: u32) -> bool {
    self.depth() == max_subdivision
  }

  pub fn splitted(&self) -> bool {
    self.children.is_some()
  }

  /// A cell may split exactly once, and never at the depth cap.
  pub fn splittable(&self, max_subdivision: u32) -> bool {
    !self.is_leaf(max_subdivision) && !self.splitted()
  }

  /// The sampled density buffer, if [`fill`](Cell::fill) has run.
  pub fn density(&self) -> Option<&FieldBuffer> {
    self.field.as_deref()
  }

  /// All samples strictly above the isosurface.
  pub fn is_air(&self) -> bool {
    self.is_air
  }

  /// All samples strictly below the isosurface.
  pub fn is_ground(&self) -> bool {
    self.is_ground
  }

  /// Homogeneous cells contain no surface and mesh to nothing.
  pub fn is_trivial(&self) -> bool {
    self.is_air || self.is_ground
  }

  pub fn is_filled(&self) -> bool {
    self.field.is_some()
  }

  /// Sample the generator across this cell's domain.
  ///
  /// The 4096 samples cover `[centre - scale, centre + scale)` per axis with
  /// step `2·scale / 16`, so a neighboring cell's sample 0 continues this
  /// cell's lattice exactly. All samples are evaluated in parallel (disjoint
  /// writes, rayon joins before returning); the air/ground classification
  /// runs as a separate pass afterwards so the result is deterministic.
  ///
  /// Idempotent: refilling recomputes the same buffer.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "cell::fill"))]
  pub(crate) fn fill(&mut self, generator: &dyn DensityField) {
    let scale = self.scale();
    let step = 2.0 * scale / RESOLUTION as f64;
    let origin = self.centre - DVec3::splat(scale);

    let field = self
      .field
      .get_or_insert_with(|| Box::new([0.0; FIELD_LEN]));

    field
      .as_mut_slice()
      .par_iter_mut()
      .enumerate()
      .for_each(|(idx, sample)| {
        let (xi, yi, zi) = sample_coord(idx);
        *sample = generator.sample(
          origin.x + step * xi as f64,
          origin.y + step * yi as f64,
          origin.z + step * zi as f64,
        );
      });

    // Classification is a separate reduction over the finished buffer, never
    // folded into the parallel sampling loop.
    self.is_air = field.iter().all(|&s| s > ISO_LEVEL);
    self.is_ground = field.iter().all(|&s| s < ISO_LEVEL);
  }
}

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;
