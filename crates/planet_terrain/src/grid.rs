//! The adaptive octree grid.
//!
//! [`Grid`] owns the cell arena, the tag-keyed registry of the current
//! unsplit frontier, and the injected density generator. All parent/child
//! links are arena indices ([`CellId`]), so concurrent readers never chase
//! dangling pointers.
//!
//! # Concurrency contract
//!
//! Density sampling inside [`Grid::fill_cell`] is rayon-parallel and joins
//! before returning. The registry is lock-guarded so background threads may
//! query the frontier while cells are being created. Tree-shape mutation
//! (`subdivide`) assumes a single mutator at a time; callers that want to
//! subdivide and mesh spatially overlapping regions concurrently must add
//! their own per-subtree lock on top — this core does not provide one.

use std::collections::HashMap;
use std::sync::RwLock;

use glam::DVec3;
use thiserror::Error;

use crate::cell::{Cell, CellId, FieldBuffer};
use crate::constants::{cell_scale, CHILD_OFFSETS, FIELD_LEN, MAX_DEPTH};
use crate::field::DensityField;
use crate::mesher::{self, CellMesh, Neighborhood};
use crate::path::{tag_for_position, CellTag};

/// Substitute field for neighbor queries that leave the root domain:
/// constant air, so the surface closes cleanly at the world boundary.
static AIR_FIELD: FieldBuffer = [1.0; FIELD_LEN];

/// Construction-time misuse. Hot-path queries never return errors; they
/// degrade to `None`/coarser cells instead.
#[derive(Debug, Error)]
pub enum GridError {
  #[error("max subdivision {requested} exceeds the supported depth cap {max}")]
  DepthOutOfRange { requested: u32, max: u32 },
}

/// Adaptive octree of density cells with an injected shape function.
pub struct Grid {
  cells: Vec<Cell>,
  /// Tag → id of every cell that has not split yet (the current frontier).
  registry: RwLock<HashMap<CellTag, CellId>>,
  generator: Box<dyn DensityField>,
  max_subdivision: u32,
}

impl Grid {
  /// Create a grid with its root cell registered.
  ///
  /// Fails immediately if `max_subdivision` exceeds [`MAX_DEPTH`]; a missing
  /// generator is unrepresentable by construction.
  pub fn new(
    generator: impl DensityField + 'static,
    max_subdivision: u32,
  ) -> Result<Self, GridError> {
    if max_subdivision > MAX_DEPTH {
      return Err(GridError::DepthOutOfRange {
        requested: max_subdivision,
        max: MAX_DEPTH,
      });
    }

    let root = Cell::new(CellTag::root(), DVec3::ZERO, None);
    let mut registry = HashMap::new();
    registry.insert(CellTag::root(), CellId::ROOT);

    Ok(Self {
      cells: vec![root],
      registry: RwLock::new(registry),
      generator: Box::new(generator),
      max_subdivision,
    })
  }

  pub fn root(&self) -> CellId {
    CellId::ROOT
  }

  pub fn max_subdivision(&self) -> u32 {
    self.max_subdivision
  }

  /// Borrow a cell by id. Ids never dangle: cells are arena-allocated and
  /// only ever added.
  pub fn cell(&self, id: CellId) -> &Cell {
    &self.cells[id.index()]
  }

  /// Total cells ever created (split cells included).
  pub fn cell_count(&self) -> usize {
    self.cells.len()
  }

  /// Look up an unsplit cell by tag.
  pub fn lookup(&self, tag: &CellTag) -> Option<CellId> {
    self.registry.read().unwrap().get(tag).copied()
  }

  /// Snapshot of the current unsplit frontier.
  pub fn frontier(&self) -> Vec<(CellTag, CellId)> {
    self
      .registry
      .read()
      .unwrap()
      .iter()
      .map(|(tag, &id)| (tag.clone(), id))
      .collect()
  }

  /// Split a cell into its 8 children.
  ///
  /// Children are appended to the arena and replace their parent in the
  /// registry. Returns `None` without touching anything when the cell is
  /// already split or sits at the depth cap — callers must check.
  pub fn subdivide(&mut self, id: CellId) -> Option<[CellId; 8]> {
    let (tag, centre, depth) = {
      let cell = self.cell(id);
      if !cell.splittable(self.max_subdivision) {
        return None;
      }
      (cell.tag().clone(), cell.centre(), cell.depth())
    };

    // Child centres sit half a parent-extent away along each axis.
    let parent_scale = cell_scale(depth);
    let mut children = [CellId::ROOT; 8];
    for octant in 0..8u8 {
      let child_id = CellId(self.cells.len() as u32);
      let child_tag = tag.child(octant);
      let child_centre = centre + CHILD_OFFSETS[octant as usize] * parent_scale;
      self
        .cells
        .push(Cell::new(child_tag, child_centre, Some(id)));
      children[octant as usize] = child_id;
    }
    self.cells[id.index()].set_children(children);

    {
      let mut registry = self.registry.write().unwrap();
      registry.remove(&tag);
      for &child_id in &children {
        registry.insert(self.cells[child_id.index()].tag().clone(), child_id);
      }
    }

    Some(children)
  }

  /// Recursively subdivide until `target_depth`; silently stops at the depth
  /// cap. Descends into already-split cells.
  pub fn subdivide_to_depth(&mut self, id: CellId, target_depth: u32) {
    if self.cell(id).depth() >= target_depth {
      return;
    }
    let children = match self.subdivide(id) {
      Some(children) => children,
      None => match self.cell(id).children() {
        Some(children) => *children,
        None => return, // at the depth cap
      },
    };
    for child in children {
      self.subdivide_to_depth(child, target_depth);
    }
  }

  /// Tag of the same-depth neighbor `(dx, dy, dz)` cells away, whether or not
  /// that cell exists. `None` when the region lies outside the root domain.
  pub fn neighbor_tag(&self, id: CellId, dx: i32, dy: i32, dz: i32) -> Option<CellTag> {
    let cell = self.cell(id);
    if dx == 0 && dy == 0 && dz == 0 {
      return Some(cell.tag().clone());
    }
    let depth = cell.depth();
    let shift = DVec3::new(dx as f64, dy as f64, dz as f64) * (cell_scale(depth) * 2.0);
    tag_for_position(cell.centre() + shift, depth)
  }

  /// Walk `path` from the root, stopping at the first unsplit cell.
  ///
  /// The returned cell's tag is always a prefix of `path`: queries below the
  /// local refinement level coarsen gracefully to the closest existing
  /// ancestor. At refinement boundaries this is a known source of mesh
  /// seams, preserved by design.
  pub fn find_cell_or_closest(&self, path: &[u8]) -> CellId {
    let mut id = CellId::ROOT;
    for &octant in path {
      match self.cell(id).children() {
        Some(children) => id = children[octant as usize],
        None => break,
      }
    }
    id
  }

  /// Sample the generator into the cell's density buffer (idempotent).
  pub fn fill_cell(&mut self, id: CellId) {
    let generator = &*self.generator;
    self.cells[id.index()].fill(generator);
  }

  /// Mesh one cell's density field into a triangle soup.
  ///
  /// Gathers the 3×3×3 block of same-depth neighbor fields (coarsening to
  /// the closest existing ancestor where the tree is shallower, substituting
  /// constant air outside the root domain), filling any missing buffers on
  /// demand, then runs the table-driven extraction. Repeated calls on an
  /// unchanged grid produce byte-identical output.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "grid::visit"))]
  pub fn visit(&mut self, id: CellId) -> CellMesh {
    let mut neighbors: [Option<CellId>; 27] = [None; 27];
    for dz in -1..=1 {
      for dy in -1..=1 {
        for dx in -1..=1 {
          let slot = mesher::neighborhood_slot(dx, dy, dz);
          neighbors[slot] = self
            .neighbor_tag(id, dx, dy, dz)
            .map(|tag| self.find_cell_or_closest(tag.octants()));
        }
      }
    }

    for neighbor in neighbors.iter().flatten() {
      if !self.cell(*neighbor).is_filled() {
        self.fill_cell(*neighbor);
      }
    }

    let fields: [&FieldBuffer; 27] = std::array::from_fn(|slot| {
      neighbors[slot]
        .and_then(|neighbor| self.cell(neighbor).density())
        .unwrap_or(&AIR_FIELD)
    });

    mesher::extract(&Neighborhood::new(fields))
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
