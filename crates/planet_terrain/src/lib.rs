//! planet_terrain - adaptive octree density grid + isosurface mesher
//!
//! This crate is the terrain core for planet-scale voxel bodies: an adaptive
//! octree ([`Grid`]) whose cells hold dense signed-density fields sampled
//! from an injected shape function ([`DensityField`]), and a table-driven
//! mesher that turns each cell's field into a triangle soup with per-vertex
//! normals.
//!
//! # Features
//!
//! - **Octree addressing**: string tags over A..H, position → path mapping,
//!   and closest-ancestor neighbor resolution across refinement boundaries
//! - **Parallel sampling**: rayon-parallel density evaluation with a
//!   deterministic air/ground classification pass
//! - **Regular-cell extraction**: corner-mask lookup tables, per-edge vertex
//!   interpolation, and gradient-blended normals
//!
//! # Example
//!
//! ```ignore
//! use planet_terrain::{Grid, Sphere};
//!
//! let mut grid = Grid::new(Sphere::new(0.5), 4)?;
//! let mesh = grid.visit(grid.root());
//!
//! println!("{} triangles", mesh.triangle_count());
//! ```
//!
//! Mesh positions are cell-local (`[-0.5, 0.5]³`); the GPU-upload side
//! scales them by the cell's world width and offsets by its centre.

pub mod constants;
pub mod tables;

pub mod field;
pub use field::{Constant, DensityField, GroundPlane, Sphere};

pub mod path;
pub use path::{octant_index, tag_for_position, CellTag};

pub mod cell;
pub use cell::{Cell, CellId, FieldBuffer};

pub mod grid;
pub use grid::{Grid, GridError};

pub mod mesher;
pub use mesher::CellMesh;
