//! Octree addressing: tags, octant selection, and position → path mapping.
//!
//! A cell's address is its path from the root, one octant per level. Tags
//! render as strings over A..H (the root is the empty string), which keeps
//! registry keys human-readable in logs and tests.

use std::fmt;

use glam::DVec3;
use smallvec::SmallVec;

use crate::constants::{CHILD_OFFSETS, MAX_DEPTH};

/// Octree path from the root, one octant (0..=7) per level.
///
/// Displays as a string over A..H; depth equals the tag length. The inline
/// capacity covers the full [`MAX_DEPTH`](crate::constants::MAX_DEPTH), so
/// tags never allocate.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct CellTag(SmallVec<[u8; MAX_DEPTH as usize]>);

impl CellTag {
  /// The root tag (empty path).
  pub fn root() -> Self {
    Self::default()
  }

  /// Tag of the child in the given octant.
  pub fn child(&self, octant: u8) -> Self {
    debug_assert!(octant < 8);
    let mut octants = self.0.clone();
    octants.push(octant);
    Self(octants)
  }

  /// Depth of the cell this tag addresses (root = 0).
  pub fn depth(&self) -> u32 {
    self.0.len() as u32
  }

  pub fn is_root(&self) -> bool {
    self.0.is_empty()
  }

  /// The path as raw octant indices.
  pub fn octants(&self) -> &[u8] {
    &self.0
  }

  /// True if `self` addresses `other` or one of its ancestors.
  pub fn is_prefix_of(&self, other: &[u8]) -> bool {
    other.len() >= self.0.len() && self.0.iter().zip(other).all(|(a, b)| a == b)
  }
}

impl FromIterator<u8> for CellTag {
  fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}

impl fmt::Display for CellTag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for &octant in &self.0 {
      write!(f, "{}", (b'A' + octant) as char)?;
    }
    Ok(())
  }
}

impl fmt::Debug for CellTag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "CellTag(\"{self}\")")
  }
}

/// Octant of a normalized local position with each axis in (-1, 1).
///
/// The exact truth table is load-bearing: consumers index
/// [`CHILD_OFFSETS`] with the result, so the eight sign combinations must map
/// to exactly these indices:
///
/// ```text
/// (-,-,-) → 0   (+,-,-) → 1   (-,+,-) → 2   (+,+,-) → 3
/// (-,-,+) → 4   (+,-,+) → 5   (-,+,+) → 6   (+,+,+) → 7
/// ```
#[inline]
pub fn octant_index(p: DVec3) -> u8 {
  let left = p.x < 0.0;
  let down = p.y < 0.0;
  let back = p.z < 0.0;

  if left {
    if down {
      if back {
        0
      } else {
        4
      }
    } else if back {
      2
    } else {
      6
    }
  } else if down {
    if back {
      1
    } else {
      5
    }
  } else if back {
    3
  } else {
    7
  }
}

/// Map a root-local position to the path of the cell containing it at the
/// given depth.
///
/// Returns `None` when the position lies outside the root domain (any axis
/// with |coordinate| ≥ 1) — the caller-visible signal for "no such cell".
/// At depth 0 every in-domain position maps to the root (empty tag).
///
/// Each iteration picks the octant of the current sample position, then
/// reprojects the position from the chosen child's half-window back into
/// `[-1, 1]³` for the next level (iterative zoom).
pub fn tag_for_position(position: DVec3, depth: u32) -> Option<CellTag> {
  if position.x.abs() >= 1.0 || position.y.abs() >= 1.0 || position.z.abs() >= 1.0 {
    return None;
  }

  let mut tag = CellTag::root();
  let mut p = position;
  for _ in 0..depth {
    let octant = octant_index(p);
    tag = tag.child(octant);
    // Child centre is at CHILD_OFFSETS[octant] with half-width 0.5; remap the
    // child's window onto [-1, 1] for the next iteration.
    p = (p - CHILD_OFFSETS[octant as usize]) * 2.0;
  }
  Some(tag)
}

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;
