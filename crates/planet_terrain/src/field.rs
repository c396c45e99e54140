//! Density field sources.
//!
//! A [`DensityField`] is the injected shape function of the grid: a pure
//! scalar field over 3D space whose zero level-set is the surface being
//! meshed. Negative values are ground, positive values are air.
//!
//! The analytic shapes here are deterministic and easy to verify visually.
//! They double as test fixtures and as ready-made generators for callers that
//! do not bring their own noise stack.

/// A signed density/shape function.
///
/// # Contract
///
/// `sample` must be pure and thread-safe: the grid evaluates it concurrently
/// for arbitrary coordinate triples with no ordering guarantee between calls.
pub trait DensityField: Send + Sync {
  /// Evaluate the field at a point. Negative = ground, positive = air.
  fn sample(&self, x: f64, y: f64, z: f64) -> f64;
}

/// Any thread-safe closure is a density field.
impl<F> DensityField for F
where
  F: Fn(f64, f64, f64) -> f64 + Send + Sync,
{
  #[inline(always)]
  fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
    self(x, y, z)
  }
}

/// Sphere density field: negative inside the sphere.
///
/// `|p - centre|² - radius²`, the squared-distance variant used by the
/// end-to-end tests. Not a true SDF, but its zero set is the sphere surface
/// and its gradient points outward, which is all the mesher requires.
#[derive(Clone, Copy, Debug)]
pub struct Sphere {
  pub centre: [f64; 3],
  pub radius: f64,
}

impl Sphere {
  pub fn new(radius: f64) -> Self {
    Self {
      centre: [0.0, 0.0, 0.0],
      radius,
    }
  }

  pub fn with_centre(mut self, centre: [f64; 3]) -> Self {
    self.centre = centre;
    self
  }
}

impl DensityField for Sphere {
  #[inline]
  fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
    let dx = x - self.centre[0];
    let dy = y - self.centre[1];
    let dz = z - self.centre[2];
    dx * dx + dy * dy + dz * dz - self.radius * self.radius
  }
}

/// Horizontal ground plane: negative below `height`, positive above.
#[derive(Clone, Copy, Debug, Default)]
pub struct GroundPlane {
  pub height: f64,
}

impl GroundPlane {
  pub fn new(height: f64) -> Self {
    Self { height }
  }
}

impl DensityField for GroundPlane {
  #[inline]
  fn sample(&self, _x: f64, y: f64, _z: f64) -> f64 {
    y - self.height
  }
}

/// Uniform field. `Constant(1.0)` is all air, `Constant(-1.0)` all ground.
#[derive(Clone, Copy, Debug)]
pub struct Constant(pub f64);

impl DensityField for Constant {
  #[inline(always)]
  fn sample(&self, _x: f64, _y: f64, _z: f64) -> f64 {
    self.0
  }
}
