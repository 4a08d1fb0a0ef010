//! # Parametric Surfaces
//!
//! Samples a surface `x = x(s,t)`, `y = y(s,t)`, `z = z(s,t)` over a
//! rectangular parameter domain and joins grid neighbours with segments.
//!
//! ## Algorithm
//!
//! For a resolution `(n, k)` the parameter steps are
//! `ds = (s2 - s1) / (n - 1)` and `dt = (t2 - t1) / (k - 1)`. Sample
//! `(i, j)` is taken at `(s1 + i*ds, t1 + j*dt)` and stored at flat index
//! `i*k + j`:
//!
//! ```text
//!   j →   0     1     2
//! i=0     0 ─── 1 ─── 2      horizontal: (i,j) ─ (i,j+1)
//!         │     │     │
//! i=1     3 ─── 4 ─── 5      vertical:   (i,j) │ (i+1,j)
//! ```
//!
//! All horizontal segments are emitted first (row by row), then all
//! vertical segments (column by column). Nothing wraps around: a closed
//! surface is obtained by choosing a parameter range whose ends coincide.

use crate::error::MeshResult;
use crate::mesh::WireframeMesh;
use crate::resolution::{Resamplable, Resolution};
use config::constants::DEFAULT_PARAMETER_RANGE;
use glam::DVec3;
use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;

/// A component function of two real parameters.
pub type SurfaceFn = Arc<dyn Fn(f64, f64) -> f64 + Send + Sync>;

/// The three component functions of a parametric surface.
///
/// Functions are shared, never mutated, and may be called from several
/// threads at once, so they must be pure for results to be reproducible.
#[derive(Clone)]
pub struct SurfaceFunctions {
    x: SurfaceFn,
    y: SurfaceFn,
    z: SurfaceFn,
}

impl SurfaceFunctions {
    /// Bundles three component functions.
    pub fn new<X, Y, Z>(x: X, y: Y, z: Z) -> Self
    where
        X: Fn(f64, f64) -> f64 + Send + Sync + 'static,
        Y: Fn(f64, f64) -> f64 + Send + Sync + 'static,
        Z: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            x: Arc::new(x),
            y: Arc::new(y),
            z: Arc::new(z),
        }
    }

    /// The graph `y = f(x, z)`: `x(s,t) = s`, `y(s,t) = f(s,t)`, `z(s,t) = t`.
    pub fn graph<F>(f: F) -> Self
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        Self::new(|s, _| s, f, |_, t| t)
    }

    /// Evaluates all three components at `(s, t)`.
    ///
    /// Values are passed through unchecked, including NaN and infinities.
    #[inline]
    pub fn evaluate(&self, s: f64, t: f64) -> DVec3 {
        DVec3::new((self.x)(s, t), (self.y)(s, t), (self.z)(s, t))
    }
}

impl fmt::Debug for SurfaceFunctions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceFunctions").finish_non_exhaustive()
    }
}

/// Rectangular parameter domain `[s1, s2] × [t1, t2]`.
///
/// Reversed ranges (`s2 < s1`) are allowed and simply sample backwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterBounds {
    /// Start of the first parameter range
    pub s1: f64,
    /// End of the first parameter range
    pub s2: f64,
    /// Start of the second parameter range
    pub t1: f64,
    /// End of the second parameter range
    pub t2: f64,
}

impl ParameterBounds {
    /// Creates a parameter domain.
    pub fn new(s1: f64, s2: f64, t1: f64, t2: f64) -> Self {
        Self { s1, s2, t1, t2 }
    }

    /// Parameter steps `(ds, dt)` for the given resolution.
    #[inline]
    pub fn steps(&self, resolution: Resolution) -> (f64, f64) {
        (
            (self.s2 - self.s1) / (resolution.n() - 1) as f64,
            (self.t2 - self.t1) / (resolution.k() - 1) as f64,
        )
    }
}

impl Default for ParameterBounds {
    fn default() -> Self {
        let (start, end) = DEFAULT_PARAMETER_RANGE;
        Self::new(start, end, start, end)
    }
}

/// Samples a surface over `bounds` into a new wireframe mesh.
///
/// The resolution is already validated, so this cannot fail.
pub fn sample_surface(
    functions: &SurfaceFunctions,
    bounds: ParameterBounds,
    resolution: Resolution,
    name: impl Into<String>,
) -> WireframeMesh {
    let mut mesh = WireframeMesh::with_capacity(
        name,
        resolution.vertex_count(),
        resolution.horizontal_segment_count() + resolution.vertical_segment_count(),
    );

    for position in sample_vertices(functions, bounds, resolution) {
        mesh.add_vertex(position);
    }

    let (n, k) = (resolution.n(), resolution.k());
    // Resolution::new caps n * k at MAX_GRID_VERTICES, so the cast is lossless
    let flat = |i: usize, j: usize| resolution.flat_index(i, j) as u32;

    // Horizontal segments, along t
    for i in 0..n {
        for j in 0..k - 1 {
            mesh.add_segment(flat(i, j), flat(i, j + 1));
        }
    }

    // Vertical segments, along s
    for j in 0..k {
        for i in 0..n - 1 {
            mesh.add_segment(flat(i, j), flat(i + 1, j));
        }
    }

    log::debug!(
        "sampled {}: {} vertices, {} segments",
        mesh.name(),
        mesh.vertex_count(),
        mesh.segment_count()
    );

    mesh
}

/// Evaluates every grid sample in row-major order.
#[cfg(not(feature = "parallel"))]
fn sample_vertices(
    functions: &SurfaceFunctions,
    bounds: ParameterBounds,
    resolution: Resolution,
) -> Vec<DVec3> {
    let (ds, dt) = bounds.steps(resolution);
    let mut vertices = Vec::with_capacity(resolution.vertex_count());
    for i in 0..resolution.n() {
        let s = bounds.s1 + i as f64 * ds;
        for j in 0..resolution.k() {
            let t = bounds.t1 + j as f64 * dt;
            vertices.push(functions.evaluate(s, t));
        }
    }
    vertices
}

/// Evaluates every grid sample in row-major order, one row per task.
#[cfg(feature = "parallel")]
fn sample_vertices(
    functions: &SurfaceFunctions,
    bounds: ParameterBounds,
    resolution: Resolution,
) -> Vec<DVec3> {
    use rayon::prelude::*;

    let (ds, dt) = bounds.steps(resolution);
    let k = resolution.k();
    // Ordered collect keeps the row-major layout of the serial path
    (0..resolution.n())
        .into_par_iter()
        .flat_map_iter(|i| {
            let s = bounds.s1 + i as f64 * ds;
            (0..k).map(move |j| functions.evaluate(s, bounds.t1 + j as f64 * dt))
        })
        .collect()
}

/// Builds the wireframe of a parametric surface.
///
/// # Arguments
///
/// * `x`, `y`, `z` - Component functions of `(s, t)`
/// * `s1`, `s2` - First parameter range
/// * `t1`, `t2` - Second parameter range
/// * `n` - Number of lines along the first parameter (>= 2)
/// * `k` - Number of lines along the second parameter (>= 2)
///
/// # Errors
///
/// [`MeshError::InvalidResolution`](crate::MeshError::InvalidResolution)
/// if `n < 2` or `k < 2`. No functions are evaluated in that case.
///
/// # Example
///
/// ```rust
/// use surface_mesh::build;
///
/// let mesh = build(|s, _| s, |_, _| 0.0, |_, t| t, -1.0, 1.0, -1.0, 1.0, 2, 2).unwrap();
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.segment_count(), 4);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn build<X, Y, Z>(
    x: X,
    y: Y,
    z: Z,
    s1: f64,
    s2: f64,
    t1: f64,
    t2: f64,
    n: usize,
    k: usize,
) -> MeshResult<WireframeMesh>
where
    X: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    Y: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    Z: Fn(f64, f64) -> f64 + Send + Sync + 'static,
{
    ParametricSurface::new(x, y, z, s1, s2, t1, t2, n, k).map(ParametricSurface::into_mesh)
}

/// A parametric surface together with the mesh sampled from it.
///
/// The descriptor (functions, bounds, resolution) is kept so the surface
/// can be resampled through [`Resamplable::remake`].
#[derive(Debug, Clone)]
pub struct ParametricSurface {
    functions: SurfaceFunctions,
    bounds: ParameterBounds,
    resolution: Resolution,
    mesh: WireframeMesh,
}

impl ParametricSurface {
    /// Creates a parametric surface in space.
    ///
    /// # Example
    ///
    /// ```rust
    /// use surface_mesh::ParametricSurface;
    ///
    /// let plane = ParametricSurface::new(
    ///     |s, _| s, |_, _| 0.0, |_, t| t,
    ///     0.0, 1.0, 0.0, 1.0,
    ///     3, 4,
    /// ).unwrap();
    /// assert_eq!(plane.mesh().name(), "Parametric Surface(3,4)");
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new<X, Y, Z>(
        x: X,
        y: Y,
        z: Z,
        s1: f64,
        s2: f64,
        t1: f64,
        t2: f64,
        n: usize,
        k: usize,
    ) -> MeshResult<Self>
    where
        X: Fn(f64, f64) -> f64 + Send + Sync + 'static,
        Y: Fn(f64, f64) -> f64 + Send + Sync + 'static,
        Z: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        Self::from_functions(
            SurfaceFunctions::new(x, y, z),
            ParameterBounds::new(s1, s2, t1, t2),
            n,
            k,
        )
    }

    /// Creates the graph of `y = f(x, z)` over `[x1, x2] × [z1, z2]`.
    pub fn from_graph<F>(
        f: F,
        x1: f64,
        x2: f64,
        z1: f64,
        z2: f64,
        n: usize,
        k: usize,
    ) -> MeshResult<Self>
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        Self::from_functions(
            SurfaceFunctions::graph(f),
            ParameterBounds::new(x1, x2, z1, z2),
            n,
            k,
        )
    }

    /// Creates a surface from prepared component functions.
    pub fn from_functions(
        functions: SurfaceFunctions,
        bounds: ParameterBounds,
        n: usize,
        k: usize,
    ) -> MeshResult<Self> {
        let resolution = Resolution::new(n, k)?;
        Ok(Self::sampled(functions, bounds, resolution))
    }

    pub(crate) fn sampled(
        functions: SurfaceFunctions,
        bounds: ParameterBounds,
        resolution: Resolution,
    ) -> Self {
        let name = format!("Parametric Surface({},{})", resolution.n(), resolution.k());
        let mesh = sample_surface(&functions, bounds, resolution, name);
        Self {
            functions,
            bounds,
            resolution,
            mesh,
        }
    }

    pub(crate) fn renamed(mut self, name: impl Into<String>) -> Self {
        self.mesh.set_name(name);
        self
    }

    /// The sampled wireframe.
    #[inline]
    pub fn mesh(&self) -> &WireframeMesh {
        &self.mesh
    }

    /// Consumes the surface, returning its wireframe.
    pub fn into_mesh(self) -> WireframeMesh {
        self.mesh
    }

    /// The component functions.
    #[inline]
    pub fn functions(&self) -> &SurfaceFunctions {
        &self.functions
    }

    /// The parameter domain.
    #[inline]
    pub fn bounds(&self) -> ParameterBounds {
        self.bounds
    }

    /// First parameter range `(s1, s2)`.
    #[inline]
    pub fn s_range(&self) -> (f64, f64) {
        (self.bounds.s1, self.bounds.s2)
    }

    /// Second parameter range `(t1, t2)`.
    #[inline]
    pub fn t_range(&self) -> (f64, f64) {
        (self.bounds.t1, self.bounds.t2)
    }

    /// Current resolution.
    #[inline]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }
}

impl Default for ParametricSurface {
    /// Graph of `y = sin(πx)·sin(πz)` over `[-1, 1]²`.
    fn default() -> Self {
        Self::sampled(
            SurfaceFunctions::graph(|s, t| (PI * s).sin() * (PI * t).sin()),
            ParameterBounds::default(),
            Resolution::DEFAULT,
        )
    }
}

impl Resamplable for ParametricSurface {
    fn horizontal_count(&self) -> usize {
        self.resolution.n()
    }

    fn vertical_count(&self) -> usize {
        self.resolution.k()
    }

    fn remake(&self, n: usize, k: usize) -> MeshResult<Self> {
        log::trace!("remaking {} at ({n},{k})", self.mesh.name());
        let resolution = Resolution::new(n, k)?;
        Ok(Self::sampled(self.functions.clone(), self.bounds, resolution))
    }
}

#[cfg(test)]
mod tests;
