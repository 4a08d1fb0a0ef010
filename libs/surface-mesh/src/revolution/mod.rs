//! # Surfaces of Revolution
//!
//! Rotates a planar profile around the y-axis. A profile point `(px, py)`
//! at angle `t` lands on `(px·cos t, py, px·sin t)`; the profile is either a
//! radius as a function of height, `r = r(y)`, or a parametric curve
//! `(px(s), py(s))`.
//!
//! Nothing here samples or connects vertices. The profile is turned into
//! three component functions and handed to [`ParametricSurface`], so the
//! first parameter walks along the profile (circles of latitude) and the
//! second walks around the axis (lines of longitude).

use crate::error::MeshResult;
use crate::mesh::WireframeMesh;
use crate::resolution::{Resamplable, Resolution};
use crate::surface::{ParameterBounds, ParametricSurface, SurfaceFunctions};
use config::constants::{DEFAULT_PARAMETER_RANGE, DEFAULT_REVOLUTION_RANGE};
use std::f64::consts::PI;
use std::sync::Arc;

/// Component functions of the surface swept by radius function `r(y)`.
///
/// `x = r(y)·cos t`, `y = y`, `z = r(y)·sin t`.
pub fn height_profile_functions<R>(radius: R) -> SurfaceFunctions
where
    R: Fn(f64) -> f64 + Send + Sync + 'static,
{
    let radius = Arc::new(radius);
    let rx = Arc::clone(&radius);
    SurfaceFunctions::new(
        move |y, t| rx(y) * t.cos(),
        |y, _| y,
        move |y, t| radius(y) * t.sin(),
    )
}

/// Component functions of the surface swept by the curve `(px(s), py(s))`.
///
/// `x = px(s)·cos t`, `y = py(s)`, `z = px(s)·sin t`.
pub fn planar_curve_functions<X, Y>(px: X, py: Y) -> SurfaceFunctions
where
    X: Fn(f64) -> f64 + Send + Sync + 'static,
    Y: Fn(f64) -> f64 + Send + Sync + 'static,
{
    let px = Arc::new(px);
    let pxz = Arc::clone(&px);
    SurfaceFunctions::new(
        move |s, t| px(s) * t.cos(),
        move |s, _| py(s),
        move |s, t| pxz(s) * t.sin(),
    )
}

/// Builds the wireframe of the surface swept by `r(y)` over
/// `[y1, y2] × [theta1, theta2]`.
///
/// # Errors
///
/// [`MeshError::InvalidResolution`](crate::MeshError::InvalidResolution)
/// if `n < 2` or `k < 2`.
#[allow(clippy::too_many_arguments)]
pub fn revolve_height_profile<R>(
    radius: R,
    y1: f64,
    y2: f64,
    theta1: f64,
    theta2: f64,
    n: usize,
    k: usize,
) -> MeshResult<WireframeMesh>
where
    R: Fn(f64) -> f64 + Send + Sync + 'static,
{
    SurfaceOfRevolution::from_height_profile_sector(radius, y1, y2, theta1, theta2, n, k)
        .map(SurfaceOfRevolution::into_mesh)
}

/// Builds the wireframe of the surface swept by `(px(s), py(s))` over
/// `[s1, s2] × [theta1, theta2]`.
///
/// # Errors
///
/// [`MeshError::InvalidResolution`](crate::MeshError::InvalidResolution)
/// if `n < 2` or `k < 2`.
#[allow(clippy::too_many_arguments)]
pub fn revolve_planar_curve<X, Y>(
    px: X,
    py: Y,
    s1: f64,
    s2: f64,
    theta1: f64,
    theta2: f64,
    n: usize,
    k: usize,
) -> MeshResult<WireframeMesh>
where
    X: Fn(f64) -> f64 + Send + Sync + 'static,
    Y: Fn(f64) -> f64 + Send + Sync + 'static,
{
    SurfaceOfRevolution::from_planar_curve_sector(px, py, s1, s2, theta1, theta2, n, k)
        .map(SurfaceOfRevolution::into_mesh)
}

/// A surface of revolution around the y-axis.
///
/// `n` is the number of circles of latitude, `k` the number of lines of
/// longitude. A full turn samples both `0` and `2π`, so the first and last
/// lines of longitude coincide and are left unjoined.
///
/// Every constructor, `Default` and `remake` name the mesh
/// `SurfaceOfRevolution(n,k)`, replacing the `Parametric Surface(n,k)` name
/// of the wrapped surface.
///
/// # Example
///
/// ```rust
/// use surface_mesh::{Resamplable, SurfaceOfRevolution};
///
/// // Unit cylinder of height 1
/// let cylinder = SurfaceOfRevolution::from_height_profile(|_| 1.0, 0.0, 1.0, 2, 4).unwrap();
/// assert_eq!(cylinder.mesh().vertex_count(), 8);
/// assert_eq!(cylinder.mesh().name(), "SurfaceOfRevolution(2,4)");
///
/// let finer = cylinder.remake(3, 16).unwrap();
/// assert_eq!(finer.mesh().vertex_count(), 48);
/// ```
#[derive(Debug, Clone)]
pub struct SurfaceOfRevolution {
    surface: ParametricSurface,
}

impl SurfaceOfRevolution {
    /// Full revolution of the radius function `r(y)` over `[y1, y2]`.
    pub fn from_height_profile<R>(radius: R, y1: f64, y2: f64, n: usize, k: usize) -> MeshResult<Self>
    where
        R: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        let (theta1, theta2) = DEFAULT_REVOLUTION_RANGE;
        Self::from_height_profile_sector(radius, y1, y2, theta1, theta2, n, k)
    }

    /// Revolution of `r(y)` over `[y1, y2]` through the sector `[theta1, theta2]`.
    #[allow(clippy::too_many_arguments)]
    pub fn from_height_profile_sector<R>(
        radius: R,
        y1: f64,
        y2: f64,
        theta1: f64,
        theta2: f64,
        n: usize,
        k: usize,
    ) -> MeshResult<Self>
    where
        R: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        ParametricSurface::from_functions(
            height_profile_functions(radius),
            ParameterBounds::new(y1, y2, theta1, theta2),
            n,
            k,
        )
        .map(Self::wrap)
    }

    /// Full revolution of the curve `(px(s), py(s))` over `[s1, s2]`.
    pub fn from_planar_curve<X, Y>(px: X, py: Y, s1: f64, s2: f64, n: usize, k: usize) -> MeshResult<Self>
    where
        X: Fn(f64) -> f64 + Send + Sync + 'static,
        Y: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        let (theta1, theta2) = DEFAULT_REVOLUTION_RANGE;
        Self::from_planar_curve_sector(px, py, s1, s2, theta1, theta2, n, k)
    }

    /// Revolution of `(px(s), py(s))` over `[s1, s2]` through the sector
    /// `[theta1, theta2]`.
    #[allow(clippy::too_many_arguments)]
    pub fn from_planar_curve_sector<X, Y>(
        px: X,
        py: Y,
        s1: f64,
        s2: f64,
        theta1: f64,
        theta2: f64,
        n: usize,
        k: usize,
    ) -> MeshResult<Self>
    where
        X: Fn(f64) -> f64 + Send + Sync + 'static,
        Y: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        ParametricSurface::from_functions(
            planar_curve_functions(px, py),
            ParameterBounds::new(s1, s2, theta1, theta2),
            n,
            k,
        )
        .map(Self::wrap)
    }

    // Single place that applies the revolution name
    fn wrap(surface: ParametricSurface) -> Self {
        let resolution = surface.resolution();
        let name = format!("SurfaceOfRevolution({},{})", resolution.n(), resolution.k());
        Self {
            surface: surface.renamed(name),
        }
    }

    /// The sampled wireframe.
    #[inline]
    pub fn mesh(&self) -> &WireframeMesh {
        self.surface.mesh()
    }

    /// Consumes the surface, returning its wireframe.
    pub fn into_mesh(self) -> WireframeMesh {
        self.surface.into_mesh()
    }

    /// The underlying parametric surface.
    #[inline]
    pub fn surface(&self) -> &ParametricSurface {
        &self.surface
    }

    /// Range along the profile.
    #[inline]
    pub fn profile_range(&self) -> (f64, f64) {
        self.surface.s_range()
    }

    /// Angular range of the sweep.
    #[inline]
    pub fn theta_range(&self) -> (f64, f64) {
        self.surface.t_range()
    }

    /// Current resolution.
    #[inline]
    pub fn resolution(&self) -> Resolution {
        self.surface.resolution()
    }
}

impl Default for SurfaceOfRevolution {
    /// Cosine bump `r(y) = ½(1 + cos πy)` over `[-1, 1]`, 49×49.
    fn default() -> Self {
        let (y1, y2) = DEFAULT_PARAMETER_RANGE;
        let (theta1, theta2) = DEFAULT_REVOLUTION_RANGE;
        let functions = height_profile_functions(|y| 0.5 * (1.0 + (PI * y).cos()));
        let bounds = ParameterBounds::new(y1, y2, theta1, theta2);
        Self::wrap(ParametricSurface::sampled(functions, bounds, Resolution::DEFAULT))
    }
}

impl Resamplable for SurfaceOfRevolution {
    fn horizontal_count(&self) -> usize {
        self.surface.horizontal_count()
    }

    fn vertical_count(&self) -> usize {
        self.surface.vertical_count()
    }

    fn remake(&self, n: usize, k: usize) -> MeshResult<Self> {
        self.surface.remake(n, k).map(Self::wrap)
    }
}
