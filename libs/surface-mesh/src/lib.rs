//! # Surface Mesh
//!
//! Wireframe meshes of parametric surfaces.
//!
//! ## Architecture
//!
//! ```text
//! component functions + ranges + (n, k) → sampler → WireframeMesh
//!                                            ↑
//!            profile r(y) or (px(s), py(s)) ─┘ (surfaces of revolution)
//! ```
//!
//! - [`surface`]: samples `x(s,t)`, `y(s,t)`, `z(s,t)` on an `n × k` grid
//!   and connects grid neighbours with line segments
//! - [`revolution`]: composes a planar profile with a rotation angle and
//!   forwards to the sampler
//! - [`Resamplable`]: regenerates a mesh of the same kind at a new resolution
//!
//! No faces, normals or clipping are produced; the rendering side consumes
//! the vertex list and segment list as they are.
//!
//! ## Usage
//!
//! ```rust
//! use surface_mesh::{build, Resamplable, SurfaceOfRevolution};
//!
//! let square = build(|s, _| s, |_, _| 0.0, |_, t| t, -1.0, 1.0, -1.0, 1.0, 2, 2)?;
//! assert_eq!(square.segment_count(), 4);
//!
//! let lens = SurfaceOfRevolution::default();
//! assert_eq!(lens.mesh().vertex_count(), 49 * 49);
//! let coarse = lens.remake(10, 20)?;
//! assert_eq!(coarse.mesh().vertex_count(), 200);
//! # Ok::<(), surface_mesh::MeshError>(())
//! ```
//!
//! ## Features
//!
//! - `parallel`: evaluate grid rows on the rayon thread pool. Component
//!   functions are then called from several threads at once.

pub mod error;
pub mod mesh;
pub mod resolution;
pub mod revolution;
pub mod surface;

pub use error::{MeshError, MeshResult};
pub use mesh::WireframeMesh;
pub use resolution::{Resamplable, Resolution};
pub use revolution::{
    height_profile_functions, planar_curve_functions, revolve_height_profile,
    revolve_planar_curve, SurfaceOfRevolution,
};
pub use surface::{
    build, sample_surface, ParameterBounds, ParametricSurface, SurfaceFn, SurfaceFunctions,
};
