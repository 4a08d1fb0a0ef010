//! # Mesh Errors
//!
//! Error types for surface mesh generation.
//!
//! ## Error Policy
//!
//! - Invalid input is rejected before any sampling happens
//! - No partial mesh is ever returned
//! - Values produced by component functions are never validated

use thiserror::Error;

/// Errors that can occur during surface mesh generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// Grid resolution below two lines in either direction.
    #[error("Invalid resolution: n={n}, k={k} (both must be >= {min})", min = config::constants::MIN_RESOLUTION)]
    InvalidResolution {
        /// Requested number of lines along the first parameter
        n: usize,
        /// Requested number of lines along the second parameter
        k: usize,
    },

    /// Grid with more samples than `u32` vertex indices can address.
    #[error("Resolution too large: n={n}, k={k} (at most {max} vertices)", max = config::constants::MAX_GRID_VERTICES)]
    ResolutionTooLarge {
        /// Requested number of lines along the first parameter
        n: usize,
        /// Requested number of lines along the second parameter
        k: usize,
    },
}

impl MeshError {
    /// Creates an invalid resolution error.
    pub fn invalid_resolution(n: usize, k: usize) -> Self {
        Self::InvalidResolution { n, k }
    }

    /// Creates a resolution too large error.
    pub fn resolution_too_large(n: usize, k: usize) -> Self {
        Self::ResolutionTooLarge { n, k }
    }
}

/// Result type alias for mesh generation.
///
/// ## Example
///
/// ```rust
/// use surface_mesh::{MeshResult, Resolution};
///
/// fn coarse() -> MeshResult<Resolution> {
///     Resolution::new(4, 8)
/// }
/// assert!(coarse().is_ok());
/// ```
pub type MeshResult<T> = Result<T, MeshError>;
