//! # Grid Resolution
//!
//! Validated sample counts and the capability shared by every mesh that can
//! be regenerated at a different resolution.

use crate::error::{MeshError, MeshResult};
use config::constants::{GridDefaults, DEFAULT_RESOLUTION, MAX_GRID_VERTICES, MIN_RESOLUTION};

/// Number of grid lines along each parameter, both at least two.
///
/// `n` counts lines along the first parameter `s`, `k` along the second
/// parameter `t`. A `Resolution` can only be obtained through validation, so
/// every sampler that accepts one may divide by `n - 1` and `k - 1`, and
/// every flat index `i*k + j` fits in a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    n: usize,
    k: usize,
}

impl Resolution {
    /// Resolution of the built-in surfaces.
    pub const DEFAULT: Self = Self {
        n: DEFAULT_RESOLUTION,
        k: DEFAULT_RESOLUTION,
    };

    /// Validates a pair of line counts.
    ///
    /// # Example
    ///
    /// ```rust
    /// use surface_mesh::{MeshError, Resolution};
    ///
    /// let res = Resolution::new(3, 5).unwrap();
    /// assert_eq!(res.vertex_count(), 15);
    /// assert_eq!(Resolution::new(1, 5), Err(MeshError::InvalidResolution { n: 1, k: 5 }));
    /// ```
    pub fn new(n: usize, k: usize) -> MeshResult<Self> {
        if n < MIN_RESOLUTION || k < MIN_RESOLUTION {
            return Err(MeshError::invalid_resolution(n, k));
        }
        match n.checked_mul(k) {
            Some(count) if count <= MAX_GRID_VERTICES => Ok(Self { n, k }),
            _ => Err(MeshError::resolution_too_large(n, k)),
        }
    }

    /// Lines along the first parameter.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Lines along the second parameter.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Total number of grid samples, `n * k`.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.n * self.k
    }

    /// Segments along the second parameter, `n * (k - 1)`.
    #[inline]
    pub fn horizontal_segment_count(&self) -> usize {
        self.n * (self.k - 1)
    }

    /// Segments along the first parameter, `(n - 1) * k`.
    #[inline]
    pub fn vertical_segment_count(&self) -> usize {
        (self.n - 1) * self.k
    }

    /// Flat vertex index of grid sample `(i, j)`.
    #[inline]
    pub fn flat_index(&self, i: usize, j: usize) -> usize {
        i * self.k + j
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<GridDefaults> for Resolution {
    type Error = MeshError;

    fn try_from(grid: GridDefaults) -> MeshResult<Self> {
        Self::new(grid.n(), grid.k())
    }
}

/// A mesh that can be regenerated at a new resolution.
///
/// Interactive tools read the current counts and ask for a fresh mesh of
/// the same kind. `remake` never touches `self`; the returned value shares
/// only the immutable component functions and parameter ranges.
pub trait Resamplable: Sized {
    /// Number of lines along the first parameter.
    fn horizontal_count(&self) -> usize;

    /// Number of lines along the second parameter.
    fn vertical_count(&self) -> usize;

    /// Builds a new mesh from the same description at resolution `(n, k)`.
    fn remake(&self, n: usize, k: usize) -> MeshResult<Self>;
}
