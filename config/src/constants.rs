//! # Configuration Constants
//!
//! Centralized constants for the surface mesher. Grid resolutions, default
//! parameter ranges and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Grid sample counts (n, k)
//! - **Ranges**: Default parameter domains

use std::f64::consts::TAU;
use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Sample positions are computed as `start + i * delta`, so the last sample
/// only lands on the range end up to rounding. Boundary-sample checks
/// compare against range ends with this tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Minimum number of grid lines in either parametric direction.
///
/// Two lines are needed to form at least one segment per direction; with a
/// single line the parameter step `(end - start) / (n - 1)` divides by zero.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_RESOLUTION;
///
/// let n = 1;
/// assert!(n < MIN_RESOLUTION);
/// ```
pub const MIN_RESOLUTION: usize = 2;

/// Default number of grid lines used by the built-in surfaces.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_RESOLUTION;
///
/// let vertices = DEFAULT_RESOLUTION * DEFAULT_RESOLUTION;
/// assert_eq!(vertices, 2401);
/// ```
pub const DEFAULT_RESOLUTION: usize = 49;

/// Largest number of grid samples in one mesh.
///
/// Segments store `u32` vertex indices, so every flat index `i*k + j` must
/// fit in a `u32`.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_GRID_VERTICES;
///
/// let (n, k) = (1usize << 16, (1usize << 16) + 1);
/// assert!(n * k > MAX_GRID_VERTICES);
/// ```
pub const MAX_GRID_VERTICES: usize = u32::MAX as usize;

// =============================================================================
// RANGE CONSTANTS
// =============================================================================

/// Default parameter range of the built-in surfaces, `[-1, 1]`.
pub const DEFAULT_PARAMETER_RANGE: (f64, f64) = (-1.0, 1.0);

/// Default angular range of a surface of revolution, one full turn.
///
/// The end angle is sampled, so the first and last lines of longitude
/// coincide without being joined.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_REVOLUTION_RANGE;
///
/// let (theta1, theta2) = DEFAULT_REVOLUTION_RANGE;
/// assert_eq!(theta1, 0.0);
/// assert_eq!(theta2, std::f64::consts::TAU);
/// ```
pub const DEFAULT_REVOLUTION_RANGE: (f64, f64) = (0.0, TAU);

// =============================================================================
// GRID DEFAULTS
// =============================================================================

/// Immutable snapshot of the grid resolution used when a caller does not
/// provide one.
///
/// # Examples
/// ```
/// use config::constants::GridDefaults;
/// let defaults = GridDefaults::default();
/// assert_eq!(defaults.n(), 49);
/// assert_eq!(defaults.k(), 49);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDefaults {
    n: usize,
    k: usize,
}

impl GridDefaults {
    /// Builds a snapshot, rejecting counts below [`MIN_RESOLUTION`].
    ///
    /// # Examples
    /// ```
    /// use config::constants::GridDefaults;
    /// let grid = GridDefaults::new(12, 24).expect("valid grid");
    /// assert_eq!(grid.k(), 24);
    /// assert!(GridDefaults::new(1, 24).is_err());
    /// ```
    pub fn new(n: usize, k: usize) -> Result<Self, ConfigError> {
        if n < MIN_RESOLUTION {
            return Err(ConfigError::InvalidResolution(n));
        }
        if k < MIN_RESOLUTION {
            return Err(ConfigError::InvalidResolution(k));
        }
        Ok(Self { n, k })
    }

    /// Number of grid lines along the first parameter.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of grid lines along the second parameter.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }
}

impl Default for GridDefaults {
    fn default() -> Self {
        Self {
            n: DEFAULT_RESOLUTION,
            k: DEFAULT_RESOLUTION,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when a grid line count is below [`MIN_RESOLUTION`].
    InvalidResolution(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidResolution(value) => {
                write!(f, "grid line count must be >= {MIN_RESOLUTION}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
