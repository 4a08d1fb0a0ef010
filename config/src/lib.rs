//! # Config Crate
//!
//! Centralized configuration constants for the surface mesher. Grid
//! resolutions, default parameter ranges and comparison tolerances are
//! defined here so the mesher crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_RESOLUTION, MIN_RESOLUTION, EPSILON};
//!
//! let requested = 1;
//! assert!(requested < MIN_RESOLUTION);
//! assert!(DEFAULT_RESOLUTION >= MIN_RESOLUTION);
//!
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure constants and small helpers
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
