//! # Configuration Constants
//!
//! Centralized constants for the procmesh kernel. Geometry tolerances,
//! tessellation parameters, and structural limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default tessellation parameters for generators
//! - **Topology**: Structural limits on mesh elements

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, and for gating deformation terms that divide by a
/// parameter (bend factor, wavelength) against near-zero input.
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

/// Epsilon for rejecting degenerate polygon normals.
///
/// A Newell-summed polygon normal shorter than this is treated as
/// degenerate (collinear or coincident vertices) and reported as the zero
/// vector rather than normalized.
///
/// # Example
///
/// ```rust
/// use config::constants::DEGENERATE_NORMAL_EPSILON;
///
/// let length_sq: f64 = 1e-25;
/// assert!(length_sq < DEGENERATE_NORMAL_EPSILON);
/// ```
pub const DEGENERATE_NORMAL_EPSILON: f64 = 1e-12;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default angular tessellation for generators with circular cross-sections
/// (sphere, cylinder).
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
///
/// assert!(DEFAULT_SEGMENTS >= 12);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 32;

// =============================================================================
// TOPOLOGY CONSTANTS
// =============================================================================

/// Minimum number of vertices a face may reference.
///
/// Any index sequence shorter than this cannot define a polygon and is
/// rejected at insertion.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_FACE_VERTICES;
///
/// assert_eq!(MIN_FACE_VERTICES, 3);
/// ```
pub const MIN_FACE_VERTICES: usize = 3;
